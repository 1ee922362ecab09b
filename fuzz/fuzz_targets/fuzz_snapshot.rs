#![no_main]

use libfuzzer_sys::fuzz_target;
use rhidx::index::snapshot::read_snapshot;
use rhidx::table::RobinHoodTable;

fuzz_target!(|data: &[u8]| {
    // Malformed snapshots must error, never panic
    let mut table = RobinHoodTable::new(64).unwrap();
    let _ = read_snapshot(data, &mut table);
});
