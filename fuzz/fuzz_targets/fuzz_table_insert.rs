#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rhidx::table::{RobinHoodTable, TableError};

#[derive(Arbitrary, Debug)]
struct Input {
    capacity: u8,
    ops: Vec<(String, u16)>,
}

fuzz_target!(|input: Input| {
    let capacity = input.capacity as usize + 1;
    let mut table = RobinHoodTable::new(capacity).unwrap();

    for (word, line) in &input.ops {
        match table.insert(word, *line as u32) {
            Ok(_) | Err(TableError::InvalidArgument(_)) => {}
            Err(TableError::TableFull { .. }) => assert_eq!(table.len(), capacity),
            Err(TableError::AllocationFailure) => panic!("allocation failed"),
        }
    }

    // Every stored entry sits at its recorded probe distance and is reachable
    for (idx, entry) in table.iter() {
        let ideal = table.ideal_index(entry.word());
        assert_eq!(entry.probe_distance(), (idx + capacity - ideal) % capacity);
        assert!(table.get(entry.word()).is_some());
    }
});
