pub mod build;
pub mod snapshot;
pub mod stats;
pub mod writer;

pub use build::{BuildOptions, BuildReport, index_file, index_text};
pub use snapshot::{SnapshotLoad, load_snapshot, save_snapshot};
pub use stats::TableStats;
pub use writer::{IndexRecord, OutputFormat, sorted_records, write_index};
