//! Fixed-capacity Robin Hood hash table mapping words to line lists.
//!
//! ## Modules
//!
//! - [`hash`] - djb2 string hash used to pick a word's ideal slot
//! - [`lines`] - growable line-number list with repeat suppression
//! - [`entry`] - one word's record (word, lines, probe distance)
//! - [`robin_hood`] - the open-addressing table itself
//!
//! ```
//! use rhidx::table::{Insert, RobinHoodTable};
//!
//! let mut table = RobinHoodTable::new(16).unwrap();
//! assert_eq!(table.insert("cat", 3).unwrap(), Insert::Inserted);
//! table.insert("cat", 5).unwrap();
//! assert_eq!(table.get("cat").unwrap().lines(), &[3, 5]);
//! ```

pub mod entry;
pub mod error;
pub mod hash;
pub mod lines;
pub mod robin_hood;

pub use entry::Entry;
pub use error::TableError;
pub use hash::{BuildDjb2, Djb2Hasher, djb2};
pub use lines::{Append, LineList, LineNo};
pub use robin_hood::{Insert, RobinHoodTable};
