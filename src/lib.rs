//! # rhidx - Line-number word indexer
//!
//! rhidx reads a text file and records, for every distinct word, the lines
//! it appears on. Words are stored in a fixed-capacity open-addressing hash
//! table with Robin Hood displacement, then written out sorted by word.
//!
//! ## Architecture
//!
//! - [`table`] - The Robin Hood hash table and its entries
//! - [`index`] - Build pass, sorted output, snapshots, statistics
//! - [`output`] - Colored lookup printing
//! - [`utils`] - Tokenizer, configuration, progress spinners
//!
//! ## Quick Start
//!
//! ```
//! use rhidx::index::{BuildOptions, index_text, sorted_records};
//! use rhidx::table::RobinHoodTable;
//!
//! let mut table = RobinHoodTable::new(64).unwrap();
//! let options = BuildOptions { silent: true, ..BuildOptions::default() };
//! index_text(&mut table, "the cat\nthe hat\n", &options).unwrap();
//!
//! let records = sorted_records(table);
//! assert_eq!(records[2].word, "the");
//! assert_eq!(records[2].lines, vec![1, 2]);
//! ```
//!
//! ## Limits
//!
//! A table never grows. Inserting a new word into a full table fails with
//! [`table::TableError::TableFull`] and the caller rebuilds with a larger
//! capacity. A table is built by a single writer; there is no deletion.

pub mod index;
pub mod output;
pub mod table;
pub mod utils;
