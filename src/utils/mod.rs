//! Utility functions shared by the indexing pipeline.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file in the user config directory
//! - [`progress`] - Spinners, no-op without the `progress` feature
//! - [`tokenizer`] - Line splitting and delimiter-based word extraction
//!
//! ```
//! use rhidx::utils::{Lines, Tokenizer};
//!
//! let tokenizer = Tokenizer::default();
//! let words: Vec<Vec<&str>> = Lines::new("the cat\nthe the hat\n")
//!     .map(|line| tokenizer.unique_words(line))
//!     .collect();
//! assert_eq!(words, vec![vec!["the", "cat"], vec!["the", "hat"]]);
//! ```

pub mod app_data;
pub mod progress;
pub mod tokenizer;

pub use app_data::*;
pub use tokenizer::*;
