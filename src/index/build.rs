use crate::table::{Insert, LineNo, RobinHoodTable, TableError};
use crate::utils::progress::spinner;
use crate::utils::{AppConfig, Lines, Tokenizer};
use anyhow::{Context, Result};
use memmap2::Mmap;
use rayon::prelude::*;
use std::borrow::Cow;
use std::fs::File;
use std::hash::BuildHasher;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Settings for one build pass
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub delimiters: String,
    /// Lines tokenized per parallel batch
    pub chunk_lines: usize,
    pub load_factor_threshold: f64,
    pub silent: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for BuildOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            delimiters: config.delimiters.clone(),
            chunk_lines: config.chunk_lines,
            load_factor_threshold: config.load_factor_threshold,
            silent: false,
        }
    }
}

/// Summary of a finished build pass
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub lines: usize,
    /// Words that took a new slot
    pub inserted: usize,
    /// Words merged into an existing entry
    pub merged: usize,
    pub elapsed: Duration,
    pub load_factor: f64,
    pub over_threshold: bool,
}

/// Index every word of `text` into `table`, numbering lines from 1.
///
/// Lines are tokenized in parallel batches; insertion into the table is
/// sequential and in line order. Each word is inserted at most once per line.
pub fn index_text<S: BuildHasher>(
    table: &mut RobinHoodTable<S>,
    text: &str,
    options: &BuildOptions,
) -> Result<BuildReport> {
    let start = Instant::now();
    let progress = spinner("Indexing words...", options.silent);

    let tokenizer = Tokenizer::new(&options.delimiters);
    let lines: Vec<&str> = Lines::new(text).collect();
    let chunk_lines = options.chunk_lines.max(1);

    let mut inserted = 0;
    let mut merged = 0;

    for (chunk_idx, chunk) in lines.chunks(chunk_lines).enumerate() {
        let base = chunk_idx * chunk_lines;
        let tokenized: Vec<Vec<&str>> = chunk
            .par_iter()
            .map(|line| tokenizer.unique_words(line))
            .collect();

        for (offset, words) in tokenized.iter().enumerate() {
            let line_no = LineNo::try_from(base + offset + 1)
                .context("Input has more lines than a line number can hold")?;

            for word in words {
                match table.insert(word, line_no) {
                    Ok(Insert::Inserted) => inserted += 1,
                    Ok(Insert::Merged(_)) => merged += 1,
                    Err(err @ TableError::TableFull { .. }) => {
                        return Err(anyhow::Error::new(err).context(format!(
                            "Could not index {:?} on line {}; rerun with a larger --capacity",
                            word, line_no
                        )));
                    }
                    Err(err) => {
                        return Err(anyhow::Error::new(err)
                            .context(format!("Could not index {:?} on line {}", word, line_no)));
                    }
                }
            }
        }

        debug!(chunk = chunk_idx, lines = chunk.len(), "tokenized chunk");
    }

    let load_factor = table.load_factor();
    let over_threshold = load_factor > options.load_factor_threshold;
    if over_threshold {
        warn!(
            "Table occupancy {:.2} exceeds {:.2}",
            load_factor, options.load_factor_threshold
        );
    }

    if let Some(spinner) = progress {
        spinner.finish_with_message(format!(
            "Indexed {} lines ({} distinct words)",
            lines.len(),
            table.len()
        ));
    }

    Ok(BuildReport {
        lines: lines.len(),
        inserted,
        merged,
        elapsed: start.elapsed(),
        load_factor,
        over_threshold,
    })
}

/// Memory-map `path` and index its contents into `table`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn index_file<S: BuildHasher>(
    table: &mut RobinHoodTable<S>,
    path: &Path,
    options: &BuildOptions,
) -> Result<BuildReport> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    let len = file.metadata()?.len();

    // Zero-length files cannot be mapped on every platform
    if len == 0 {
        return index_text(table, "", options);
    }

    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map input file {}", path.display()))?;

    let text = String::from_utf8_lossy(&mmap);
    if let Cow::Owned(_) = text {
        warn!("{} is not valid UTF-8; invalid bytes were replaced", path.display());
    }

    index_text(table, &text, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silent() -> BuildOptions {
        BuildOptions {
            silent: true,
            ..BuildOptions::default()
        }
    }

    #[test]
    fn test_index_text() {
        let mut table = RobinHoodTable::new(64).unwrap();
        let text = "Cat sat on the mat.\nThe cat chased a rat.\nA rat ran.\n";
        let report = index_text(&mut table, text, &silent()).unwrap();

        assert_eq!(report.lines, 3);
        assert_eq!(table.len(), 12);
        assert_eq!(table.get("rat").unwrap().lines(), &[2, 3]);
        assert_eq!(table.get("Cat").unwrap().lines(), &[1]);
        assert_eq!(table.get("cat").unwrap().lines(), &[2]);
        assert!(!report.over_threshold);
    }

    #[test]
    fn test_same_line_repeat_inserted_once() {
        let mut table = RobinHoodTable::new(16).unwrap();
        let report = index_text(&mut table, "the the the\nthe", &silent()).unwrap();

        assert_eq!(report.inserted, 1);
        assert_eq!(report.merged, 1);
        assert_eq!(table.get("the").unwrap().lines(), &[1, 2]);
    }

    #[test]
    fn test_small_chunks_number_lines_correctly() {
        let mut table = RobinHoodTable::new(64).unwrap();
        let options = BuildOptions {
            chunk_lines: 2,
            ..silent()
        };
        let text = "a\nb\nc\nd\ne\na";
        index_text(&mut table, text, &options).unwrap();

        assert_eq!(table.get("a").unwrap().lines(), &[1, 6]);
        assert_eq!(table.get("e").unwrap().lines(), &[5]);
    }

    #[test]
    fn test_table_full_is_an_error() {
        let mut table = RobinHoodTable::new(2).unwrap();
        let err = index_text(&mut table, "one two three", &silent()).unwrap_err();

        assert!(err.to_string().contains("larger --capacity"));
        assert!(matches!(
            err.downcast_ref::<TableError>(),
            Some(TableError::TableFull { capacity: 2 })
        ));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_factor_threshold() {
        let mut table = RobinHoodTable::new(4).unwrap();
        let options = BuildOptions {
            load_factor_threshold: 0.5,
            ..silent()
        };
        let report = index_text(&mut table, "w x y", &options).unwrap();

        assert!(report.over_threshold);
        assert_eq!(report.load_factor, 0.75);
    }

    #[test]
    fn test_index_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "alpha beta\nbeta gamma\n").unwrap();

        let mut table = RobinHoodTable::new(16).unwrap();
        let report = index_file(&mut table, &path, &silent()).unwrap();
        assert_eq!(report.lines, 2);
        assert_eq!(table.get("beta").unwrap().lines(), &[1, 2]);
    }

    #[test]
    fn test_index_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        let mut table = RobinHoodTable::new(16).unwrap();
        let report = index_file(&mut table, &path, &silent()).unwrap();
        assert_eq!(report.lines, 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_index_missing_file() {
        let mut table = RobinHoodTable::new(16).unwrap();
        let err = index_file(&mut table, Path::new("/nonexistent/input.txt"), &silent());
        assert!(err.is_err());
    }
}
