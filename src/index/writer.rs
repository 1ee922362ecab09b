use crate::table::{Entry, LineNo, RobinHoodTable};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::hash::BuildHasher;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One word and the lines it appears on, detached from the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub word: String,
    pub lines: Vec<LineNo>,
}

impl From<Entry> for IndexRecord {
    fn from(entry: Entry) -> Self {
        let (word, lines) = entry.into_parts();
        Self { word, lines }
    }
}

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `word: 1, 2, 3` per line
    #[default]
    Text,
    /// JSON array of `{ "word", "lines" }` objects
    Json,
}

/// Consume the table and return its entries sorted by word (byte order).
pub fn sorted_records<S: BuildHasher>(table: RobinHoodTable<S>) -> Vec<IndexRecord> {
    let mut records: Vec<IndexRecord> = table
        .into_entries()
        .into_iter()
        .map(IndexRecord::from)
        .collect();
    records.par_sort_unstable_by(|a, b| a.word.cmp(&b.word));
    records
}

/// Write records as `word: l1, l2, ...` lines.
pub fn write_text<W: Write>(records: &[IndexRecord], mut out: W) -> io::Result<()> {
    for record in records {
        write!(out, "{}: ", record.word)?;
        for (i, line) in record.lines.iter().enumerate() {
            if i > 0 {
                write!(out, ", ")?;
            }
            write!(out, "{}", line)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(records: &[IndexRecord], mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, records).context("Failed to serialize index")?;
    writeln!(out)?;
    Ok(())
}

/// Write the sorted index to `path` in the requested format
pub fn write_index(records: &[IndexRecord], path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to open output file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    match format {
        OutputFormat::Text => write_text(records, &mut out)?,
        OutputFormat::Json => write_json(records, &mut out)?,
    }

    out.flush()
        .with_context(|| format!("Failed to write output file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(&str, &[LineNo])]) -> Vec<IndexRecord> {
        pairs
            .iter()
            .map(|(word, lines)| IndexRecord {
                word: word.to_string(),
                lines: lines.to_vec(),
            })
            .collect()
    }

    #[test]
    fn test_sorted_records() {
        let mut table = RobinHoodTable::new(32).unwrap();
        for (word, line) in [("rat", 2), ("Cat", 1), ("a", 2), ("rat", 3), ("A", 3)] {
            table.insert(word, line).unwrap();
        }

        let sorted = sorted_records(table);
        let words: Vec<_> = sorted.iter().map(|r| r.word.as_str()).collect();
        // Uppercase sorts before lowercase in byte order
        assert_eq!(words, vec!["A", "Cat", "a", "rat"]);
        assert_eq!(sorted[3].lines, vec![2, 3]);
    }

    #[test]
    fn test_write_text() {
        let mut out = Vec::new();
        write_text(&records(&[("cat", &[3, 5, 3]), ("mat", &[1])]), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "cat: 3, 5, 3\nmat: 1\n");
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&records(&[("cat", &[1, 2])]), &mut out).unwrap();

        let parsed: Vec<IndexRecord> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, records(&[("cat", &[1, 2])]));
    }

    #[test]
    fn test_write_index_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.txt");
        write_index(&records(&[("x", &[7])]), &path, OutputFormat::Text).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x: 7\n");
    }
}
