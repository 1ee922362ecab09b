//! Tab-separated index snapshots.
//!
//! A snapshot holds one record per line, `word\tl1,l2,...`, sorted by word.
//! Loading a snapshot into a table before a build pass lets a new input
//! extend an earlier index.

use super::writer::IndexRecord;
use crate::table::{LineNo, RobinHoodTable};
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::hash::BuildHasher;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Counts from reading a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotLoad {
    pub records: usize,
    /// Blank or malformed lines that were ignored
    pub skipped: usize,
}

pub fn write_snapshot<W: Write>(records: &[IndexRecord], mut out: W) -> io::Result<()> {
    for record in records {
        write!(out, "{}\t", record.word)?;
        for (i, line) in record.lines.iter().enumerate() {
            if i > 0 {
                write!(out, ",")?;
            }
            write!(out, "{}", line)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn save_snapshot(records: &[IndexRecord], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create snapshot {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_snapshot(records, &mut out)?;
    out.flush()
        .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
    Ok(())
}

/// Insert every record of a snapshot into `table`.
///
/// Lines without a tab or with an empty word are skipped. A line number
/// repeated within one record is inserted once.
pub fn read_snapshot<R: BufRead, S: BuildHasher>(
    reader: R,
    table: &mut RobinHoodTable<S>,
) -> Result<SnapshotLoad> {
    let mut load = SnapshotLoad::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read snapshot")?;
        let line_no = idx + 1;

        let Some((word, numbers)) = line.split_once('\t') else {
            if !line.is_empty() {
                debug!(line = line_no, "skipping snapshot line without a tab");
            }
            load.skipped += 1;
            continue;
        };
        if word.is_empty() {
            load.skipped += 1;
            continue;
        }

        let mut seen = FxHashSet::default();
        for number in numbers.split(',') {
            let number = number.trim();
            if number.is_empty() {
                continue;
            }
            let value: LineNo = number.parse().with_context(|| {
                format!("Invalid line number {:?} on snapshot line {}", number, line_no)
            })?;
            if seen.insert(value) {
                table.insert(word, value).with_context(|| {
                    format!("Could not load {:?} from snapshot line {}", word, line_no)
                })?;
            }
        }
        load.records += 1;
    }

    Ok(load)
}

pub fn load_snapshot<S: BuildHasher>(path: &Path, table: &mut RobinHoodTable<S>) -> Result<SnapshotLoad> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open snapshot {}", path.display()))?;
    read_snapshot(BufReader::new(file), table)
}
