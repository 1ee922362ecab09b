use super::error::TableError;
use super::lines::{Append, LineList, LineNo};

/// Index record for one distinct word.
///
/// An entry owns its word and its line list outright. Inside a table it only
/// ever moves between slots; it is never cloned into a second slot.
#[derive(Debug, PartialEq, Eq)]
pub struct Entry {
    word: String,
    lines: LineList,
    /// Slots past the word's ideal index, as of its current slot
    probe_distance: usize,
}

impl Entry {
    /// Build a candidate entry owning a copy of `word` and the single `line`.
    ///
    /// Both allocations are fallible. If the line list cannot be allocated the
    /// word copy is dropped before the error is returned.
    pub(crate) fn candidate(word: &str, line: LineNo) -> Result<Self, TableError> {
        let mut owned = String::new();
        owned.try_reserve_exact(word.len())?;
        owned.push_str(word);

        let lines = LineList::with_line(line)?;

        Ok(Self {
            word: owned,
            lines,
            probe_distance: 0,
        })
    }

    #[inline]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    pub fn lines(&self) -> &[LineNo] {
        self.lines.as_slice()
    }

    #[inline]
    pub fn line_list(&self) -> &LineList {
        &self.lines
    }

    #[inline]
    pub fn probe_distance(&self) -> usize {
        self.probe_distance
    }

    pub(crate) fn set_probe_distance(&mut self, distance: usize) {
        self.probe_distance = distance;
    }

    pub(crate) fn append(&mut self, line: LineNo) -> Result<Append, TableError> {
        self.lines.append(line)
    }

    /// Split into the owned word and line numbers.
    pub fn into_parts(self) -> (String, Vec<LineNo>) {
        (self.word, self.lines.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate() {
        let entry = Entry::candidate("robin", 7).unwrap();
        assert_eq!(entry.word(), "robin");
        assert_eq!(entry.lines(), &[7]);
        assert_eq!(entry.probe_distance(), 0);
    }

    #[test]
    fn test_into_parts() {
        let mut entry = Entry::candidate("hood", 1).unwrap();
        entry.append(2).unwrap();
        let (word, lines) = entry.into_parts();
        assert_eq!(word, "hood");
        assert_eq!(lines, vec![1, 2]);
    }
}
