use super::error::TableError;

/// 1-based line number within the indexed source.
pub type LineNo = u32;

/// Capacity of a line list's first allocation.
pub const INITIAL_LINES_CAPACITY: usize = 4;

/// Result of appending a line to a [`LineList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Append {
    /// The line was pushed onto the list
    Appended,
    /// The line equals the list's last element; nothing changed
    Skipped,
}

/// Ordered list of the lines a word appears on.
///
/// Only a repeat of the most recent line is suppressed. A word seen on lines
/// 3, 5 and then 3 again keeps all three values; callers feed lines in
/// ascending order so in practice this only filters same-line repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineList {
    lines: Vec<LineNo>,
}

impl LineList {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a list holding a single line.
    pub fn with_line(line: LineNo) -> Result<Self, TableError> {
        let mut list = Self::new();
        list.append(line)?;
        Ok(list)
    }

    /// Append `line` unless it repeats the last element.
    ///
    /// Capacity doubles (starting at [`INITIAL_LINES_CAPACITY`]) only when the
    /// list is full. On allocation failure the list is left untouched.
    pub fn append(&mut self, line: LineNo) -> Result<Append, TableError> {
        if self.lines.last() == Some(&line) {
            return Ok(Append::Skipped);
        }

        if self.lines.len() == self.lines.capacity() {
            let new_cap = if self.lines.capacity() == 0 {
                INITIAL_LINES_CAPACITY
            } else {
                self.lines.capacity() * 2
            };
            self.lines.try_reserve_exact(new_cap - self.lines.len())?;
        }

        self.lines.push(line);
        Ok(Append::Appended)
    }

    #[inline]
    pub fn as_slice(&self) -> &[LineNo] {
        &self.lines
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.lines.capacity()
    }

    pub fn last(&self) -> Option<LineNo> {
        self.lines.last().copied()
    }

    pub fn into_vec(self) -> Vec<LineNo> {
        self.lines
    }
}
