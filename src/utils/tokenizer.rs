use memchr::memchr;
use rustc_hash::FxHashSet;

/// Characters that separate words unless overridden in the config.
pub const DEFAULT_DELIMITERS: &str = " \t\n,;:.";

/// Iterator over the lines of a text, split on `\n` with memchr.
///
/// A trailing newline does not produce an extra empty line.
pub struct Lines<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Lines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.pos >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.pos..];
        match memchr(b'\n', rest.as_bytes()) {
            Some(end) => {
                self.pos += end + 1;
                Some(&rest[..end])
            }
            None => {
                self.pos = self.text.len();
                Some(rest)
            }
        }
    }
}

/// Splits lines into words on a fixed delimiter set.
///
/// Words keep their case and punctuation other than the delimiters, so
/// `Cat` and `cat` index separately.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiters: Vec<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITERS)
    }
}

impl Tokenizer {
    pub fn new(delimiters: &str) -> Self {
        Self {
            delimiters: delimiters.chars().collect(),
        }
    }

    /// Non-empty words of `line` in order, repeats included.
    pub fn words<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split(&self.delimiters[..]).filter(|w| !w.is_empty())
    }

    /// Distinct words of `line` in first-occurrence order.
    ///
    /// Each word is inserted into the table at most once per line.
    pub fn unique_words<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut seen = FxHashSet::default();
        let stripped = line.strip_suffix('\r').unwrap_or(line);
        stripped
            .split(&self.delimiters[..])
            .filter(|w| !w.is_empty() && seen.insert(*w))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let lines: Vec<_> = Lines::new("one\ntwo\n\nfour").collect();
        assert_eq!(lines, vec!["one", "two", "", "four"]);
    }

    #[test]
    fn test_lines_trailing_newline() {
        let lines: Vec<_> = Lines::new("a\nb\n").collect();
        assert_eq!(lines, vec!["a", "b"]);
        assert_eq!(Lines::new("").count(), 0);
    }

    #[test]
    fn test_default_delimiters() {
        let tokenizer = Tokenizer::default();
        let words: Vec<_> = tokenizer.words("Cat sat on the mat.").collect();
        assert_eq!(words, vec!["Cat", "sat", "on", "the", "mat"]);

        let words: Vec<_> = tokenizer.words("a,b;c:d\te").collect();
        assert_eq!(words, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_crlf_stripped() {
        let tokenizer = Tokenizer::default();
        let words: Vec<_> = tokenizer.words("end of line\r").collect();
        assert_eq!(words, vec!["end", "of", "line"]);
    }

    #[test]
    fn test_unique_words() {
        let tokenizer = Tokenizer::default();
        let words = tokenizer.unique_words("the cat and the hat and the bat");
        assert_eq!(words, vec!["the", "cat", "and", "hat", "bat"]);
    }

    #[test]
    fn test_custom_delimiters() {
        let tokenizer = Tokenizer::new("-");
        let words: Vec<_> = tokenizer.words("snake-case words").collect();
        assert_eq!(words, vec!["snake", "case words"]);
    }

    #[test]
    fn test_case_preserved() {
        let tokenizer = Tokenizer::default();
        assert_eq!(tokenizer.unique_words("Cat cat"), vec!["Cat", "cat"]);
    }
}
