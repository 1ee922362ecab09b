use std::hash::{BuildHasherDefault, Hasher};

const DJB2_SEED: u64 = 5381;

/// Hash a word with djb2 (`h = h * 33 + byte`, seeded with 5381).
///
/// Arithmetic wraps, so the digest is stable for any input length.
#[inline]
pub fn djb2(word: &str) -> u64 {
    let mut hasher = Djb2Hasher::default();
    hasher.write(word.as_bytes());
    hasher.finish()
}

/// Streaming djb2 hasher.
///
/// Only `write` is meaningful here: words are fed as raw bytes so that the
/// digest matches the classic byte-at-a-time formulation. `str::hash` would
/// append a terminator byte, so callers hash `as_bytes()` directly.
#[derive(Debug, Clone, Copy)]
pub struct Djb2Hasher {
    state: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self { state: DJB2_SEED }
    }
}

impl Hasher for Djb2Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            // hash * 33 + c
            self.state = (self.state << 5)
                .wrapping_add(self.state)
                .wrapping_add(byte as u64);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// Default `BuildHasher` for [`RobinHoodTable`](super::RobinHoodTable).
pub type BuildDjb2 = BuildHasherDefault<Djb2Hasher>;
