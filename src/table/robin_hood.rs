use super::entry::Entry;
use super::error::TableError;
use super::hash::BuildDjb2;
use super::lines::{Append, LineNo};
use std::hash::{BuildHasher, Hasher};

/// Result of a successful [`RobinHoodTable::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insert {
    /// The word was new and now occupies a slot
    Inserted,
    /// The word was already present; the line was appended or skipped
    Merged(Append),
}

/// Open-addressing word table with linear probing and Robin Hood displacement.
///
/// Capacity is fixed at construction. There is no deletion and no rehash;
/// callers that outgrow a table rebuild into a larger one.
///
/// Invariants, for every occupied slot `i` holding entry `e`:
/// - `e.probe_distance() == (i - ideal_index(e.word())) mod capacity`
/// - no other slot holds `e.word()`
#[derive(Debug)]
pub struct RobinHoodTable<S = BuildDjb2> {
    slots: Box<[Option<Entry>]>,
    occupied: usize,
    hash_builder: S,
}

impl RobinHoodTable<BuildDjb2> {
    /// Create a table of `capacity` empty slots using the djb2 hash.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Self::with_hasher(capacity, BuildDjb2::default())
    }
}

impl<S: BuildHasher> RobinHoodTable<S> {
    /// Create a table of `capacity` empty slots hashed by `hash_builder`.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidArgument("capacity must be positive"));
        }

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            occupied: 0,
            hash_builder,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.capacity() as f64
    }

    /// Slot a word hashes to before any collision is resolved.
    pub fn ideal_index(&self, word: &str) -> usize {
        ideal_index(&self.hash_builder, word, self.capacity())
    }

    /// Insert `word` seen on `line`, or merge the line into its existing entry.
    ///
    /// Probing starts at the word's ideal slot and walks forward. A resident
    /// that sits closer to its own ideal slot than the probing entry does is
    /// swapped out, and probing continues on behalf of the displaced resident.
    ///
    /// When every slot is occupied a new word is refused with
    /// [`TableError::TableFull`] and the table is left exactly as it was.
    pub fn insert(&mut self, word: &str, line: LineNo) -> Result<Insert, TableError> {
        if word.is_empty() {
            return Err(TableError::InvalidArgument("word must not be empty"));
        }
        if line == 0 {
            return Err(TableError::InvalidArgument("line numbers start at 1"));
        }

        let capacity = self.capacity();

        // No vacancy: a swap chain could only end by evicting a resident.
        if self.occupied == capacity {
            return match self.find_index(word) {
                Some(idx) => match &mut self.slots[idx] {
                    Some(resident) => Ok(Insert::Merged(resident.append(line)?)),
                    None => Err(TableError::TableFull { capacity }),
                },
                None => Err(TableError::TableFull { capacity }),
            };
        }

        let mut idx = ideal_index(&self.hash_builder, word, capacity);
        let mut probe_distance = 0;
        let mut candidate = Entry::candidate(word, line)?;

        for _ in 0..capacity {
            let slot = &mut self.slots[idx];
            match slot {
                None => {
                    candidate.set_probe_distance(probe_distance);
                    *slot = Some(candidate);
                    self.occupied += 1;
                    return Ok(Insert::Inserted);
                }
                Some(resident) if resident.word() == word => {
                    return Ok(Insert::Merged(resident.append(line)?));
                }
                Some(resident) => {
                    let resident_ideal = ideal_index(&self.hash_builder, resident.word(), capacity);
                    let resident_distance = distance(idx, resident_ideal, capacity);
                    if resident_distance < probe_distance {
                        candidate.set_probe_distance(probe_distance);
                        std::mem::swap(resident, &mut candidate);
                        probe_distance = resident_distance;
                    }
                }
            }

            idx = (idx + 1) % capacity;
            probe_distance += 1;
        }

        // A full sweep always meets the vacancy checked for above.
        Err(TableError::TableFull { capacity })
    }

    /// Look up the entry for `word`.
    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.find_index(word)
            .and_then(|idx| self.slots[idx].as_ref())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find_index(word).is_some()
    }

    /// Slot index holding `word`, if present.
    ///
    /// Stops early at an empty slot or at a resident closer to its ideal slot
    /// than the running distance, since `word` would have displaced it.
    fn find_index(&self, word: &str) -> Option<usize> {
        let capacity = self.capacity();
        let mut idx = self.ideal_index(word);

        for probe_distance in 0..capacity {
            match &self.slots[idx] {
                None => return None,
                Some(resident) if resident.word() == word => return Some(idx),
                Some(resident) if resident.probe_distance() < probe_distance => return None,
                Some(_) => {}
            }
            idx = (idx + 1) % capacity;
        }

        None
    }

    /// Occupied slots in slot order, with their slot index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Entry)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|entry| (idx, entry)))
    }

    /// Largest probe distance of any occupied slot.
    pub fn max_probe_distance(&self) -> usize {
        self.iter()
            .map(|(_, entry)| entry.probe_distance())
            .max()
            .unwrap_or(0)
    }

    /// Tear the table down, handing every entry to the caller.
    ///
    /// Dropping the table instead releases each word and line list once.
    pub fn into_entries(self) -> Vec<Entry> {
        self.slots.into_vec().into_iter().flatten().collect()
    }
}

#[inline]
fn ideal_index<S: BuildHasher>(hash_builder: &S, word: &str, capacity: usize) -> usize {
    let mut hasher = hash_builder.build_hasher();
    hasher.write(word.as_bytes());
    (hasher.finish() % capacity as u64) as usize
}

/// Slots from `ideal` forward to `idx`, wrapping at `capacity`.
#[inline]
fn distance(idx: usize, ideal: usize, capacity: usize) -> usize {
    (idx + capacity - ideal) % capacity
}
