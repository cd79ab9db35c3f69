use std::fmt::{Debug, Formatter};

use crate::collections::range_set;
use crate::collections::RangeSet;
use crate::crossword::WordId;

/// A small abstraction over `RangeSet` for the words of a vocabulary
#[derive(Clone)]
pub(crate) struct WordSet(RangeSet);

impl Debug for WordSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl WordSet {
    /// Creates a set containing every word in a vocabulary of `word_count` words
    pub fn with_all(word_count: usize) -> Self {
        WordSet(RangeSet::with_all(word_count))
    }

    pub fn contains(&self, word: WordId) -> bool {
        self.0.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> range_set::Iter<'_> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Removes every word for which `f` returns false. Returns the number of removed words.
    pub fn retain(&mut self, f: impl FnMut(WordId) -> bool) -> usize {
        self.0.retain(f)
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = WordId;
    type IntoIter = range_set::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
