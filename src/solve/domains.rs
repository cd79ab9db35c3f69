use std::ops::Index;

use crate::crossword::{VariableId, WordId};
use crate::solve::WordSet;

/// The candidate words of every variable
///
/// The search clones the whole store before each guess so that pruning done for one guess is
/// never seen by the next one.
#[derive(Clone, Debug)]
pub(crate) struct Domains(Vec<WordSet>);

impl Domains {
    /// Every variable starts with every word of the vocabulary
    pub fn with_all(variable_count: usize, word_count: usize) -> Self {
        Self(vec![WordSet::with_all(word_count); variable_count])
    }

    pub fn get(&self, id: VariableId) -> &WordSet {
        &self.0[id]
    }

    pub fn get_mut(&mut self, id: VariableId) -> &mut WordSet {
        &mut self.0[id]
    }

    /// Restricts the domain of a variable to a single word
    pub fn assign(&mut self, id: VariableId, word: WordId) {
        debug_assert!(self.0[id].contains(word));
        self.0[id].retain(|w| w == word);
    }

    /// Returns true if no variable has run out of candidates
    pub fn is_viable(&self) -> bool {
        self.0.iter().all(|domain| !domain.is_empty())
    }
}

impl Index<VariableId> for Domains {
    type Output = WordSet;

    fn index(&self, id: VariableId) -> &Self::Output {
        self.get(id)
    }
}
