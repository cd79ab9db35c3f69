use vec_map::VecMap;

use crate::crossword::{Solution, VariableId, WordId};
use crate::solve::SolveContext;

/// A partial mapping of variables to words
#[derive(Clone, Debug, Default)]
pub(crate) struct Assignment(VecMap<WordId>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this assignment with one more variable assigned
    pub fn with(&self, id: VariableId, word: WordId) -> Self {
        let mut assignment = self.clone();
        assignment.0.insert(id, word);
        assignment
    }

    pub fn get(&self, id: VariableId) -> Option<WordId> {
        self.0.get(id).copied()
    }

    pub fn contains(&self, id: VariableId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if every variable of the crossword is assigned
    pub fn is_complete(&self, cx: SolveContext<'_>) -> bool {
        self.len() == cx.crossword.variable_count()
    }

    /// Returns true if every assigned word has the length of its variable and agrees with every
    /// assigned neighbor in the shared cell
    pub fn is_consistent(&self, cx: SolveContext<'_>) -> bool {
        self.0.iter().all(|(id, &word)| {
            if cx.vocabulary.word_len(word) != cx.crossword.variable(id).length() {
                return false;
            }
            cx.crossword.neighbors(id).iter().all(|&neighbor| {
                let neighbor_word = match self.get(neighbor) {
                    Some(word) => word,
                    None => return true,
                };
                let (a, b) = match cx.crossword.overlap(id, neighbor) {
                    Some(overlap) => overlap,
                    None => return true,
                };
                match (
                    cx.vocabulary.letter(word, a),
                    cx.vocabulary.letter(neighbor_word, b),
                ) {
                    (Some(x), Some(y)) => x == y,
                    _ => false,
                }
            })
        })
    }

    pub fn to_solution(&self, cx: SolveContext<'_>) -> Solution {
        self.0
            .iter()
            .map(|(id, &word)| (*cx.crossword.variable(id), cx.vocabulary.word(word)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::crossword::{Crossword, Direction, Variable, Vocabulary};
    use crate::solve::{Assignment, SolveContext};

    #[test]
    fn consistent() {
        let crossword = Crossword::parse("___\n_##\n_##").unwrap();
        let vocabulary = Vocabulary::new(vec!["cat", "tar", "rat", "to"]);
        let cx = SolveContext::new(&crossword, &vocabulary);
        let empty = Assignment::new();
        assert!(empty.is_consistent(cx));
        assert!(!empty.is_complete(cx));
        let tar = empty.with(0, 1);
        assert!(tar.is_consistent(cx));
        assert!(tar.with(1, 1).is_consistent(cx));
        assert!(tar.with(1, 1).is_complete(cx));
        assert!(!tar.with(1, 0).is_consistent(cx));
        // wrong length
        assert!(!empty.with(1, 3).is_consistent(cx));
        // the parent is not changed by `with`
        assert_eq!(1, tar.len());
        assert!(!tar.contains(1));
    }

    #[test]
    fn to_solution() {
        let crossword = Crossword::parse("___\n_##\n_##").unwrap();
        let vocabulary = Vocabulary::new(vec!["tar", "tip"]);
        let cx = SolveContext::new(&crossword, &vocabulary);
        let solution = Assignment::new().with(0, 0).with(1, 1).to_solution(cx);
        assert_eq!(
            Some("TAR"),
            solution.get(&Variable::new(0, 0, Direction::Across, 3))
        );
        assert_eq!(
            Some("TIP"),
            solution.get(&Variable::new(0, 0, Direction::Down, 3))
        );
    }
}
