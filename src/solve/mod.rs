//! Fill crosswords

pub use self::search::SearchStats;

pub(crate) use self::assignment::Assignment;
pub(crate) use self::domains::Domains;
pub(crate) use self::word_set::WordSet;

use crate::crossword::{Crossword, Solution, Vocabulary};
use crate::solve::constraint::{ac3, enforce_node_consistency};
use crate::solve::search::search_solution;

mod assignment;
mod constraint;
mod domains;
mod search;
mod word_set;

pub enum SolveResult {
    /// No assignment of words satisfies the crossword
    Unsolvable,
    /// A word was found for every variable
    Solved(SolvedData),
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SolveResult::Solved(data) => Some(data.solution),
            SolveResult::Unsolvable => None,
        }
    }
}

pub struct SolvedData {
    pub solution: Solution,
    pub stats: SearchStats,
}

/// The crossword and vocabulary shared by every step of solving
#[derive(Clone, Copy)]
pub(crate) struct SolveContext<'a> {
    pub crossword: &'a Crossword,
    pub vocabulary: &'a Vocabulary,
}

impl<'a> SolveContext<'a> {
    pub fn new(crossword: &'a Crossword, vocabulary: &'a Vocabulary) -> Self {
        Self {
            crossword,
            vocabulary,
        }
    }
}

pub struct CrosswordSolver<'a> {
    crossword: &'a Crossword,
    vocabulary: &'a Vocabulary,
}

impl<'a> CrosswordSolver<'a> {
    pub fn new(crossword: &'a Crossword, vocabulary: &'a Vocabulary) -> Self {
        Self {
            crossword,
            vocabulary,
        }
    }

    /// Enforces node and arc consistency, then searches for the first complete assignment
    pub fn solve(&self) -> SolveResult {
        let cx = SolveContext::new(self.crossword, self.vocabulary);
        if self.crossword.variable_count() == 0 {
            info!("Crossword has no words to fill");
            return SolveResult::Unsolvable;
        }
        let mut domains = Domains::with_all(self.crossword.variable_count(), self.vocabulary.len());
        let removed = enforce_node_consistency(cx, &mut domains);
        debug!("node consistency removed {} words", removed);
        if !ac3(cx, &mut domains, None) || !domains.is_viable() {
            info!("Crossword is not arc consistent");
            return SolveResult::Unsolvable;
        }
        info!("Begin backtracking");
        let mut stats = SearchStats::default();
        let assignment = search_solution(cx, &domains, &mut stats);
        info!(
            "Search finished after {} guesses and {} backtracks",
            stats.guesses, stats.backtracks
        );
        let solution = match assignment {
            Some(assignment) => assignment.to_solution(cx),
            None => return SolveResult::Unsolvable,
        };
        debug_assert!(self.crossword.verify_solution(&solution));
        SolveResult::Solved(SolvedData { solution, stats })
    }
}
