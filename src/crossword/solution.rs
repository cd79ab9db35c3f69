use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Display;
use std::iter::FromIterator;

use crate::collections::{Coord, Grid};
use crate::crossword::{Crossword, Variable};

const BLOCKED_CELL: char = '█';

/// A word for every variable of a crossword
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    words: BTreeMap<Variable, String>,
}

impl Solution {
    pub fn get(&self, variable: &Variable) -> Option<&str> {
        self.words.get(variable).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates the variables and their words, ordered by position
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> {
        self.words.iter().map(|(v, w)| (v, w.as_str()))
    }

    /// The letter in each cell of the crossword, if any
    pub fn letter_grid(&self, crossword: &Crossword) -> Grid<Option<char>> {
        let mut letters = Grid::with_value(crossword.height(), crossword.width(), None);
        for (variable, word) in &self.words {
            for (k, letter) in word.chars().take(variable.length()).enumerate() {
                let coord = variable.cell(k);
                if crossword.is_open(coord) {
                    letters[coord] = Some(letter);
                }
            }
        }
        letters
    }

    /// Displays the filled crossword as text
    pub fn display<'a>(&'a self, crossword: &'a Crossword) -> SolutionDisplay<'a> {
        SolutionDisplay {
            crossword,
            solution: self,
        }
    }
}

impl<S: Into<String>> FromIterator<(Variable, S)> for Solution {
    fn from_iter<T: IntoIterator<Item = (Variable, S)>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().map(|(v, w)| (v, w.into())).collect(),
        }
    }
}

pub struct SolutionDisplay<'a> {
    crossword: &'a Crossword,
    solution: &'a Solution,
}

impl Display for SolutionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = self.solution.letter_grid(self.crossword);
        for i in 0..self.crossword.height() {
            for j in 0..self.crossword.width() {
                let coord = Coord::new(i, j);
                let c = if self.crossword.is_open(coord) {
                    letters[coord].unwrap_or(' ')
                } else {
                    BLOCKED_CELL
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
