//! Crossword structures and the word slots derived from them

pub use self::solution::{Solution, SolutionDisplay};
pub use self::variable::{Direction, Variable};
pub use self::vocabulary::Vocabulary;

use std::fmt;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use crate::collections::{Coord, Grid};
use crate::crossword::parse::parse_structure;
use crate::error::{FromFileError, ParseError};
use crate::HashMap;

mod parse;
mod solution;
mod variable;
mod vocabulary;

pub type VariableId = usize;
pub type WordId = usize;

/// The letter indices `(a, b)` where the `a`th letter of one variable and the `b`th letter of
/// another variable share a cell
pub type Overlap = (usize, usize);

/// The structure of a crossword: which cells are open, and the word slots they form
pub struct Crossword {
    structure: Grid<bool>,
    variables: Vec<Variable>,
    variable_ids: HashMap<Variable, VariableId>,
    overlaps: HashMap<(VariableId, VariableId), Overlap>,
    /// sorted neighbors of each variable
    neighbors: Vec<Vec<VariableId>>,
}

impl Crossword {
    /// Creates a crossword where `true` marks an open cell
    pub fn new(structure: Grid<bool>) -> Self {
        let variables = find_variables(&structure);
        let mut variable_ids = HashMap::new();
        for (id, &variable) in variables.iter().enumerate() {
            variable_ids.insert(variable, id);
        }
        let overlaps = find_overlaps(&structure, &variables);
        let mut neighbors = vec![Vec::new(); variables.len()];
        for &(x, y) in overlaps.keys() {
            neighbors[x].push(y);
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }
        debug!(
            "crossword has {} variables and {} overlaps",
            variables.len(),
            overlaps.len() / 2
        );
        Self {
            structure,
            variables,
            variable_ids,
            overlaps,
            neighbors,
        }
    }

    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse_structure(s).map(Self::new)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FromFileError> {
        let s = fs::read_to_string(path)?;
        let crossword = Self::parse(&s)?;
        Ok(crossword)
    }

    pub fn width(&self) -> usize {
        self.structure.width()
    }

    pub fn height(&self) -> usize {
        self.structure.height()
    }

    /// Returns true if the cell can hold a letter
    pub fn is_open(&self, coord: Coord) -> bool {
        self.structure.get(coord).copied().unwrap_or(false)
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn variable_id(&self, variable: &Variable) -> Option<VariableId> {
        self.variable_ids.get(variable).copied()
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// The variables that share a cell with `id`, in ascending order
    pub fn neighbors(&self, id: VariableId) -> &[VariableId] {
        &self.neighbors[id]
    }

    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Checks that a solution has a word of the right length for every variable, and that crossing
    /// words agree on their shared letters
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        if solution.len() != self.variables.len() {
            return false;
        }
        let letters: Option<Vec<Vec<char>>> = self
            .variables
            .iter()
            .map(|variable| solution.get(variable).map(|word| word.chars().collect()))
            .collect();
        let letters = match letters {
            Some(letters) => letters,
            None => return false,
        };
        let lengths_match = self
            .variables
            .iter()
            .zip(&letters)
            .all(|(variable, word)| word.len() == variable.length());
        lengths_match
            && self
                .overlaps
                .iter()
                .all(|(&(x, y), &(a, b))| letters[x][a] == letters[y][b])
    }
}

impl Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.structure.rows() {
            for &open in row {
                write!(f, "{}", if open { '_' } else { '#' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Finds every run of two or more open cells, first across each row and then down each column
fn find_variables(structure: &Grid<bool>) -> Vec<Variable> {
    let (height, width) = (structure.height(), structure.width());
    let mut variables = Vec::new();
    let mut push_runs = |direction: Direction, outer: usize, inner: usize| {
        for a in 0..outer {
            let coord = |b: usize| match direction {
                Direction::Across => Coord::new(a, b),
                Direction::Down => Coord::new(b, a),
            };
            let mut b = 0;
            while b < inner {
                if !structure[coord(b)] {
                    b += 1;
                    continue;
                }
                let start = b;
                while b < inner && structure[coord(b)] {
                    b += 1;
                }
                let length = b - start;
                if length > 1 {
                    let start = coord(start);
                    variables.push(Variable::new(start.row(), start.col(), direction, length));
                }
            }
        }
    };
    push_runs(Direction::Across, height, width);
    push_runs(Direction::Down, width, height);
    variables
}

/// Maps every ordered pair of crossing variables to their shared letter indices
fn find_overlaps(
    structure: &Grid<bool>,
    variables: &[Variable],
) -> HashMap<(VariableId, VariableId), Overlap> {
    // the variables covering each cell, with the letter index
    let mut cell_variables: Grid<Vec<(VariableId, usize)>> =
        Grid::with_value(structure.height(), structure.width(), Vec::new());
    for (id, variable) in variables.iter().enumerate() {
        for (k, coord) in variable.cells().enumerate() {
            cell_variables[coord].push((id, k));
        }
    }
    let mut overlaps = HashMap::new();
    for entries in cell_variables.iter() {
        for &(x, a) in entries {
            for &(y, b) in entries {
                if x != y {
                    overlaps.insert((x, y), (a, b));
                }
            }
        }
    }
    overlaps
}
