//! Parse crossword structures and word lists from text

use crate::collections::{Coord, Grid};
use crate::error::{ParseError, ParseErrorType};

const OPEN_CELL: char = '_';

/// Parses a crossword structure. Each line is a row of the grid where `_` is an open cell and any
/// other character is a blocked cell. Rows shorter than the longest row are padded with blocked
/// cells.
pub(crate) fn parse_structure(s: &str) -> Result<Grid<bool>, ParseError> {
    let rows: Vec<Vec<bool>> = s
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .map(|line| line.chars().map(|c| c == OPEN_CELL).collect())
        .collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if width == 0 {
        return Err(ParseError::from_type(ParseErrorType::EmptyStructure));
    }
    let mut structure = Grid::with_value(rows.len(), width, false);
    for (i, row) in rows.iter().enumerate() {
        for (j, &open) in row.iter().enumerate() {
            structure[Coord::new(i, j)] = open;
        }
    }
    Ok(structure)
}

/// Parses a newline-delimited list of words. Blank lines are skipped.
pub(crate) fn parse_words(s: &str) -> Result<Vec<&str>, ParseError> {
    let mut words = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if word.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ParseError::at_line(ParseErrorType::InvalidWord, i + 1));
        }
        words.push(word);
    }
    Ok(words)
}
