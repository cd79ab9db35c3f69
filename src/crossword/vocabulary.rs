use std::fs;
use std::path::Path;

use crate::crossword::parse::parse_words;
use crate::crossword::WordId;
use crate::error::{FromFileError, ParseError};
use crate::HashSet;

/// The words available to fill a crossword
///
/// Words are upper-cased and deduplicated. Each word is identified by its `WordId`, which is its
/// position in the order the words were first seen.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    letters: Vec<Box<[char]>>,
}

impl Vocabulary {
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut vocabulary = Self::default();
        let mut seen = HashSet::new();
        for word in words {
            let word = word.as_ref().trim().to_uppercase();
            if word.is_empty() || !seen.insert(word.clone()) {
                continue;
            }
            vocabulary.letters.push(word.chars().collect());
            vocabulary.words.push(word);
        }
        vocabulary
    }

    /// Reads a newline-delimited list of words
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse_words(s).map(Self::new)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FromFileError> {
        let s = fs::read_to_string(path)?;
        let vocabulary = Self::parse(&s)?;
        Ok(vocabulary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.words[id]
    }

    /// The number of letters in a word
    pub fn word_len(&self, id: WordId) -> usize {
        self.letters[id].len()
    }

    /// The letter at `index` in a word, or `None` if the word is too short
    pub fn letter(&self, id: WordId, index: usize) -> Option<char> {
        self.letters[id].get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
