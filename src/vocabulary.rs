//! The word list.

use std::collections::BTreeSet;

use crate::{Error, Result, WordId};

/// A set of distinct words, addressed by `WordId`.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    words: Vec<String>,

    // The letters of each word, for indexing by position.
    letters: Vec<Vec<char>>,
}

impl Vocabulary {
    /// Build a vocabulary from words.  Duplicates are dropped and the
    /// remaining words are kept in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// let vocab = crossword_solver::Vocabulary::new(["dog", "cat", "dog"]).unwrap();
    /// assert_eq!(vocab.len(), 2);
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: BTreeSet<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let words: Vec<String> = words.into_iter().collect();
        let letters = words.iter().map(|w| w.chars().collect()).collect();
        Ok(Vocabulary { words, letters })
    }

    /// Parse a word list, one word per line.  Words are trimmed and
    /// uppercased; blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        Vocabulary::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_uppercase),
        )
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the text of a word.
    pub fn word(&self, id: WordId) -> &str {
        let WordId(idx) = id;
        &self.words[idx]
    }

    /// Get the letters of a word.
    pub fn letters(&self, id: WordId) -> &[char] {
        let WordId(idx) = id;
        &self.letters[idx]
    }

    /// Get the number of letters in a word.
    pub fn word_len(&self, id: WordId) -> usize {
        self.letters(id).len()
    }

    /// Look up a word's id.
    pub fn find(&self, word: &str) -> Option<WordId> {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .ok()
            .map(WordId)
    }

    /// Iterate over all word ids.
    pub fn ids(&self) -> impl Iterator<Item = WordId> {
        (0..self.words.len()).map(WordId)
    }
}
