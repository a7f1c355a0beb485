//! Word list used for validation and target selection
//!
//! Immutable after construction and shared between rounds behind an `Arc`.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use tracing::info;

use crate::error::AppError;

/// Upper-cased set of words of a single fixed length
#[derive(Debug)]
pub struct Dictionary {
    word_length: usize,
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl Dictionary {
    /// Build from a newline-delimited word list
    ///
    /// Lines are trimmed and kept only when they are exactly `word_length`
    /// ASCII letters. Fails if nothing survives the filter.
    pub fn from_word_list(word_list: &str, word_length: usize) -> Result<Self, AppError> {
        let mut words = Vec::new();
        let mut lookup = HashSet::new();

        for line in word_list.lines() {
            let word = line.trim();
            if !is_candidate(word, word_length) {
                continue;
            }
            let word = word.to_ascii_uppercase();
            if lookup.insert(word.clone()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(AppError::EmptyDictionary(word_length));
        }

        Ok(Self {
            word_length,
            words,
            lookup,
        })
    }

    /// Read and build from a word list file
    pub async fn load(path: impl AsRef<Path>, word_length: usize) -> Result<Self, AppError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let dictionary = Self::from_word_list(&text, word_length)?;
        info!(
            "Loaded {} words of length {} from {}",
            dictionary.len(),
            word_length,
            path.display()
        );
        Ok(dictionary)
    }

    /// Check a guess: alphabetic, right length, and in the list (any case)
    pub fn is_valid(&self, word: &str) -> bool {
        is_candidate(word, self.word_length) && self.lookup.contains(&word.to_ascii_uppercase())
    }

    /// Uniformly random word from the list
    pub fn pick_random(&self) -> &str {
        // Non-empty by construction
        let index = rand::thread_rng().gen_range(0..self.words.len());
        &self.words[index]
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_candidate(word: &str, word_length: usize) -> bool {
    word.len() == word_length && word.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_and_normalizes() {
        let list = "crane\n  Slate \nab\nlonger\nc4ane\n\nCRANE\n";
        let dictionary = Dictionary::from_word_list(list, 5).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_valid("CRANE"));
        assert!(dictionary.is_valid("crane"));
        assert!(dictionary.is_valid("sLaTe"));
        assert!(!dictionary.is_valid("longer"));
        assert!(!dictionary.is_valid("c4ane"));
    }

    #[test]
    fn test_rejects_malformed_guesses() {
        let dictionary = Dictionary::from_word_list("crane", 5).unwrap();

        assert!(!dictionary.is_valid(""));
        assert!(!dictionary.is_valid("cran"));
        assert!(!dictionary.is_valid("cranes"));
        assert!(!dictionary.is_valid("cr ne"));
        assert!(!dictionary.is_valid("cran3"));
        assert!(!dictionary.is_valid("slate"));
    }

    #[test]
    fn test_empty_word_list_is_fatal() {
        let result = Dictionary::from_word_list("ab\nabcdef\n\n", 5);
        assert!(matches!(result, Err(AppError::EmptyDictionary(5))));
    }

    #[test]
    fn test_pick_random_returns_member() {
        let dictionary = Dictionary::from_word_list("crane\nslate\npudgy", 5).unwrap();
        for _ in 0..20 {
            let word = dictionary.pick_random();
            assert!(dictionary.is_valid(word));
            assert_eq!(word, word.to_ascii_uppercase());
        }
    }

    #[test]
    fn test_configurable_length() {
        let dictionary = Dictionary::from_word_list("cat\ncrane\ndog", 3).unwrap();
        assert_eq!(dictionary.word_length(), 3);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_valid("DOG"));
        assert!(!dictionary.is_valid("crane"));
    }
}
