//! Ladder word representation
//!
//! A `Word` is a validated lowercase alphabetic string. Words of equal length
//! are graph peers; length buckets drive candidate generation and sampling.

use std::fmt;

/// A lowercase alphabetic dictionary word
///
/// Immutable once constructed. Ordering and hashing are derived from the
/// underlying text so words can key maps and sort deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAlphabetic,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAlphabetic => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains anything other than ASCII letters after lowercasing
    ///
    /// # Examples
    /// ```
    /// use ladder_engine::core::Word;
    ///
    /// let word = Word::new("Cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::NonAlphabetic);
        }

        Ok(Self(text))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Get the word as raw bytes (always ASCII lowercase)
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.bytes(), b"cat");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(word.text(), "cat");

        let word2 = Word::new("CaT").unwrap();
        assert_eq!(word2.text(), "cat");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("at").unwrap().len(), 2);
        assert_eq!(Word::new("ladder").unwrap().len(), 6);
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("c4t").is_err()); // Number
        assert!(Word::new("ca t").is_err()); // Space
        assert!(Word::new("cat!").is_err()); // Punctuation
        assert!(Word::new("caté").is_err()); // Non-ASCII
    }

    #[test]
    fn word_display() {
        let word = Word::new("dog").unwrap();
        assert_eq!(format!("{word}"), "dog");
    }

    #[test]
    fn word_equality_and_ordering() {
        let cat = Word::new("cat").unwrap();
        let cat2 = Word::new("CAT").unwrap();
        let dog = Word::new("dog").unwrap();

        assert_eq!(cat, cat2); // Case insensitive
        assert_ne!(cat, dog);
        assert!(cat < dog); // Lexicographic
    }
}
