//! Dictionary loading
//!
//! Accepts plain text, one entry per line. A line is either a bare word or
//! `word definition-text...`; the last whitespace-delimited token is taken
//! as the candidate, lowercased, and kept only if purely alphabetic. All
//! other lines are silently dropped.

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    /// The source could not be read
    Io(io::Error),
    /// The source had lines but none survived parsing
    ///
    /// Distinct from a legitimately empty source, which loads as an empty
    /// dictionary.
    NoValidWords,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read dictionary: {e}"),
            Self::NoValidWords => write!(f, "Dictionary contained no valid words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::NoValidWords => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parse dictionary lines into a deduplicated word set
///
/// # Errors
/// Returns `DictionaryError::NoValidWords` when the input had non-blank
/// lines but every one of them was rejected.
pub fn parse_lines<'a, I>(lines: I) -> Result<FxHashSet<Word>, DictionaryError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut words = FxHashSet::default();
    let mut saw_content = false;

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        saw_content = true;

        let Some(token) = trimmed.split_whitespace().last() else {
            continue;
        };
        if let Ok(word) = Word::new(token) {
            words.insert(word);
        }
    }

    if saw_content && words.is_empty() {
        return Err(DictionaryError::NoValidWords);
    }

    Ok(words)
}

/// Load and parse a dictionary file
///
/// # Errors
/// Returns `DictionaryError::Io` if the file cannot be read, or
/// `DictionaryError::NoValidWords` if nothing in it parses.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<FxHashSet<Word>, DictionaryError> {
    let content = fs::read_to_string(path)?;
    parse_lines(content.lines())
}
