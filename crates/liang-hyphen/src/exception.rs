//! Whole-word hyphenation overrides.
//!
//! An exception spells a word with its allowed breaks marked by `-`, as in
//! `"as-so-ciate"`. Exceptions bypass the pattern trie entirely.

use rustc_hash::FxHashMap;

use crate::error::{HyphenError, Result};
use crate::pattern::Weights;

const BREAK: char = '-';

/// Parse an exception like `"ta-ble"` into `("table", [0, 0, 0, 1, 0, 0, 0])`.
///
/// The weights use the same layout as a working vector over `".table."`:
/// index 0 is a sentinel for the leading boundary marker, index 1 the gap
/// before the first letter, and index `i + 2` the gap after letter `i`.
///
/// # Errors
///
/// Characters other than letters and `-` are rejected, as is a run of two
/// or more `-` (`"a--b"`), which marks no well-defined break.
pub fn parse_exception(token: &str) -> Result<(String, Weights)> {
    let mut word = String::with_capacity(token.len());
    let mut weights = Weights::from_slice(&[0, 0]);
    let mut after_break = false;

    for ch in token.chars() {
        if ch == BREAK {
            if after_break {
                return Err(HyphenError::InvalidException {
                    exception: token.to_string(),
                    ch,
                });
            }
            after_break = true;
            if let Some(last) = weights.last_mut() {
                *last = 1;
            }
        } else if ch.is_alphabetic() {
            after_break = false;
            for lower in ch.to_lowercase() {
                word.push(lower);
                weights.push(0);
            }
        } else {
            return Err(HyphenError::InvalidException {
                exception: token.to_string(),
                ch,
            });
        }
    }

    Ok((word, weights))
}

/// Lower-cased words mapped to their explicit break weights.
#[derive(Debug, Clone, Default)]
pub struct ExceptionMap {
    entries: FxHashMap<String, Weights>,
}

impl ExceptionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every whitespace-separated exception token in `exceptions`.
    ///
    /// # Errors
    ///
    /// Stops at the first token [`parse_exception`] rejects.
    pub fn from_tokens(exceptions: &str) -> Result<Self> {
        let mut map = Self::new();
        for token in exceptions.split_whitespace() {
            map.insert_str(token)?;
        }
        Ok(map)
    }

    /// Parse and register one exception. A later spelling of the same word
    /// replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed tokens.
    pub fn insert_str(&mut self, token: &str) -> Result<()> {
        let (word, weights) = parse_exception(token)?;
        self.entries.insert(word, weights);
        Ok(())
    }

    /// Weights for an already lower-cased word.
    #[must_use]
    pub fn get(&self, lower: &str) -> Option<&[u8]> {
        self.entries.get(lower).map(|w| w.as_slice())
    }

    #[must_use]
    pub fn contains(&self, lower: &str) -> bool {
        self.entries.contains_key(lower)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
