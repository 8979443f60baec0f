//! Parsing of TeX-format hyphenation patterns.
//!
//! A pattern interleaves letters with digit weights. `"hy3ph"` reads as the
//! letters `h y p h` with weight 3 in the gap between `y` and `p`; every gap
//! without a digit has weight 0. The word-boundary marker `.` counts as a
//! letter, so `".ex5am"` only matches at the start of a word.

use smallvec::SmallVec;

use crate::error::{HyphenError, Result};

/// Weight levels for the gaps around a pattern's letters.
///
/// Index 0 is the gap before the first letter, index `n` the gap after the
/// last one. Most TeX patterns are short, so this rarely spills to the heap.
pub type Weights = SmallVec<[u8; 8]>;

/// Marker matching the start or end of a word.
pub const BOUNDARY: char = '.';

/// A compiled hyphenation pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Letters of the pattern, lower-cased, digits removed.
    pub letters: SmallVec<[char; 8]>,
    /// One weight per gap. Always `letters.len() + 1` long.
    pub weights: Weights,
}

impl Pattern {
    /// Parse a single pattern token.
    ///
    /// - `"hy3p"` → letters `['h','y','p']`, weights `[0,0,3,0]`
    /// - `"2ph"` → letters `['p','h']`, weights `[2,0,0]`
    /// - `".ab12c"` → letters `['.','a','b','c']`, weights `[0,0,0,12,0]`
    ///
    /// # Errors
    ///
    /// Fails on characters that are neither letters, digits nor `.`, on
    /// weights above `u8::MAX`, and on tokens with no letters at all.
    pub fn parse(token: &str) -> Result<Self> {
        let mut letters = SmallVec::new();
        let mut weights = Weights::new();
        let mut pending: Option<u8> = None;

        for ch in token.chars() {
            if let Some(digit) = ch.to_digit(10) {
                let level = pending
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|lv| lv.checked_add(digit as u8))
                    .ok_or_else(|| HyphenError::WeightOverflow {
                        pattern: token.to_string(),
                    })?;
                pending = Some(level);
            } else if ch == BOUNDARY {
                weights.push(pending.take().unwrap_or(0));
                letters.push(ch);
            } else if ch.is_alphabetic() {
                // Upper-case letters that fold to several chars get zero
                // weights in the gaps they introduce.
                for (i, lower) in ch.to_lowercase().enumerate() {
                    let level = if i == 0 { pending.take().unwrap_or(0) } else { 0 };
                    weights.push(level);
                    letters.push(lower);
                }
            } else {
                return Err(HyphenError::InvalidPatternChar {
                    pattern: token.to_string(),
                    ch,
                });
            }
        }
        weights.push(pending.unwrap_or(0));

        if letters.is_empty() {
            return Err(HyphenError::EmptyPattern {
                pattern: token.to_string(),
            });
        }

        debug_assert_eq!(weights.len(), letters.len() + 1);
        Ok(Self { letters, weights })
    }

    /// Number of letters, boundary markers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl std::fmt::Display for Pattern {
    /// Writes the pattern back in TeX notation, omitting zero weights.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (letter, &level) in self.letters.iter().zip(&self.weights) {
            if level > 0 {
                write!(f, "{level}")?;
            }
            write!(f, "{letter}")?;
        }
        match self.weights.last() {
            Some(&level) if level > 0 => write!(f, "{level}"),
            _ => Ok(()),
        }
    }
}
