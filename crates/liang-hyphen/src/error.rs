use thiserror::Error;

pub type Result<T> = std::result::Result<T, HyphenError>;

/// Errors raised while compiling a hyphenation dictionary.
///
/// Hyphenating a word never fails; every variant here is a construction-time
/// problem with a pattern, exception or dictionary header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HyphenError {
    #[error("invalid character {ch:?} in pattern {pattern:?}")]
    InvalidPatternChar { pattern: String, ch: char },

    #[error("pattern {pattern:?} contains no letters")]
    EmptyPattern { pattern: String },

    #[error("weight in pattern {pattern:?} exceeds {max}", max = u8::MAX)]
    WeightOverflow { pattern: String },

    #[error("invalid character {ch:?} in exception {exception:?}")]
    InvalidException { exception: String, ch: char },

    #[error("invalid dictionary header on line {line}: {message}")]
    InvalidHeader { line: usize, message: String },
}

impl HyphenError {
    #[must_use]
    pub fn header(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            line,
            message: message.into(),
        }
    }
}
