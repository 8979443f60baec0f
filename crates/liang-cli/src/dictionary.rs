//! Turning command-line dictionary options into a [`Hyphenator`].

use std::path::{Path, PathBuf};

use clap::Args;
use liang_hyphen::{
    ENGLISH_EXCEPTIONS_MINI, ENGLISH_PATTERNS_MINI, Hyphenator, PatternSource, SourceFormat,
};

use crate::error::{CliError, Result};

#[derive(Debug, Clone, Default, Args)]
pub struct DictionaryArgs {
    /// Pattern file: a libhyphen `.dic` or a TeX `hyph-*.tex`. Defaults to
    /// the built-in English subset.
    #[arg(long, value_name = "FILE")]
    pub patterns: Option<PathBuf>,

    /// Extra exceptions, whitespace separated, breaks marked with `-`.
    #[arg(long, value_name = "FILE")]
    pub exceptions: Option<PathBuf>,

    /// Minimum characters before the first break.
    #[arg(long, value_name = "N")]
    pub left_min: Option<usize>,

    /// Minimum characters after the last break.
    #[arg(long, value_name = "N")]
    pub right_min: Option<usize>,
}

impl DictionaryArgs {
    /// Read and compile the selected dictionary. Explicit margins win over
    /// the ones a `.dic` header declares.
    pub fn load(&self) -> Result<Hyphenator> {
        let mut source = match &self.patterns {
            Some(path) => PatternSource::parse(&read_text(path)?)?,
            None => builtin_source(),
        };
        if let Some(path) = &self.exceptions {
            source = source.with_exceptions(&read_text(path)?);
        }

        let hyphenator = Hyphenator::from_source(&source)?;
        let left = self.left_min.unwrap_or(hyphenator.left_min());
        let right = self.right_min.unwrap_or(hyphenator.right_min());
        let hyphenator = hyphenator.with_margins(left, right);

        tracing::info!(
            message = "dictionary.loaded",
            patterns_file = ?self.patterns,
            format = ?source.format,
            patterns = hyphenator.pattern_count(),
            exceptions = hyphenator.exception_count(),
            left_min = left,
            right_min = right
        );
        Ok(hyphenator)
    }
}

fn builtin_source() -> PatternSource {
    PatternSource {
        format: SourceFormat::Libhyphen,
        charset: Some("UTF-8".to_string()),
        patterns: ENGLISH_PATTERNS_MINI.to_string(),
        exceptions: ENGLISH_EXCEPTIONS_MINI.to_string(),
        left_min: None,
        right_min: None,
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::io(path, source))
}
