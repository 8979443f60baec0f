//! Extraction of pattern and exception tokens from dictionary text.
//!
//! Two layouts are understood:
//!
//! - libhyphen `.dic` files (as shipped with LibreOffice): a charset line,
//!   optional `LEFTHYPHENMIN n` / `RIGHTHYPHENMIN n` directives, then one
//!   pattern per line.
//! - TeX `hyph-*.tex` files: `\patterns{...}` and `\hyphenation{...}` blocks.
//!
//! `%` starts a comment in both. Nothing here touches the filesystem; callers
//! read the text however they like and hand it over.

use crate::error::{HyphenError, Result};

const COMMENT: char = '%';

/// Which layout a dictionary text was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Libhyphen,
    Tex,
}

/// Whitespace-separated pattern and exception tokens plus header settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSource {
    pub format: SourceFormat,
    /// Declared charset of a `.dic` file, e.g. `UTF-8`.
    pub charset: Option<String>,
    pub patterns: String,
    pub exceptions: String,
    pub left_min: Option<usize>,
    pub right_min: Option<usize>,
}

impl PatternSource {
    /// Parse dictionary text, picking the layout by looking for `\patterns`.
    ///
    /// # Errors
    ///
    /// Fails on unreadable directive values and unterminated TeX blocks.
    /// Pattern tokens themselves are validated later, when compiled.
    pub fn parse(text: &str) -> Result<Self> {
        let source = if text.contains("\\patterns") {
            Self::parse_tex(text)?
        } else {
            Self::parse_libhyphen(text)?
        };
        tracing::debug!(
            message = "source.parse",
            format = ?source.format,
            patterns = source.patterns.split_whitespace().count(),
            exceptions = source.exceptions.split_whitespace().count()
        );
        Ok(source)
    }

    /// Parse a libhyphen `.dic` file.
    ///
    /// # Errors
    ///
    /// Fails when a `LEFTHYPHENMIN` / `RIGHTHYPHENMIN` value is not a number.
    pub fn parse_libhyphen(text: &str) -> Result<Self> {
        let mut source = Self::empty(SourceFormat::Libhyphen);
        let mut seen_content = false;

        for (idx, raw) in text.lines().enumerate() {
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }
            let first_content = !seen_content;
            seen_content = true;

            if first_content && is_charset(line) {
                source.charset = Some(line.to_string());
                continue;
            }

            let mut tokens = line.split_whitespace();
            let Some(head) = tokens.next() else {
                continue;
            };
            if !is_directive(head) {
                push_tokens(&mut source.patterns, line);
                continue;
            }

            let line_no = idx + 1;
            match head {
                "LEFTHYPHENMIN" => {
                    source.left_min = Some(directive_value(head, tokens.next(), line_no)?);
                }
                "RIGHTHYPHENMIN" => {
                    source.right_min = Some(directive_value(head, tokens.next(), line_no)?);
                }
                // Compound-word patterns follow; only the first level is used.
                "NEXTLEVEL" => break,
                _ => {
                    tracing::debug!(
                        message = "source.directive.ignored",
                        directive = head,
                        line = line_no
                    );
                }
            }
        }
        Ok(source)
    }

    /// Parse a TeX hyphenation file.
    ///
    /// # Errors
    ///
    /// Fails when a `\patterns` or `\hyphenation` block is never closed.
    pub fn parse_tex(text: &str) -> Result<Self> {
        let mut source = Self::empty(SourceFormat::Tex);
        let cleaned: String = text
            .lines()
            .map(strip_comment)
            .collect::<Vec<_>>()
            .join("\n");

        let mut rest = cleaned.as_str();
        while let Some(pos) = rest.find('\\') {
            let after = &rest[pos + 1..];
            let name_len = after
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(after.len());
            let name = &after[..name_len];
            let tail = after[name_len..].trim_start();

            let target = match name {
                "patterns" => Some(&mut source.patterns),
                "hyphenation" => Some(&mut source.exceptions),
                _ => None,
            };
            match (target, tail.strip_prefix('{')) {
                (Some(target), Some(body)) => {
                    let Some(close) = body.find('}') else {
                        let consumed = cleaned.len() - rest.len() + pos;
                        return Err(HyphenError::header(
                            line_of(&cleaned, consumed),
                            format!("unterminated \\{name} block"),
                        ));
                    };
                    push_tokens(target, &body[..close]);
                    rest = &body[close + 1..];
                }
                _ => rest = after,
            }
        }
        Ok(source)
    }

    /// Append an extra whitespace-separated exception list, `%` comments
    /// allowed.
    #[must_use]
    pub fn with_exceptions(mut self, text: &str) -> Self {
        for line in text.lines() {
            push_tokens(&mut self.exceptions, strip_comment(line));
        }
        self
    }

    fn empty(format: SourceFormat) -> Self {
        Self {
            format,
            charset: None,
            patterns: String::new(),
            exceptions: String::new(),
            left_min: None,
            right_min: None,
        }
    }
}

fn strip_comment(line: &str) -> &str {
    line.split_once(COMMENT).map_or(line, |(before, _)| before)
}

/// Charset names (`UTF-8`, `ISO8859-1`, `KOI8-R`, `microsoft-cp1251`) always
/// carry a `-`, which no pattern can.
fn is_charset(line: &str) -> bool {
    !line.contains(char::is_whitespace) && line.contains('-')
}

fn is_directive(token: &str) -> bool {
    token.len() > 1 && token.bytes().all(|b| b.is_ascii_uppercase() || b == b'_')
}

fn directive_value(name: &str, value: Option<&str>, line: usize) -> Result<usize> {
    let value = value.ok_or_else(|| HyphenError::header(line, format!("{name} needs a value")))?;
    value
        .parse()
        .map_err(|_| HyphenError::header(line, format!("{name} value {value:?} is not a number")))
}

fn push_tokens(out: &mut String, text: &str) {
    for token in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
}

fn line_of(text: &str, byte: usize) -> usize {
    text[..byte].matches('\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIC: &str = "UTF-8\nLEFTHYPHENMIN 1\nRIGHTHYPHENMIN 1\n.hy3ph\nhe2n\nhena4\n";

    #[test]
    fn libhyphen_header_is_stripped() {
        let src = PatternSource::parse(DIC).unwrap();
        assert_eq!(src.format, SourceFormat::Libhyphen);
        assert_eq!(src.charset.as_deref(), Some("UTF-8"));
        assert_eq!(src.left_min, Some(1));
        assert_eq!(src.right_min, Some(1));
        assert_eq!(src.patterns, ".hy3ph he2n hena4");
        assert!(src.exceptions.is_empty());
    }

    #[test]
    fn libhyphen_without_charset() {
        let src = PatternSource::parse("a1b\nc2d e3f\n").unwrap();
        assert_eq!(src.charset, None);
        assert_eq!(src.patterns, "a1b c2d e3f");
        assert_eq!(src.left_min, None);
    }

    #[test]
    fn libhyphen_comments_and_blank_lines() {
        let text = "ISO8859-1\n% header comment\n\nLEFTHYPHENMIN 2 % two\na1b % trailing\n";
        let src = PatternSource::parse(text).unwrap();
        assert_eq!(src.charset.as_deref(), Some("ISO8859-1"));
        assert_eq!(src.left_min, Some(2));
        assert_eq!(src.patterns, "a1b");
    }

    #[test]
    fn libhyphen_ignores_unknown_directives() {
        let text = "UTF-8\nCOMPOUNDLEFTHYPHENMIN 2\nNOHYPHEN ',-\na1b\n";
        let src = PatternSource::parse(text).unwrap();
        assert_eq!(src.patterns, "a1b");
    }

    #[test]
    fn libhyphen_stops_at_next_level() {
        let text = "UTF-8\na1b\nNEXTLEVEL\nc1d\n";
        let src = PatternSource::parse(text).unwrap();
        assert_eq!(src.patterns, "a1b");
    }

    #[test]
    fn libhyphen_bad_directive_value() {
        let err = PatternSource::parse("UTF-8\nLEFTHYPHENMIN two\n").unwrap_err();
        assert_eq!(
            err,
            HyphenError::InvalidHeader {
                line: 2,
                message: "LEFTHYPHENMIN value \"two\" is not a number".into()
            }
        );
        assert!(PatternSource::parse("RIGHTHYPHENMIN\n").is_err());
    }

    #[test]
    fn tex_blocks() {
        let text = r"
% hyph-en-us.tex
\message{US English hyphenation patterns}
\patterns{ % patterns
.hy3ph he2n
hena4
}
\hyphenation{
as-so-ciate
ta-ble
}
";
        let src = PatternSource::parse(text).unwrap();
        assert_eq!(src.format, SourceFormat::Tex);
        assert_eq!(src.patterns, ".hy3ph he2n hena4");
        assert_eq!(src.exceptions, "as-so-ciate ta-ble");
    }

    #[test]
    fn tex_comment_cannot_close_block() {
        let text = "\\patterns{ a1b % }\nc2d }\n";
        let src = PatternSource::parse(text).unwrap();
        assert_eq!(src.patterns, "a1b c2d");
    }

    #[test]
    fn tex_unterminated_block() {
        let err = PatternSource::parse("\n\n\\patterns{ a1b\n").unwrap_err();
        assert!(matches!(err, HyphenError::InvalidHeader { line: 3, .. }));
    }

    #[test]
    fn extra_exceptions_are_appended() {
        let src = PatternSource::parse(DIC)
            .unwrap()
            .with_exceptions("as-so-ciate % note\nta-ble");
        assert_eq!(src.exceptions, "as-so-ciate ta-ble");
    }
}
