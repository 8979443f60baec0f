#![forbid(unsafe_code)]

//! Deterministic hyphenation using Liang's TeX algorithm.
//!
//! A dictionary is compiled once from TeX-format patterns (`"hy3ph"`) and an
//! optional exception list (`"as-so-ciate"`). Hyphenating a word is a pure
//! read of that dictionary: same patterns + same word → same pieces, always.
//!
//! # Architecture
//!
//! ```text
//! patterns  → Pattern::parse → PatternTrie (compile once)
//! exceptions → parse_exception → ExceptionMap
//! word → exception hit? ──yes──→ stored weights
//!          └─no─→ ".word." → every suffix through the trie → pointwise max
//!      → odd weight = break allowed → pieces
//! ```
//!
//! # Usage
//!
//! ```
//! use liang_hyphen::english_mini;
//!
//! let hyphenator = english_mini();
//! assert_eq!(hyphenator.hyphenate_word("hyphenation"), ["hy", "phen", "ation"]);
//! assert_eq!(hyphenator.hyphenate_word("project"), ["project"]);
//! assert_eq!(hyphenator.hyphenate_word_as_string("associate"), "as-so-ciate");
//! ```
//!
//! Dictionary files are read by the caller and handed over as text:
//!
//! ```
//! use liang_hyphen::{Hyphenator, PatternSource};
//!
//! let text = "UTF-8\nLEFTHYPHENMIN 2\nRIGHTHYPHENMIN 3\nput3er\nm5pu\n";
//! let source = PatternSource::parse(text).unwrap();
//! let hyphenator = Hyphenator::from_source(&source).unwrap();
//! assert_eq!(hyphenator.hyphenate_word("computer"), ["com", "puter"]);
//! ```

pub mod english;
pub mod error;
pub mod exception;
pub mod hyphenator;
pub mod pattern;
pub mod source;
pub mod trie;

pub use english::{ENGLISH_EXCEPTIONS_MINI, ENGLISH_PATTERNS_MINI, english_mini};
pub use error::{HyphenError, Result};
pub use exception::{ExceptionMap, parse_exception};
pub use hyphenator::{DEFAULT_LEFT_MIN, DEFAULT_RIGHT_MIN, HyphenBreakPoint, Hyphenator};
pub use pattern::{BOUNDARY, Pattern, Weights};
pub use source::{PatternSource, SourceFormat};
pub use trie::PatternTrie;
