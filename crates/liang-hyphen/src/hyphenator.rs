//! Word hyphenation on top of a [`PatternTrie`] and an [`ExceptionMap`].
//!
//! For each word the exception list is consulted first; otherwise the word
//! is wrapped as `".word."`, every suffix is walked through the trie, and the
//! pointwise maximum of all matching weights decides the breaks. Odd weights
//! allow a break, even weights forbid one.

use crate::error::Result;
use crate::exception::ExceptionMap;
use crate::pattern::BOUNDARY;
use crate::source::PatternSource;
use crate::trie::PatternTrie;

/// Minimum characters before the first break when no dictionary says otherwise.
/// Zero leaves every odd weight in force.
pub const DEFAULT_LEFT_MIN: usize = 0;
/// Minimum characters after the last break when no dictionary says otherwise.
/// Zero keeps a break after the last character, closing an empty final piece.
pub const DEFAULT_RIGHT_MIN: usize = 0;

/// Weight-vector index of the gap after character `k - 1` of the word,
/// i.e. a break leaving `k` characters in front of it. Skips the sentinel
/// slot and the gap after the leading boundary marker.
const fn gap_index(k: usize) -> usize {
    k + 1
}

/// A permitted break inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HyphenBreakPoint {
    /// Number of characters before the break. For "table" split as
    /// "ta-ble", `offset = 2`.
    pub offset: usize,
    /// The winning weight at this gap (always odd).
    pub weight: u8,
}

/// A compiled hyphenation dictionary.
///
/// Immutable after construction; share it freely between threads.
///
/// ```
/// use liang_hyphen::Hyphenator;
///
/// let hyphenator = Hyphenator::new("hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n", "").unwrap();
/// assert_eq!(hyphenator.hyphenate_word("hyphenation"), ["hy", "phen", "ation"]);
/// assert_eq!(hyphenator.hyphenate_word_as_string("Hyphenation"), "Hy-phen-ation");
/// ```
#[derive(Debug, Clone)]
pub struct Hyphenator {
    trie: PatternTrie,
    exceptions: ExceptionMap,
    left_min: usize,
    right_min: usize,
}

impl Hyphenator {
    /// Compile whitespace-separated patterns and exceptions.
    ///
    /// Patterns use TeX notation (`"hy3ph"`, `".ex5am"`); exceptions mark
    /// their breaks with hyphens (`"as-so-ciate"`).
    ///
    /// # Errors
    ///
    /// Fails on the first malformed pattern or exception token.
    pub fn new(patterns: &str, exceptions: &str) -> Result<Self> {
        let trie = PatternTrie::from_tokens(patterns)?;
        let exceptions = ExceptionMap::from_tokens(exceptions)?;
        Ok(Self::from_parts(trie, exceptions))
    }

    /// Assemble a hyphenator from an already built trie and exception map.
    #[must_use]
    pub fn from_parts(trie: PatternTrie, exceptions: ExceptionMap) -> Self {
        tracing::debug!(
            message = "hyphenator.build",
            patterns = trie.pattern_count(),
            nodes = trie.node_count(),
            exceptions = exceptions.len()
        );
        Self {
            trie,
            exceptions,
            left_min: DEFAULT_LEFT_MIN,
            right_min: DEFAULT_RIGHT_MIN,
        }
    }

    /// Compile a parsed dictionary, taking its hyphen-min margins when set.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed pattern or exception token.
    pub fn from_source(source: &PatternSource) -> Result<Self> {
        let hyphenator = Self::new(&source.patterns, &source.exceptions)?;
        Ok(hyphenator.with_margins(
            source.left_min.unwrap_or(DEFAULT_LEFT_MIN),
            source.right_min.unwrap_or(DEFAULT_RIGHT_MIN),
        ))
    }

    /// Set custom left/right minimum margins, e.g. the usual TeX `(2, 3)`.
    ///
    /// A break leaving `k` of `n` characters in front is kept only when
    /// `k >= left` and `n - k >= right`. No break is ever placed before the
    /// first character. Any right margin above 0 drops the break after the
    /// last character, and with it the trailing empty piece.
    #[must_use]
    pub fn with_margins(mut self, left: usize, right: usize) -> Self {
        self.left_min = left;
        self.right_min = right;
        self
    }

    #[must_use]
    pub fn left_min(&self) -> usize {
        self.left_min
    }

    #[must_use]
    pub fn right_min(&self) -> usize {
        self.right_min
    }

    #[must_use]
    pub fn trie(&self) -> &PatternTrie {
        &self.trie
    }

    #[must_use]
    pub fn exceptions(&self) -> &ExceptionMap {
        &self.exceptions
    }

    /// Number of distinct patterns in the trie.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.trie.pattern_count()
    }

    #[must_use]
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// True if `word` (in any case) is hyphenated by the exception list.
    #[must_use]
    pub fn is_exception(&self, word: &str) -> bool {
        self.exceptions.contains(&word.to_lowercase())
    }

    /// The raw weight vector for `word`, before margins are applied.
    ///
    /// Laid out over `".word."` (lower-cased): entry `i` is the gap before
    /// character `i` of the padded word, plus one trailing slot.
    #[must_use]
    pub fn weights(&self, word: &str) -> Vec<u8> {
        self.weights_traced(word).0
    }

    fn weights_traced(&self, word: &str) -> (Vec<u8>, bool) {
        let lower = word.to_lowercase();
        if let Some(weights) = self.exceptions.get(&lower) {
            return (weights.to_vec(), true);
        }

        let mut padded: Vec<char> = Vec::with_capacity(lower.len() + 2);
        padded.push(BOUNDARY);
        padded.extend(lower.chars());
        padded.push(BOUNDARY);
        (self.trie.match_suffixes(&padded), false)
    }

    /// Find all permitted breaks in a word, sorted by offset.
    ///
    /// The word should be a single whitespace-free token.
    #[must_use]
    pub fn break_points(&self, word: &str) -> Vec<HyphenBreakPoint> {
        let (weights, exception) = self.weights_traced(word);
        let n = word.chars().count();
        let first = self.left_min.max(1);
        let last = n.saturating_sub(self.right_min);

        // Lower-casing can lengthen a word; gaps past the vector read as 0.
        let points: Vec<HyphenBreakPoint> = (first..=last)
            .filter_map(|offset| {
                let weight = weights.get(gap_index(offset)).copied().unwrap_or(0);
                (weight % 2 == 1).then_some(HyphenBreakPoint { offset, weight })
            })
            .collect();

        tracing::trace!(
            message = "hyphenator.word",
            word,
            exception,
            breaks = points.len()
        );
        points
    }

    /// True if `word` has at least one permitted break.
    #[must_use]
    pub fn can_hyphenate(&self, word: &str) -> bool {
        !self.break_points(word).is_empty()
    }

    /// Split `word` at every permitted break.
    ///
    /// The pieces borrow from `word` and concatenate back to it exactly, case
    /// preserved. A word without breaks comes back as a single piece; the
    /// empty word comes back as one empty piece. A break after the last
    /// character (no right margin) ends the list with an empty piece.
    #[must_use]
    pub fn hyphenate_word<'a>(&self, word: &'a str) -> Vec<&'a str> {
        let breaks = self.break_points(word);
        let mut pieces = Vec::with_capacity(breaks.len() + 1);
        let mut ends = word.char_indices().map(|(i, ch)| i + ch.len_utf8());
        let mut start = 0;
        let mut consumed = 0;

        for bp in breaks {
            let Some(end) = ends.nth(bp.offset - consumed - 1) else {
                break;
            };
            consumed = bp.offset;
            pieces.push(&word[start..end]);
            start = end;
        }
        pieces.push(&word[start..]);
        pieces
    }

    /// Pieces joined with `-`.
    #[must_use]
    pub fn hyphenate_word_as_string(&self, word: &str) -> String {
        self.hyphenate_word_with(word, "-")
    }

    /// Pieces joined with an arbitrary separator, e.g. a soft hyphen.
    #[must_use]
    pub fn hyphenate_word_with(&self, word: &str, separator: &str) -> String {
        self.hyphenate_word(word).join(separator)
    }
}
