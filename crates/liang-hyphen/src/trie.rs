//! Prefix trie over pattern letters.
//!
//! Nodes live in a flat arena and refer to their children by index. A node
//! whose path spells the letters of some pattern carries that pattern's
//! weights as its terminal payload.
//!
//! ```text
//! Patterns → PatternTrie (compile once)
//! ".word." → walk the trie from every start offset
//!          → pointwise max of every terminal payload met on the way
//! ```

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::pattern::{Pattern, Weights};

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: FxHashMap<char, NodeId>,
    /// Weights of the pattern ending here, if any.
    weights: Option<Weights>,
}

/// Trie-based pattern storage for O(n²) per-word lookup.
///
/// Matching takes the element-wise maximum over all matching patterns, so
/// the order in which distinct patterns are inserted never changes a result.
#[derive(Debug, Clone)]
pub struct PatternTrie {
    nodes: Vec<TrieNode>,
    patterns: usize,
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternTrie {
    /// Create an empty trie holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            patterns: 0,
        }
    }

    /// Parse and insert every whitespace-separated token of `patterns`.
    ///
    /// # Errors
    ///
    /// Stops at the first token [`Pattern::parse`] rejects.
    pub fn from_tokens(patterns: &str) -> Result<Self> {
        let mut trie = Self::new();
        for token in patterns.split_whitespace() {
            trie.insert_str(token)?;
        }
        Ok(trie)
    }

    /// Insert a compiled pattern.
    ///
    /// A second pattern with the same letters replaces the weights of the
    /// first.
    pub fn insert(&mut self, pattern: &Pattern) {
        let mut node = ROOT;
        for &ch in &pattern.letters {
            node = self.child_or_insert(node, ch);
        }
        let slot = &mut self.nodes[node].weights;
        if slot.is_none() {
            self.patterns += 1;
        }
        *slot = Some(pattern.weights.clone());
    }

    /// Parse a single pattern token and insert it.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed tokens; the trie is unchanged.
    pub fn insert_str(&mut self, token: &str) -> Result<()> {
        let pattern = Pattern::parse(token)?;
        self.insert(&pattern);
        Ok(())
    }

    fn child_or_insert(&mut self, node: NodeId, ch: char) -> NodeId {
        if let Some(&next) = self.nodes[node].children.get(&ch) {
            return next;
        }
        let next = self.nodes.len();
        self.nodes.push(TrieNode::default());
        self.nodes[node].children.insert(ch, next);
        next
    }

    /// Weights stored for exactly these letters, if a pattern ends there.
    #[must_use]
    pub fn get(&self, letters: &[char]) -> Option<&[u8]> {
        letters
            .iter()
            .try_fold(ROOT, |node, ch| self.nodes[node].children.get(ch).copied())
            .and_then(|node| self.nodes[node].weights.as_deref())
    }

    /// Walk the trie along `word[start..]`, raising `out` to the weights of
    /// every pattern met. Pattern weight `j` lands on `out[start + j]`.
    pub fn apply_at(&self, word: &[char], start: usize, out: &mut [u8]) {
        let mut node = ROOT;
        for ch in &word[start..] {
            let Some(&next) = self.nodes[node].children.get(ch) else {
                break;
            };
            node = next;
            if let Some(weights) = &self.nodes[node].weights {
                let window = out.iter_mut().skip(start);
                for (slot, &level) in window.zip(weights.iter()) {
                    *slot = (*slot).max(level);
                }
            }
        }
    }

    /// Aggregate the weights of every pattern matching anywhere in `padded`.
    ///
    /// `padded` is normally the word wrapped in boundary markers. The result
    /// has `padded.len() + 1` entries; entry `i` is the gap before
    /// `padded[i]`.
    #[must_use]
    pub fn match_suffixes(&self, padded: &[char]) -> Vec<u8> {
        let mut out = vec![0u8; padded.len() + 1];
        for start in 0..padded.len() {
            self.apply_at(padded, start, &mut out);
        }
        out
    }

    /// Number of distinct patterns stored.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }
}

impl FromIterator<Pattern> for PatternTrie {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        let mut trie = Self::new();
        for pattern in iter {
            trie.insert(&pattern);
        }
        trie
    }
}
