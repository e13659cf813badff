//! Huffman coding.
//!
//! Builds an optimal prefix code for a symbol stream by repeatedly merging
//! the two lowest-frequency subtrees.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! It was the first practical algorithm for constructing optimal prefix codes.
//!
//! # Representation
//!
//! The tree is an arena: nodes live in a `Vec` and refer to their children
//! by [`NodeId`]. Traversals use an explicit stack, so deep (skewed) trees
//! cannot overflow the call stack.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{Error, Result};
use crate::pqueue::MinQueue;

/// Index of a node in a [`HuffmanTree`].
pub type NodeId = usize;

/// Huffman tree node: a leaf carries a symbol, an internal node two children.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Node<S> {
    freq: u64,
    symbol: Option<S>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<S> Node<S> {
    /// Frequency of this subtree.
    pub fn freq(&self) -> u64 {
        self.freq
    }

    /// Symbol, for leaves.
    pub fn symbol(&self) -> Option<&S> {
        self.symbol.as_ref()
    }

    /// Left child (the `0` branch).
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child (the `1` branch).
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Count symbol occurrences, in order of first appearance.
pub fn frequencies<S, I>(symbols: I) -> Vec<(S, u64)>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
{
    let mut slots: HashMap<S, usize> = HashMap::new();
    let mut counts: Vec<(S, u64)> = Vec::new();
    for s in symbols {
        match slots.get(&s) {
            Some(&i) => counts[i].1 += 1,
            None => {
                slots.insert(s.clone(), counts.len());
                counts.push((s, 1));
            }
        }
    }
    counts
}

/// Huffman tree over symbols of type `S`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HuffmanTree<S> {
    nodes: Vec<Node<S>>,
    root: NodeId,
}

impl<S: Clone + Eq + Hash> HuffmanTree<S> {
    /// Count `symbols` and build their tree.
    ///
    /// Returns `None` for an empty stream.
    pub fn from_symbols<I>(symbols: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
    {
        Self::from_frequencies(&frequencies(symbols))
    }

    /// Build a tree from a pre-counted frequency table.
    ///
    /// Zero-frequency entries are ignored and repeated symbols have their
    /// counts summed into one leaf. Equal frequencies are merged in table
    /// order. Returns `None` when no symbol has a positive count.
    pub fn from_frequencies(table: &[(S, u64)]) -> Option<Self> {
        let mut nodes: Vec<Node<S>> = Vec::with_capacity(table.len() * 2);
        let mut leaves: HashMap<&S, NodeId> = HashMap::new();

        for (s, f) in table {
            if *f == 0 {
                continue;
            }
            match leaves.get(s) {
                Some(&id) => nodes[id].freq += f,
                None => {
                    leaves.insert(s, nodes.len());
                    nodes.push(Node {
                        freq: *f,
                        symbol: Some(s.clone()),
                        left: None,
                        right: None,
                    });
                }
            }
        }

        let mut pq = MinQueue::new();
        for (id, leaf) in nodes.iter().enumerate() {
            pq.push(leaf.freq, id);
        }

        while pq.len() > 1 {
            let (lf, left) = pq.pop()?;
            let (rf, right) = pq.pop()?;
            let freq = lf + rf;
            pq.push(freq, nodes.len());
            nodes.push(Node {
                freq,
                symbol: None,
                left: Some(left),
                right: Some(right),
            });
        }

        let (_, root) = pq.pop()?;
        Some(Self { nodes, root })
    }

    /// Derive the code table: `0` for each left descent, `1` for each right.
    ///
    /// A single-leaf tree gets the code `0`.
    pub fn codes(&self) -> CodeTable<S> {
        let mut table = CodeTable::default();
        let mut stack: Vec<(NodeId, Vec<u8>)> = vec![(self.root, Vec::new())];

        while let Some((id, prefix)) = stack.pop() {
            let node = &self.nodes[id];
            if let Some(symbol) = &node.symbol {
                let code = if prefix.is_empty() { vec![0] } else { prefix };
                table.insert(symbol.clone(), code);
                continue;
            }
            // Right goes on the stack first so the left subtree comes out first.
            if let Some(right) = node.right {
                let mut p = prefix.clone();
                p.push(1);
                stack.push((right, p));
            }
            if let Some(left) = node.left {
                let mut p = prefix;
                p.push(0);
                stack.push((left, p));
            }
        }

        table
    }

    /// Decode a bit stream (one `0`/`1` per byte) into symbols.
    ///
    /// # Errors
    /// `Error::InvalidCode` at the offending offset for a digit other than
    /// `0`/`1`, a branch the tree does not have, or a stream that ends in the
    /// middle of a code.
    pub fn decode(&self, bits: &[u8]) -> Result<Vec<S>> {
        let mut out = Vec::new();
        let root = &self.nodes[self.root];

        if let Some(symbol) = &root.symbol {
            for (i, &bit) in bits.iter().enumerate() {
                if bit != 0 {
                    return Err(Error::InvalidCode(i));
                }
                out.push(symbol.clone());
            }
            return Ok(out);
        }

        let mut curr = self.root;
        for (i, &bit) in bits.iter().enumerate() {
            let node = &self.nodes[curr];
            let next = match bit {
                0 => node.left,
                1 => node.right,
                _ => None,
            };
            curr = next.ok_or(Error::InvalidCode(i))?;

            if let Some(symbol) = &self.nodes[curr].symbol {
                out.push(symbol.clone());
                curr = self.root;
            }
        }

        if curr != self.root {
            return Err(Error::InvalidCode(bits.len()));
        }
        Ok(out)
    }
}

impl<S> HuffmanTree<S> {
    /// Root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node by id.
    pub fn node(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id]
    }

    /// All nodes; leaves first, then internal nodes in merge order.
    pub fn nodes(&self) -> &[Node<S>] {
        &self.nodes
    }

    /// Total symbol count (the root frequency).
    pub fn total(&self) -> u64 {
        self.nodes[self.root].freq
    }
}

/// Display form of a symbol with control characters escaped. Quotes stay
/// literal, so `'` renders as `'''`.
fn escape_symbol(symbol: &impl fmt::Display) -> String {
    let mut out = String::new();
    for c in symbol.to_string().chars() {
        match c {
            '\'' | '"' => out.push(c),
            _ => out.extend(c.escape_debug()),
        }
    }
    out
}

impl<S: fmt::Display> HuffmanTree<S> {
    /// Indented pre-order dump, two spaces per level.
    ///
    /// ```text
    /// Internal (freq=6)
    ///   Leaf: 'a' (freq=3)
    ///   Internal (freq=3)
    ///     Leaf: 'c' (freq=1)
    ///     Leaf: 'b' (freq=2)
    /// ```
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            let indent = "  ".repeat(depth);
            let line = match &node.symbol {
                Some(s) => format!("{indent}Leaf: '{}' (freq={})\n", escape_symbol(s), node.freq),
                None => format!("{indent}Internal (freq={})\n", node.freq),
            };
            out.push_str(&line);
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
        }

        out
    }
}

/// Symbol → code mapping, in depth-first (left before right) leaf order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CodeTable<S> {
    entries: Vec<(S, Vec<u8>)>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<S, usize>,
}

impl<S> Default for CodeTable<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<S: Clone + Eq + Hash> CodeTable<S> {
    fn insert(&mut self, symbol: S, code: Vec<u8>) {
        self.index.insert(symbol.clone(), self.entries.len());
        self.entries.push((symbol, code));
    }

    /// Build the table for `tree`, or an empty table when there is no tree.
    pub fn from_tree(tree: Option<&HuffmanTree<S>>) -> Self {
        tree.map(HuffmanTree::codes).unwrap_or_default()
    }

    /// Code for `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&[u8]> {
        self.index
            .get(symbol)
            .map(|&i| self.entries[i].1.as_slice())
    }

    /// Encode a symbol sequence into a bit stream (one bit per byte).
    ///
    /// # Errors
    /// `Error::UnknownSymbol` if a symbol has no code.
    pub fn encode<I>(&self, symbols: I) -> Result<Vec<u8>>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let mut bits = Vec::new();
        for s in symbols {
            let code = self.get(s.borrow()).ok_or(Error::UnknownSymbol)?;
            bits.extend_from_slice(code);
        }
        Ok(bits)
    }

    /// Encoded length in bits, `Σ freq·len(code)`, over the symbols in
    /// `table` that have a code.
    pub fn encoded_len(&self, table: &[(S, u64)]) -> u64 {
        table
            .iter()
            .filter_map(|(s, f)| self.get(s).map(|c| f * c.len() as u64))
            .sum()
    }
}

impl<S> CodeTable<S> {
    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (no tree).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(symbol, code)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &[u8])> + '_ {
        self.entries.iter().map(|(s, c)| (s, c.as_slice()))
    }

    /// Bits per symbol of a fixed-length code over the same alphabet.
    pub fn fixed_length_bits(&self) -> u32 {
        match self.entries.len() {
            0 | 1 => 1,
            n => usize::BITS - (n - 1).leading_zeros(),
        }
    }
}

/// Render a code as a string of `0`/`1` characters.
pub fn bits_to_string(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huffman_roundtrip() {
        let data = b"abracadabra";
        let tree = HuffmanTree::from_symbols(data.iter().copied()).unwrap();
        let codes = tree.codes();
        let bits = codes.encode(data.iter()).unwrap();
        let decoded = tree.decode(&bits).unwrap();
        assert_eq!(data.to_vec(), decoded);
    }

    #[test]
    fn frequencies_in_first_seen_order() {
        assert_eq!(
            frequencies("aaabbc".chars()),
            vec![('a', 3), ('b', 2), ('c', 1)]
        );
        assert!(frequencies("".chars()).is_empty());
    }

    #[test]
    fn code_lengths_follow_frequencies() {
        let tree = HuffmanTree::from_symbols("aaabbc".chars()).unwrap();
        let codes = tree.codes();
        let len = |c: char| codes.get(&c).unwrap().len();
        assert!(len('a') <= len('b'));
        assert!(len('b') <= len('c'));
        assert_eq!(bits_to_string(codes.get(&'a').unwrap()), "0");
        assert_eq!(bits_to_string(codes.get(&'c').unwrap()), "10");
        assert_eq!(bits_to_string(codes.get(&'b').unwrap()), "11");
    }

    #[test]
    fn single_symbol_gets_nonempty_code() {
        let tree = HuffmanTree::from_symbols("aaaa".chars()).unwrap();
        assert!(tree.node(tree.root()).is_leaf());
        let codes = tree.codes();
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get(&'a'), Some(&[0u8][..]));

        let bits = codes.encode("aaaa".chars()).unwrap();
        assert_eq!(bits, vec![0, 0, 0, 0]);
        assert_eq!(tree.decode(&bits).unwrap(), vec!['a'; 4]);
        assert!(matches!(tree.decode(&[0, 1]), Err(Error::InvalidCode(1))));
    }

    #[test]
    fn empty_stream_has_no_tree() {
        assert!(HuffmanTree::<char>::from_symbols("".chars()).is_none());
        assert!(HuffmanTree::from_frequencies(&[('x', 0)]).is_none());
        assert!(CodeTable::<char>::from_tree(None).is_empty());
    }

    #[test]
    fn internal_frequencies_sum_children() {
        let tree = HuffmanTree::from_symbols("mississippi river".chars()).unwrap();
        for node in tree.nodes() {
            if let (Some(l), Some(r)) = (node.left(), node.right()) {
                assert_eq!(node.freq(), tree.node(l).freq() + tree.node(r).freq());
                assert!(node.symbol().is_none());
            }
        }
        assert_eq!(tree.total(), 17);
        // n leaves produce n - 1 internal nodes.
        let leaves = tree.nodes().iter().filter(|n| n.is_leaf()).count();
        assert_eq!(tree.nodes().len(), 2 * leaves - 1);
    }

    #[test]
    fn codes_are_prefix_free() {
        let tree = HuffmanTree::from_symbols("the quick brown fox".chars()).unwrap();
        let table = tree.codes();
        let codes: Vec<&[u8]> = table.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a));
                }
            }
        }
    }

    #[test]
    fn decode_rejects_bad_streams() {
        let tree = HuffmanTree::from_symbols("aaabbc".chars()).unwrap();
        // "1" alone stops inside the code for b or c.
        assert!(matches!(tree.decode(&[1]), Err(Error::InvalidCode(1))));
        assert!(matches!(tree.decode(&[0, 2]), Err(Error::InvalidCode(1))));
    }

    #[test]
    fn encode_unknown_symbol() {
        let codes = HuffmanTree::from_symbols("ab".chars()).unwrap().codes();
        assert!(matches!(codes.encode("abz".chars()), Err(Error::UnknownSymbol)));
    }

    #[test]
    fn encoded_len_beats_fixed_length() {
        let text = "aaaaaaaabbbcd";
        let table = frequencies(text.chars());
        let codes = HuffmanTree::from_frequencies(&table).unwrap().codes();
        let bits = codes.encode(text.chars()).unwrap();
        assert_eq!(codes.encoded_len(&table), bits.len() as u64);
        assert_eq!(codes.fixed_length_bits(), 2);
        assert!(codes.encoded_len(&table) <= 2 * text.len() as u64);
    }

    #[test]
    fn render_text_is_preorder() {
        let tree = HuffmanTree::from_symbols("aaabbc".chars()).unwrap();
        let expected = "\
Internal (freq=6)
  Leaf: 'a' (freq=3)
  Internal (freq=3)
    Leaf: 'c' (freq=1)
    Leaf: 'b' (freq=2)
";
        assert_eq!(tree.render_text(), expected);
    }

    #[test]
    fn render_text_escapes_control_characters_only() {
        let tree = HuffmanTree::from_symbols("'\n".chars()).unwrap();
        let expected = "\
Internal (freq=2)
  Leaf: ''' (freq=1)
  Leaf: '\\n' (freq=1)
";
        assert_eq!(tree.render_text(), expected);

        let bytes = HuffmanTree::from_symbols([7u8]).unwrap();
        assert_eq!(bytes.render_text(), "Leaf: '7' (freq=1)\n");
    }

    #[test]
    fn repeated_symbols_in_table_share_one_leaf() {
        let table = [('a', 2), ('b', 1), ('a', 3), ('c', 0)];
        let tree = HuffmanTree::from_frequencies(&table).unwrap();
        assert_eq!(tree.total(), 6);
        assert_eq!(tree.nodes().iter().filter(|n| n.is_leaf()).count(), 2);

        let codes = tree.codes();
        assert_eq!(codes.len(), 2);
        assert_eq!(codes.iter().filter(|(s, _)| **s == 'a').count(), 1);
        let bits = codes.encode("aab".chars()).unwrap();
        assert_eq!(tree.decode(&bits).unwrap(), vec!['a', 'a', 'b']);
    }

    #[test]
    fn rebuild_is_identical() {
        let a = HuffmanTree::from_symbols("abracadabra".chars()).unwrap();
        let b = HuffmanTree::from_symbols("abracadabra".chars()).unwrap();
        assert_eq!(a, b);
        let ca: Vec<_> = a.codes().iter().map(|(s, c)| (*s, c.to_vec())).collect();
        let cb: Vec<_> = b.codes().iter().map(|(s, c)| (*s, c.to_vec())).collect();
        assert_eq!(ca, cb);
    }
}
