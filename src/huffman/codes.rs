use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodingError {
    #[error("Symbol {0:?} has no code")]
    UnknownSymbol(char),
    #[error("Invalid bit {bit:?} at position {position}")]
    InvalidBit { bit: char, position: usize },
    #[error("No code matches the bits ending at position {position}")]
    UnknownCode { position: usize },
    #[error("Encoded stream ends in the middle of a code")]
    Truncated,
}

/// Symbol to bitstring table derived from a Huffman tree.
///
/// Keys are ordered by code point, so serialization is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeMap {
    codes: BTreeMap<char, String>,
}

impl From<BTreeMap<char, String>> for CodeMap {
    fn from(codes: BTreeMap<char, String>) -> Self {
        Self { codes }
    }
}

impl CodeMap {
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(symbol, code)| (*symbol, code.as_str()))
    }

    /// No codeword is empty and none is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut words: Vec<&str> = self.codes.values().map(String::as_str).collect();
        if words.iter().any(|w| w.is_empty()) {
            return false;
        }
        // sorted, every word between a prefix and its extension shares the
        // prefix, so neighbours are enough
        words.sort_unstable();
        words.windows(2).all(|w| !w[1].starts_with(w[0]))
    }

    /// Total encoded length for a frequency table: `sum(freq * code_len)`.
    pub fn weighted_length(&self, frequencies: &BTreeMap<char, u64>) -> u64 {
        frequencies
            .iter()
            .map(|(symbol, freq)| {
                let len = self.codes.get(symbol).map_or(0, String::len) as u64;
                freq * len
            })
            .sum()
    }

    pub fn encode(&self, content: &str) -> Result<String, CodingError> {
        let mut encoded = String::new();
        for symbol in content.chars() {
            let code = self
                .codes
                .get(&symbol)
                .ok_or(CodingError::UnknownSymbol(symbol))?;
            encoded.push_str(code);
        }
        Ok(encoded)
    }

    /// Decode a bitstring produced with this table.
    ///
    /// Only used to verify encodings; the service never exposes it.
    pub fn decode(&self, bits: &str) -> Result<String, CodingError> {
        let trie = DecodeTrie::new(self);
        let mut decoded = String::new();
        let mut cursor = DecodeTrie::ROOT;

        for (position, bit) in bits.chars().enumerate() {
            let branch = match bit {
                '0' => 0,
                '1' => 1,
                _ => return Err(CodingError::InvalidBit { bit, position }),
            };
            cursor = trie.nodes[cursor].children[branch]
                .ok_or(CodingError::UnknownCode { position })?;

            if let Some(symbol) = trie.nodes[cursor].symbol {
                decoded.push(symbol);
                cursor = DecodeTrie::ROOT;
            }
        }

        if cursor != DecodeTrie::ROOT {
            return Err(CodingError::Truncated);
        }
        Ok(decoded)
    }
}

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: [Option<usize>; 2],
    symbol: Option<char>,
}

/// Arena-indexed binary trie over the codewords.
struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

impl DecodeTrie {
    const ROOT: usize = 0;

    fn new(codes: &CodeMap) -> Self {
        let mut nodes = vec![TrieNode::default()];
        for (symbol, code) in codes.iter() {
            let mut cursor = Self::ROOT;
            for bit in code.bytes() {
                let branch = usize::from(bit == b'1');
                cursor = match nodes[cursor].children[branch] {
                    Some(next) => next,
                    None => {
                        nodes.push(TrieNode::default());
                        let next = nodes.len() - 1;
                        nodes[cursor].children[branch] = Some(next);
                        next
                    }
                };
            }
            nodes[cursor].symbol = Some(symbol);
        }
        Self { nodes }
    }
}
