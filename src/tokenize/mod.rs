use std::str::Split;

/// Splits text into lowercase word tokens.
///
/// Implementations must be pure: the same text always yields the same tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// v0: maximal runs of alphanumeric characters, lowercased.
/// Everything else (whitespace, punctuation, underscores) separates tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text).collect()
    }
}

fn is_separator(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Lazy token sequence over a borrowed text.
///
/// A clone taken before iteration replays the full sequence independently.
#[derive(Clone)]
pub struct Tokens<'a> {
    inner: Split<'a, fn(char) -> bool>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find(|run| !run.is_empty())
            .map(str::to_lowercase)
    }
}

pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        inner: text.split(is_separator as fn(char) -> bool),
    }
}
