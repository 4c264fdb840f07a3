use std::cmp::Ordering;
use std::collections::HashMap;

use super::term_frequency::inverse_document_frequency;

/// Token occurrences of one document, counted once.
#[derive(Debug, Clone, Default)]
pub struct DocumentCounts {
    pub occurrences: HashMap<String, usize>,
    pub total_tokens: usize,
}

impl DocumentCounts {
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let total_tokens = tokens.len();
        let mut occurrences = HashMap::new();
        for token in tokens {
            *occurrences.entry(token).or_insert(0) += 1;
        }
        Self {
            occurrences,
            total_tokens,
        }
    }

    pub fn occurrences_of(&self, word: &str) -> usize {
        self.occurrences.get(word).copied().unwrap_or(0)
    }
}

/// A word chosen for the reported vocabulary, with its unrounded idf.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedWord {
    pub word: String,
    pub document_frequency: usize,
    pub idf: f64,
}

/// Number of documents containing each word at least once.
pub fn document_frequencies(documents: &[DocumentCounts]) -> HashMap<&str, usize> {
    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    for doc in documents {
        // keys are already distinct: presence, not occurrence count
        for word in doc.occurrences.keys() {
            *frequencies.entry(word.as_str()).or_insert(0) += 1;
        }
    }
    frequencies
}

/// Order by (idf desc, word asc).
///
/// Within one corpus idf is strictly decreasing in df, so comparing df
/// ascending gives the same order without comparing floats.
fn selection_order(a: &(&str, usize), b: &(&str, usize)) -> Ordering {
    a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0))
}

/// Pick the `k` highest-idf words, ties broken lexicographically.
///
/// Runs a partial selection over the whole vocabulary and only sorts the
/// winners, so the cost is linear in the vocabulary plus `k log k`.
pub fn select_top_k(
    frequencies: HashMap<&str, usize>,
    document_count: usize,
    k: usize,
) -> Vec<SelectedWord> {
    let mut candidates: Vec<(&str, usize)> = frequencies.into_iter().collect();

    if k == 0 {
        return Vec::new();
    }
    if k < candidates.len() {
        candidates.select_nth_unstable_by(k - 1, selection_order);
        candidates.truncate(k);
    }
    candidates.sort_unstable_by(selection_order);

    let selected: Vec<SelectedWord> = candidates
        .into_iter()
        .map(|(word, df)| SelectedWord {
            word: word.to_string(),
            document_frequency: df,
            idf: inverse_document_frequency(document_count, df),
        })
        .collect();

    debug_assert!(selected.windows(2).all(|w| w[0].idf >= w[1].idf));

    selected
}
