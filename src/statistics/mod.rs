pub mod summary;
pub mod term_frequency;
pub mod vocabulary;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::StatisticsConfig;
use crate::tokenize::{Tokenizer, WordTokenizer};
use crate::types::{GlobalVocabularyEntry, TermStat, WordSummary};

pub use term_frequency::{inverse_document_frequency, round_to, term_frequency};
pub use vocabulary::{document_frequencies, select_top_k, DocumentCounts, SelectedWord};

/// Result of one corpus computation. Every per-document list is index-aligned
/// with the input documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStatistics {
    pub document_count: usize,
    pub distinct_words: usize,
    pub vocabulary: Vec<GlobalVocabularyEntry>,
    pub documents: Vec<Vec<TermStat>>,
    pub word_counts: Vec<usize>,
    pub precision: u32,
}

impl CorpusStatistics {
    fn empty(precision: u32) -> Self {
        Self {
            document_count: 0,
            distinct_words: 0,
            vocabulary: Vec::new(),
            documents: Vec::new(),
            word_counts: Vec::new(),
            precision,
        }
    }

    pub fn vocabulary(&self) -> &[GlobalVocabularyEntry] {
        &self.vocabulary
    }

    pub fn distinct_words(&self) -> usize {
        self.distinct_words
    }

    /// `(per_document, word_counts)`
    pub fn into_parts(self) -> (Vec<Vec<TermStat>>, Vec<usize>) {
        (self.documents, self.word_counts)
    }

    /// Corpus-level view of the selected vocabulary, in selection order.
    pub fn summary(&self) -> Vec<WordSummary> {
        summary::summarize(self)
    }
}

/// Computes corpus-wide TF-IDF tables.
///
/// Stateless between calls; one engine can serve concurrent requests.
pub struct StatisticsEngine<T> {
    tokenizer: T,
    config: StatisticsConfig,
}

impl Default for StatisticsEngine<WordTokenizer> {
    fn default() -> Self {
        Self {
            tokenizer: WordTokenizer,
            config: StatisticsConfig::default(),
        }
    }
}

impl<T> StatisticsEngine<T>
where
    T: Tokenizer,
{
    pub fn new(tokenizer: T, config: StatisticsConfig) -> Self {
        Self { tokenizer, config }
    }

    pub fn config(&self) -> &StatisticsConfig {
        &self.config
    }

    pub fn compute<S>(&self, documents: &[S]) -> CorpusStatistics
    where
        S: AsRef<str> + Sync,
    {
        let precision = self.config.precision;
        if documents.is_empty() {
            return CorpusStatistics::empty(precision);
        }
        let document_count = documents.len();

        // 1. Tokenize and count, one document per task
        let counts: Vec<DocumentCounts> = documents
            .par_iter()
            .map(|doc| DocumentCounts::from_tokens(self.tokenizer.tokenize(doc.as_ref())))
            .collect();

        // 2. Barrier: df, idf and top-K need every document's token set
        let frequencies = document_frequencies(&counts);
        let distinct_words = frequencies.len();
        let selected = select_top_k(frequencies, document_count, self.config.top_k);

        debug!(
            documents = document_count,
            distinct_words,
            selected = selected.len(),
            "corpus vocabulary selected"
        );

        let rounded_idf: Vec<f64> = selected
            .iter()
            .map(|w| round_to(w.idf, precision))
            .collect();

        // 3. Per-document tf against the fixed vocabulary, input order kept
        let per_document: Vec<Vec<TermStat>> = counts
            .par_iter()
            .map(|doc| {
                selected
                    .iter()
                    .zip(&rounded_idf)
                    .map(|(word, &idf)| TermStat {
                        word: word.word.clone(),
                        tf: round_to(
                            term_frequency(doc.occurrences_of(&word.word), doc.total_tokens),
                            precision,
                        ),
                        idf,
                    })
                    .collect()
            })
            .collect();

        let word_counts = counts.iter().map(|doc| doc.total_tokens).collect();

        let vocabulary = selected
            .into_iter()
            .zip(rounded_idf)
            .map(|(word, idf)| GlobalVocabularyEntry {
                word: word.word,
                document_frequency: word.document_frequency,
                idf,
            })
            .collect();

        CorpusStatistics {
            document_count,
            distinct_words,
            vocabulary,
            documents: per_document,
            word_counts,
            precision,
        }
    }
}

/// Default engine: word tokenizer, top 50 words, 6 decimals.
pub fn compute_corpus_statistics<S>(documents: &[S]) -> CorpusStatistics
where
    S: AsRef<str> + Sync,
{
    StatisticsEngine::default().compute(documents)
}
