use super::term_frequency::round_to;
use super::CorpusStatistics;
use crate::types::WordSummary;

/// Sum the reported tf of every selected word over all documents.
///
/// `total_tf` adds the already-rounded per-document values, so it matches
/// what a caller would get from the per-document tables. `mean_tf` divides
/// by the document count.
pub fn summarize(stats: &CorpusStatistics) -> Vec<WordSummary> {
    if stats.document_count == 0 {
        return Vec::new();
    }

    let mut totals = vec![0.0f64; stats.vocabulary.len()];
    for doc in &stats.documents {
        debug_assert_eq!(doc.len(), totals.len());
        for (total, term) in totals.iter_mut().zip(doc) {
            *total += term.tf;
        }
    }

    stats
        .vocabulary
        .iter()
        .zip(totals)
        .map(|(entry, total)| WordSummary {
            word: entry.word.clone(),
            idf: entry.idf,
            mean_tf: round_to(total / stats.document_count as f64, stats.precision),
            total_tf: round_to(total, stats.precision),
        })
        .collect()
}
