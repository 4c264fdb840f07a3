/// Zero-token policy: a document without tokens has tf = 0 for every word.
pub fn term_frequency(occurrences: usize, total_tokens: usize) -> f64 {
    if total_tokens == 0 {
        return 0.0;
    }
    let tf = occurrences as f64 / total_tokens as f64;
    debug_assert!((0.0..=1.0).contains(&tf), "tf {tf} out of range [0.0, 1.0]");
    tf
}

/// `idf = ln(N / df)`. `df` is at least 1 and never exceeds `N`.
pub fn inverse_document_frequency(document_count: usize, document_frequency: usize) -> f64 {
    debug_assert!(document_frequency >= 1 && document_frequency <= document_count);
    (document_count as f64 / document_frequency as f64).ln()
}

/// Round half away from zero to `decimals` places.
///
/// Idempotent: `round_to(round_to(x, d), d) == round_to(x, d)`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    // -0.0 would serialize as "-0.0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
