use std::time::Instant;

use chrono::Utc;
use corpus_core::config::{EngineConfig, PaginationConfig};
use corpus_core::document::Document;
use corpus_core::metrics::ProcessingMetrics;
use corpus_core::{DocumentAnalyzer, WordTokenizer};

fn upload(files: &[(&str, &str)], config: &EngineConfig) -> Vec<Document> {
    let raw = files
        .iter()
        .map(|(name, content)| (name.to_string(), content.as_bytes().to_vec()));
    Document::ingest_batch(raw, &config.documents).unwrap()
}

#[test]
fn upload_analyse_encode_and_page() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let config = EngineConfig {
        pagination: PaginationConfig {
            default_limit: 8,
            max_limit: 16,
        },
        ..EngineConfig::v0()
    };
    let analyzer = DocumentAnalyzer::new(WordTokenizer, &config);
    let mut metrics = ProcessingMetrics::new();

    let started = Instant::now();
    let docs = upload(
        &[
            ("first.txt", "First document with some unique words."),
            ("second.txt", "  Second document with some shared words.\n"),
        ],
        &config,
    );
    let report = analyzer.analyze(&docs);
    metrics.record_batch(started.elapsed(), docs.len(), Utc::now());

    // 1. per-file reports follow upload order
    let names: Vec<&str> = report.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["first.txt", "second.txt"]);
    assert_eq!(report.files[0].word_count, 6);
    assert_eq!(report.files[1].word_count, 6);
    assert_eq!(report.files[1].size, 42);
    assert_eq!(report.files[1].version, docs[1].version.as_str());

    // 2. unique words lead, shared words follow with idf 0
    let top: Vec<&str> = report.top_words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(
        top,
        vec!["first", "second", "shared", "unique", "document", "some", "with", "words"]
    );
    assert_eq!(report.analysis.words_selected, 8);
    assert_eq!(report.analysis.distinct_words, 8);

    let words = report.files[0]
        .metrics
        .iter()
        .find(|m| m.word == "words")
        .expect("words reported");
    assert_eq!(words.idf, 0.0);
    assert_eq!(words.tf, 0.166667);

    // 3. encode once, then serve pages from the same encoding
    let encoding = analyzer.encode(&docs[0]);
    let mut offset = 0;
    let mut rebuilt = String::new();
    loop {
        let page = analyzer.huffman_page(&encoding, offset, None).unwrap();
        assert_eq!(page.page.limit, 8);
        assert_eq!(page.page.total_size, encoding.encoded_len());
        rebuilt.push_str(page.page.slice);
        match page.page.next_offset() {
            Some(next) => offset = next,
            None => break,
        }
    }
    assert_eq!(rebuilt, encoding.encoded);
    assert_eq!(encoding.decode().unwrap(), docs[0].content);

    // 4. raw content pages are clamped to the configured maximum
    let content = analyzer.content_page(&docs[1], 0, Some(1_000)).unwrap();
    assert_eq!(content.limit, 16);
    assert_eq!(content.slice, "Second document ");

    assert_eq!(metrics.total_files_uploaded, 2);
    assert_eq!(metrics.total_batches_uploaded, 1);
}
