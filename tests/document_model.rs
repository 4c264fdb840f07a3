use corpus_core::config::DocumentLimits;
use corpus_core::document::{Document, DocumentError};

fn ingest(name: &str, content: &[u8]) -> Result<Document, DocumentError> {
    Document::ingest(name, content.to_vec(), &DocumentLimits::default())
}

#[test]
fn invariant_utf8_rejection() {
    // Invalid UTF-8 sequence
    let result = ingest("binary.bin", &[0, 159, 146, 150]);
    assert!(matches!(result, Err(DocumentError::InvalidUtf8(_))));
}

#[test]
fn invariant_size_limit() {
    let limits = DocumentLimits {
        max_document_bytes: 4,
    };

    assert!(Document::ingest("ok.txt", b"abcd".to_vec(), &limits).is_ok());

    let result = Document::ingest("big.txt", b"abcde".to_vec(), &limits);
    match result {
        Err(DocumentError::TooLarge { name, size, limit }) => {
            assert_eq!(name, "big.txt");
            assert_eq!(size, 5);
            assert_eq!(limit, 4);
        }
        other => panic!("expected TooLarge, got {other:?}"),
    }
}

#[test]
fn content_is_trimmed_but_size_is_the_upload_size() {
    let doc = ingest("notes.txt", b"  hello world \n\n").unwrap();

    assert_eq!(doc.content, "hello world");
    assert_eq!(doc.size, 16);
    assert_eq!(doc.name, "notes.txt");
}

#[test]
fn invariant_same_content_same_version() {
    let doc1 = ingest("a.txt", b"Hello world").unwrap();
    let doc2 = ingest("b.txt", b"\tHello world\n").unwrap();
    let doc3 = ingest("c.txt", b"Hello world!").unwrap();

    assert_eq!(doc1.version, doc2.version);
    assert_ne!(doc1.version, doc3.version);
}

#[test]
fn version_is_prefixed_sha256_hex() {
    let doc = ingest("empty.txt", b"").unwrap();

    assert_eq!(
        doc.version.as_str(),
        "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(doc.version.digest().len(), 64);
}

#[test]
fn batch_ingestion_keeps_order_and_rejects_empty_uploads() {
    let files = vec![("one.txt", b"first".to_vec()), ("two.txt", b"second".to_vec())];
    let docs = Document::ingest_batch(files, &DocumentLimits::default()).unwrap();

    let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["one.txt", "two.txt"]);

    let none: Vec<(String, Vec<u8>)> = Vec::new();
    assert!(matches!(
        Document::ingest_batch(none, &DocumentLimits::default()),
        Err(DocumentError::EmptyBatch)
    ));
}

#[test]
fn batch_ingestion_stops_at_first_invalid_file() {
    let files = vec![
        ("good.txt", b"fine".to_vec()),
        ("bad.bin", vec![0xff, 0xfe]),
        ("later.txt", b"never read".to_vec()),
    ];
    let result = Document::ingest_batch(files, &DocumentLimits::default());
    assert!(matches!(result, Err(DocumentError::InvalidUtf8(_))));
}
