use corpus_core::tokenize::{tokenize, Tokenizer, WordTokenizer};

fn tokens(text: &str) -> Vec<String> {
    tokenize(text).collect()
}

#[test]
fn splits_on_punctuation_and_whitespace() {
    assert_eq!(
        tokens("Hello, World! It's a  test.\nNew line"),
        vec!["hello", "world", "it", "s", "a", "test", "new", "line"]
    );
}

#[test]
fn keeps_digits_and_drops_underscores() {
    assert_eq!(tokens("word1 word1 2024_edition"), vec!["word1", "word1", "2024", "edition"]);
}

#[test]
fn lowercases_non_ascii_letters() {
    assert_eq!(tokens("Ünïcode CAFÉ naïve"), vec!["ünïcode", "café", "naïve"]);
}

#[test]
fn empty_and_punctuation_only_text_yield_nothing() {
    assert!(tokens("").is_empty());
    assert!(tokens("  ... --- !!! \t\n").is_empty());
}

#[test]
fn token_sequence_is_restartable() {
    let sequence = tokenize("one two three");
    let replay = sequence.clone();

    let first: Vec<String> = sequence.collect();
    let second: Vec<String> = replay.collect();

    assert_eq!(first, second);
    assert_eq!(first, vec!["one", "two", "three"]);
}

#[test]
fn word_tokenizer_matches_free_function() {
    let text = "The cat sat; the DOG sat.";
    assert_eq!(WordTokenizer.tokenize(text), tokens(text));
}
