use passage_core::tokenizer::tokenize;

#[test]
fn it_normalizes_and_lowercases() {
    let toks = tokenize("The café MENU lists fish.");
    // Unicode normalization: café -> café (NFKC), lowercased
    assert!(toks.contains(&"café".to_string()));
    assert!(toks.contains(&"menu".to_string()));
    assert!(toks.contains(&"fish".to_string()));
}

#[test]
fn it_filters_stopwords() {
    let toks = tokenize("The quick brown fox and the lazy dog");
    assert!(!toks.contains(&"the".to_string()));
    assert!(!toks.contains(&"and".to_string()));
    assert!(toks.contains(&"fox".to_string()));
}

#[test]
fn it_drops_punctuation_only_tokens() {
    let toks = tokenize("wait -- what ?!");
    assert_eq!(toks, vec!["wait"]);
}

#[test]
fn it_preserves_word_order() {
    let toks = tokenize("dogs bark loud");
    assert_eq!(toks, vec!["dogs", "bark", "loud"]);
}
