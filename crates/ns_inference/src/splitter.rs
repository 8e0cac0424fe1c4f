use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Terminal punctuation followed by whitespace. No abbreviation handling.
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Splits `text` into trimmed, non-empty sentences.
///
/// A boundary is a `.`, `!` or `?` immediately followed by whitespace; the
/// punctuation stays with the sentence it ends.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_END.find_iter(text) {
        // the punctuation mark is a single byte
        push_trimmed(&mut sentences, &text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        sentences.push(fragment.to_string());
    }
}
