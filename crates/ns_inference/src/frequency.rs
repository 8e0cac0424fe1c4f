//! Extractive summarizer scoring sentences by normalized word frequency.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

use crate::splitter::split_sentences;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[A-Za-z']+").unwrap();
    static ref STOP_WORDS: HashSet<&'static str> = STOP_WORD_LIST.split_whitespace().collect();
}

const STOP_WORD_LIST: &str = "
    a an the and or but if while with to of in on for at by from as is are was were be been being
    it this that these those i you he she they we us them our your his her their my me mine
    not no do does did done can could should would may might will just very more most so than too
    about into over after before between through during without within up down out off again further
    then once here there when where why how all any both each few many some such only own same other
";

/// Words shorter than this are never scored.
const MIN_WORD_LEN: usize = 3;

/// Lowercased scoring words of `sentence`, stop words and short words removed.
pub fn scoring_words(sentence: &str) -> Vec<String> {
    WORD.find_iter(sentence)
        .map(|word| word.as_str().to_ascii_lowercase())
        .filter(|word| word.len() >= MIN_WORD_LEN && !STOP_WORDS.contains(word.as_str()))
        .collect()
}

/// Word counts across all sentences.
pub fn word_frequencies(sentences: &[String]) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();
    for sentence in sentences {
        for word in scoring_words(sentence) {
            *frequencies.entry(word).or_insert(0) += 1;
        }
    }
    frequencies
}

/// Average word frequency of each scorable sentence, as `(index, score)` in
/// sentence order. Sentences without scoring words are left out.
pub fn score_sentences(sentences: &[String]) -> Vec<(usize, f64)> {
    let frequencies = word_frequencies(sentences);

    sentences
        .iter()
        .enumerate()
        .filter_map(|(idx, sentence)| {
            let words = scoring_words(sentence);
            if words.is_empty() {
                return None;
            }
            let total: usize = words
                .iter()
                .map(|word| frequencies.get(word).copied().unwrap_or(0))
                .sum();
            Some((idx, total as f64 / words.len() as f64))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencySummarizer;

impl FrequencySummarizer {
    pub fn new() -> Self {
        Self
    }

    /// Picks the `max_sentences` best scoring sentences of `text` and joins them
    /// in their original order. Text that already fits is returned trimmed.
    pub fn summarize(&self, text: &str, max_sentences: usize) -> String {
        let sentences = split_sentences(text);
        if sentences.len() <= max_sentences {
            return text.trim().to_string();
        }

        let mut scored = score_sentences(&sentences);
        // stable: equal scores keep their original order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let mut selected: Vec<usize> = scored
            .into_iter()
            .take(max_sentences)
            .map(|(idx, _)| idx)
            .collect();
        selected.sort_unstable();

        selected
            .into_iter()
            .map(|idx| sentences[idx].as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATS: &str = "Cats are great. Cats sleep a lot. Dogs bark loudly. Cats also purr softly.";

    #[test]
    fn test_scoring_words_filters() {
        assert_eq!(
            scoring_words("The CAT's owner and I went to Paris, ok?"),
            vec!["cat's", "owner", "went", "paris"]
        );
        assert!(scoring_words("It is on me.").is_empty());
        assert!(scoring_words("Café 42").iter().all(|w| w.is_ascii()));
    }

    #[test]
    fn test_frequencies_count_every_occurrence() {
        let sentences = split_sentences(CATS);
        let frequencies = word_frequencies(&sentences);
        assert_eq!(frequencies["cats"], 3);
        assert_eq!(frequencies["dogs"], 1);
        assert!(!frequencies.contains_key("are"));
        assert!(!frequencies.contains_key("a"));
    }

    #[test]
    fn test_cats_scenario_ranking() {
        let sentences = split_sentences(CATS);
        let scores = score_sentences(&sentences);
        let score = |idx: usize| scores.iter().find(|(i, _)| *i == idx).unwrap().1;

        // sentences mentioning "cats" outrank the one about dogs
        assert!(score(0) > score(2));
        assert!(score(1) > score(2));
        assert!(score(3) > score(2));

        let mut ranked = scores.clone();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        let mut expected: Vec<usize> = ranked.iter().take(2).map(|(i, _)| *i).collect();
        expected.sort();
        let expected = expected
            .iter()
            .map(|i| sentences[*i].as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let summary = FrequencySummarizer::new().summarize(CATS, 2);
        assert_eq!(summary, expected);
        assert_eq!(summary, "Cats are great. Cats sleep a lot.");
    }

    #[test]
    fn test_short_text_passthrough() {
        let text = "  One sentence here. And another one!  ";
        assert_eq!(FrequencySummarizer::new().summarize(text, 2), text.trim());
        assert_eq!(FrequencySummarizer::new().summarize(text, 3), text.trim());
        assert_eq!(FrequencySummarizer::new().summarize("no punctuation at all", 1), "no punctuation at all");
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let text = "Alpha beta gamma. Delta epsilon zeta. Theta iota kappa.";
        assert_eq!(FrequencySummarizer::new().summarize(text, 1), "Alpha beta gamma.");
        assert_eq!(
            FrequencySummarizer::new().summarize(text, 2),
            "Alpha beta gamma. Delta epsilon zeta."
        );
    }

    #[test]
    fn test_unscorable_sentences_never_selected() {
        let text = "It is on. Markets rallied strongly today. Markets closed higher.";
        let summary = FrequencySummarizer::new().summarize(text, 2);
        assert_eq!(summary, "Markets rallied strongly today. Markets closed higher.");

        // fewer scorable sentences than requested
        let text = "It is. So it was. Markets rallied.";
        assert_eq!(FrequencySummarizer::new().summarize(text, 2), "Markets rallied.");
    }

    #[test]
    fn test_output_keeps_source_order() {
        let text = "Intro words here. Rockets rockets rockets launch. Filler text appears. Rockets land safely.";
        let summary = FrequencySummarizer::new().summarize(text, 2);
        assert_eq!(summary, "Rockets rockets rockets launch. Rockets land safely.");
    }

    #[test]
    fn test_deterministic() {
        let summarizer = FrequencySummarizer::new();
        let text = "Solar output rose. Wind output fell. Solar and wind both matter. Grid demand peaked. Solar wins.";
        let first = summarizer.summarize(text, 2);
        for _ in 0..10 {
            assert_eq!(summarizer.summarize(text, 2), first);
        }
    }
}
