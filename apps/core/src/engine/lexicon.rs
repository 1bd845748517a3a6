//! Lexical analysis capability: word segmentation plus lexical-class tagging.
//!
//! The extraction pipeline only needs two things from a tagger: "segment text
//! into words" and "is this word noun-like". Both are behind the
//! [`LexicalAnalyzer`] trait so a real morphological analyzer can be plugged
//! in; [`BasicTagger`] is the built-in heuristic implementation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Lexical class assigned to a token.
///
/// The engine only cares about the noun/non-noun distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexicalClass {
    /// Noun-like word, eligible for keyword promotion.
    Noun,
    /// Anything else (particles, verbs, function words, numbers).
    Other,
}

/// A segmented word with its lexical class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub class: LexicalClass,
}

impl Token {
    pub fn new(text: impl Into<String>, class: LexicalClass) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }
}

/// Word segmentation + part-of-speech tagging capability.
///
/// Contract: tokens cover the input's word material left-to-right with no
/// overlaps; empty input yields an empty sequence, never an error.
pub trait LexicalAnalyzer: Send + Sync {
    fn tokens(&self, text: &str) -> Vec<Token>;
}

// Segmentation by Unicode script runs. Katakana runs may continue with the
// prolonged sound mark (コーヒー).
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Katakana}[\p{Katakana}ー]*|\p{Han}+|\p{Hiragana}+|[A-Za-z][A-Za-z0-9]*|[0-9]+")
        .expect("Invalid regex: segmentation pattern")
});

/// English function words that are never noun-like.
const FUNCTION_WORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "nor", "so", "if", "as", "i", "you",
    "he", "she", "it", "we", "they", "me", "my", "your", "his", "her", "its",
    "is", "am", "are", "was", "were", "be", "been", "have", "has", "had",
    "do", "does", "did", "will", "would", "can", "could", "may", "might",
    "in", "on", "at", "to", "from", "by", "with", "of", "for", "this", "that",
    "not", "no", "too", "very", "just",
];

/// Heuristic script-based tagger.
///
/// Kanji and katakana runs, and Latin words outside a small function-word
/// list, are treated as noun-like. Hiragana runs are treated as grammatical
/// material (particles, inflections) and digit runs as numbers; both are
/// tagged [`LexicalClass::Other`]. Compound words spanning scripts (買い物)
/// split at script boundaries, which is acceptable for the minimal tagger.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTagger;

impl BasicTagger {
    pub fn new() -> Self {
        Self
    }

    fn classify(word: &str) -> LexicalClass {
        let first = match word.chars().next() {
            Some(c) => c,
            None => return LexicalClass::Other,
        };

        if first.is_ascii_digit() {
            return LexicalClass::Other;
        }
        if first.is_ascii_alphabetic() {
            let lower = word.to_lowercase();
            if FUNCTION_WORDS_EN.contains(&lower.as_str()) {
                return LexicalClass::Other;
            }
            return LexicalClass::Noun;
        }
        if is_hiragana(first) {
            return LexicalClass::Other;
        }
        // Kanji and katakana runs.
        LexicalClass::Noun
    }
}

fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

impl LexicalAnalyzer for BasicTagger {
    fn tokens(&self, text: &str) -> Vec<Token> {
        SEGMENT
            .find_iter(text)
            .map(|m| Token::new(m.as_str(), Self::classify(m.as_str())))
            .collect()
    }
}
