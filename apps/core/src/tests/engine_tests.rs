//! Engine Pipeline Tests
//!
//! Properties of the extraction/generation pipeline, exercised through the
//! default tagger and dictionary as well as scripted configurations.

use std::sync::Arc;

use crate::engine::{
    KeywordDictionary, KeywordExtractor, LexicalAnalyzer, LexicalClass, ProfileAnalyzer, StopList,
    SuggestionGenerator, Token,
};

/// Analyzer that tags every whitespace-separated word as a noun.
struct NounSoup;

impl LexicalAnalyzer for NounSoup {
    fn tokens(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|w| Token::new(w, LexicalClass::Noun))
            .collect()
    }
}

fn soup_extractor(dictionary: KeywordDictionary, stoplist: StopList) -> KeywordExtractor {
    KeywordExtractor::with_config(Arc::new(NounSoup), dictionary, stoplist)
}

mod extraction_properties {
    use super::*;

    #[test]
    fn test_output_always_sorted_and_unique() {
        let extractor = soup_extractor(
            KeywordDictionary::from_pairs(vec![("movie", "movie-watching")]),
            StopList::from_words(Vec::<String>::new()),
        );

        let inputs = [
            "zebra movie apple zebra banana movie",
            "banana banana banana",
            "cinema movie movies moviegoer",
        ];

        for input in inputs {
            let keywords = extractor.extract(input);
            for pair in keywords.windows(2) {
                assert!(
                    pair[0] < pair[1],
                    "not strictly ascending for input '{}': {:?}",
                    input,
                    keywords
                );
            }
        }
    }

    #[test]
    fn test_no_noun_input_yields_empty_set() {
        // The built-in tagger treats hiragana runs and digits as non-nouns.
        let analyzer = ProfileAnalyzer::new();

        for input in ["", "   ", "です ます した", "123 456"] {
            let report = analyzer.analyze_text(input);
            assert!(
                report.keywords.is_empty(),
                "expected no keywords for '{}'",
                input
            );
            assert_eq!(report.topics.len(), 3, "fallback topics for '{}'", input);
        }
    }

    #[test]
    fn test_dictionary_match_beats_raw_promotion() {
        // "moviegoer" passes length/stoplist checks on its own, but the
        // pattern match must normalize it.
        let extractor = soup_extractor(
            KeywordDictionary::from_pairs(vec![("movie", "movie-watching")]),
            StopList::from_words(Vec::<String>::new()),
        );

        assert_eq!(extractor.extract("moviegoer"), vec!["movie-watching"]);
    }

    #[test]
    fn test_stoplisted_words_never_surface() {
        let extractor = soup_extractor(
            KeywordDictionary::from_pairs(Vec::<(String, String)>::new()),
            StopList::from_words(vec!["hobby", "stuff"]),
        );

        let keywords = extractor.extract("hobby stuff reading");
        assert_eq!(keywords, vec!["reading"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = KeywordExtractor::new();
        let text = "趣味は映画鑑賞とカフェ巡りです。旅行も好きです。";

        let first = extractor.extract(text);
        let second = extractor.extract(text);
        let third = extractor.extract(text);

        assert_eq!(first, second);
        assert_eq!(second, third);
    }
}

mod generation_properties {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_single_keyword_topics_lead_with_it() {
        let generator = SuggestionGenerator::new();
        let result = generator.generate(&kw(&["movie-watching"]));

        assert!(result.message.contains("movie-watching"));
        assert!(result.topics[0].contains("movie-watching"));
        assert!(result.topics[1].contains("movie-watching"));
    }

    #[test]
    fn test_many_keywords_use_only_first_two() {
        let generator = SuggestionGenerator::new();
        let keywords = kw(&["アニメ", "カフェ巡り", "映画鑑賞", "旅行", "読書"]);
        let result = generator.generate(&keywords);

        assert!(result.message.contains("アニメ"));
        assert!(result.message.contains("カフェ巡り"));
        for unused in &keywords[2..] {
            assert!(
                !result.message.contains(unused.as_str()),
                "message references keyword beyond the first two: {}",
                unused
            );
        }
        assert!(result.topics[0].contains("アニメ"));
        assert!(result.topics[1].contains("カフェ巡り"));
    }

    #[test]
    fn test_movie_example_end_to_end() {
        // Input containing only "movie" and the one-character "a".
        let extractor = soup_extractor(
            KeywordDictionary::from_pairs(vec![("movie", "movie-watching")]),
            StopList::from_words(Vec::<String>::new()),
        );
        let keywords = extractor.extract("movie a");
        assert_eq!(keywords, vec!["movie-watching"]);

        let result = SuggestionGenerator::new().generate(&keywords);
        assert!(result.message.contains("movie-watching"));
        assert_eq!(result.topics.len(), 4);
    }

    #[test]
    fn test_keyword_order_is_alphabetical_not_relevance() {
        // カフェ巡り sorts before 映画鑑賞 regardless of emphasis in the text.
        let analyzer = ProfileAnalyzer::new();
        let report = analyzer.analyze_text("映画が何より好きです。たまにカフェも。");

        assert_eq!(report.keywords.first().map(String::as_str), Some("カフェ巡り"));
        assert!(report.topics[0].contains("カフェ巡り"));
    }
}
