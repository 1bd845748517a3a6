//! Template-driven message and topic generation.
//!
//! A pure, total function of the sorted keyword sequence: every input,
//! including the empty one, yields a populated result. There is no failure
//! path. "First" and "second" keyword mean positions in the sorted sequence,
//! not relevance.

use serde::{Deserialize, Serialize};

/// Generated opening message and conversation-starter topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    /// Suggested opening message.
    pub message: String,
    /// Ordered conversation-starter topics.
    pub topics: Vec<String>,
}

/// Fallback message when no keyword was extracted.
const FALLBACK_MESSAGE: &str =
    "素敵なプロフィールですね！何か共通の話題が見つかると嬉しいです。";

/// Generic icebreakers for the no-keyword case.
const FALLBACK_TOPICS: [&str; 3] = [
    "最近ハマっていることはありますか？",
    "休日はどのように過ごされていますか？",
    "行ってみたい場所はありますか？",
];

/// Generic closing questions shared by the keyword cases.
const CLOSING_TOPICS: [&str; 2] = [
    "お互いの価値観について、少しお話しませんか？",
    "最近感動したことや、心に残っている出来事はありますか？",
];

/// Stateless suggestion generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionGenerator;

impl SuggestionGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate an opening message and topic list from sorted keywords.
    pub fn generate(&self, keywords: &[String]) -> SuggestionResult {
        let first = match keywords.first() {
            Some(first) => first,
            None => return Self::fallback(),
        };

        match keywords.get(1) {
            None => Self::single_keyword(first),
            Some(second) => Self::keyword_pair(first, second),
        }
    }

    fn fallback() -> SuggestionResult {
        SuggestionResult {
            message: FALLBACK_MESSAGE.to_string(),
            topics: FALLBACK_TOPICS.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn single_keyword(first: &str) -> SuggestionResult {
        let message = format!(
            "はじめまして！プロフィール拝見しました。{}がお好きなんですね！\
             私も興味があるので、ぜひお話してみたいです！\
             もしよろしければ、少しお話ししませんか？😊",
            first
        );
        let topics = vec![
            format!("{}について、最近何か面白いことはありましたか？", first),
            format!(
                "もし{}以外の趣味を見つけるとしたら、どんなことに挑戦してみたいですか？",
                first
            ),
            CLOSING_TOPICS[0].to_string(),
            CLOSING_TOPICS[1].to_string(),
        ];
        SuggestionResult { message, topics }
    }

    fn keyword_pair(first: &str, second: &str) -> SuggestionResult {
        let message = format!(
            "はじめまして！プロフィール拝見しました。{}や{}など、素敵なご趣味をお持ちなんですね！\
             もしよろしければ、共通の話題でお話しませんか？お返事お待ちしております！",
            first, second
        );
        let topics = vec![
            format!("{}について、最近何か面白いことはありましたか？", first),
            format!("{}に関連するおすすめの場所やお店はありますか？", second),
            format!(
                "もし{}以外の趣味を見つけるとしたら、どんなことに挑戦してみたいですか？",
                first
            ),
            CLOSING_TOPICS[0].to_string(),
            CLOSING_TOPICS[1].to_string(),
        ];
        SuggestionResult { message, topics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_keywords_yield_fixed_fallback() {
        let generator = SuggestionGenerator::new();
        let result = generator.generate(&[]);

        assert_eq!(result.message, FALLBACK_MESSAGE);
        assert_eq!(result.topics.len(), 3);
        assert_eq!(result.topics[0], FALLBACK_TOPICS[0]);
        assert_eq!(result.topics[2], FALLBACK_TOPICS[2]);
    }

    #[test]
    fn test_single_keyword_message_and_topics() {
        let generator = SuggestionGenerator::new();
        let result = generator.generate(&kw(&["映画鑑賞"]));

        assert!(result.message.contains("映画鑑賞"));
        assert_eq!(result.topics.len(), 4);
        assert!(result.topics[0].contains("映画鑑賞"));
        assert!(result.topics[1].contains("映画鑑賞"));
        assert_eq!(result.topics[2], CLOSING_TOPICS[0]);
        assert_eq!(result.topics[3], CLOSING_TOPICS[1]);
    }

    #[test]
    fn test_two_keywords_fill_both_slots() {
        let generator = SuggestionGenerator::new();
        let result = generator.generate(&kw(&["カフェ巡り", "読書"]));

        assert!(result.message.contains("カフェ巡り"));
        assert!(result.message.contains("読書"));
        assert_eq!(result.topics.len(), 5);
        assert!(result.topics[0].contains("カフェ巡り"));
        assert!(result.topics[1].contains("読書"));
    }

    #[test]
    fn test_extra_keywords_beyond_two_are_ignored() {
        let generator = SuggestionGenerator::new();
        let two = generator.generate(&kw(&["カフェ巡り", "読書"]));
        let many = generator.generate(&kw(&["カフェ巡り", "読書", "旅行", "料理"]));

        assert_eq!(two, many);
        assert!(!many.message.contains("旅行"));
        assert!(!many.topics.iter().any(|t| t.contains("旅行")));
    }

    #[test]
    fn test_always_populated() {
        let generator = SuggestionGenerator::new();

        for keywords in [vec![], kw(&["読書"]), kw(&["読書", "旅行"])] {
            let result = generator.generate(&keywords);
            assert!(!result.message.is_empty());
            assert!(result.topics.len() >= 3);
        }
    }
}
