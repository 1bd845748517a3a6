//! Profile analyzer: orchestrates extraction and suggestion generation.

use std::time::Instant;

use async_trait::async_trait;
use tracing::info;

use crate::profile::ProfileInput;
use crate::source::SuggestionSource;

use super::extractor::KeywordExtractor;
use super::report::AnalysisReport;
use super::suggestion::{SuggestionGenerator, SuggestionResult};

/// Local analysis entry point: free text in, keywords + suggestion out.
pub struct ProfileAnalyzer {
    extractor: KeywordExtractor,
    generator: SuggestionGenerator,
}

impl Default for ProfileAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileAnalyzer {
    /// Create an analyzer with the default extraction pipeline.
    pub fn new() -> Self {
        Self {
            extractor: KeywordExtractor::new(),
            generator: SuggestionGenerator::new(),
        }
    }

    /// Create an analyzer around a custom extractor.
    #[allow(dead_code)]
    pub fn with_extractor(extractor: KeywordExtractor) -> Self {
        Self {
            extractor,
            generator: SuggestionGenerator::new(),
        }
    }

    /// Analyze a profile's self-introduction text.
    pub fn analyze(&self, profile: &ProfileInput) -> AnalysisReport {
        self.analyze_text(&profile.self_introduction)
    }

    /// Analyze free-form text and produce the full report.
    ///
    /// Synchronous and side-effect-free apart from tracing.
    pub fn analyze_text(&self, text: &str) -> AnalysisReport {
        let start = Instant::now();

        let keywords = self.extractor.extract(text);
        let suggestion = self.generator.generate(&keywords);

        let mut report = AnalysisReport::new(keywords, suggestion);
        report.processing_time_ms = start.elapsed().as_millis() as u64;

        info!("{}", report.summary());
        report
    }
}

/// Local strategy behind the [`SuggestionSource`] seam.
///
/// Infallible: every profile, including an empty one, yields a populated
/// suggestion via the fallback templates.
pub struct LocalTemplateEngine {
    analyzer: ProfileAnalyzer,
}

impl Default for LocalTemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalTemplateEngine {
    pub fn new() -> Self {
        Self {
            analyzer: ProfileAnalyzer::new(),
        }
    }

    #[allow(dead_code)]
    pub fn with_analyzer(analyzer: ProfileAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Run the full local analysis, keeping the keyword list and metadata.
    pub fn analyze(&self, profile: &ProfileInput) -> AnalysisReport {
        self.analyzer.analyze(profile)
    }
}

#[async_trait]
impl SuggestionSource for LocalTemplateEngine {
    async fn request_suggestion(&self, profile: &ProfileInput) -> SuggestionResult {
        self.analyzer.analyze(profile).into_suggestion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_takes_fallback_branch() {
        let analyzer = ProfileAnalyzer::new();
        let report = analyzer.analyze(&ProfileInput::default());

        assert!(report.keywords.is_empty());
        assert_eq!(report.topics.len(), 3);
        assert!(!report.message.is_empty());
    }

    #[test]
    fn test_keywords_flow_into_suggestion() {
        let analyzer = ProfileAnalyzer::new();
        let report = analyzer.analyze_text("映画が好きです");

        assert_eq!(report.keywords, vec!["映画鑑賞".to_string()]);
        assert!(report.message.contains("映画鑑賞"));
        assert_eq!(report.topics.len(), 4);
    }

    #[test]
    fn test_two_keyword_profile() {
        let analyzer = ProfileAnalyzer::new();
        let report = analyzer.analyze_text("休日はカフェで読書をしています");

        assert!(report.keywords.len() >= 2);
        let first = &report.keywords[0];
        let second = &report.keywords[1];
        assert!(report.message.contains(first.as_str()));
        assert!(report.message.contains(second.as_str()));
        assert_eq!(report.topics.len(), 5);
    }

    #[tokio::test]
    async fn test_local_engine_implements_source() {
        let engine = LocalTemplateEngine::new();
        let profile = ProfileInput::from_text("旅行とキャンプが趣味です");

        let suggestion = engine.request_suggestion(&profile).await;
        assert!(suggestion.message.contains("キャンプ"));
    }
}
