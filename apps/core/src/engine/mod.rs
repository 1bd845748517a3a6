//! # Engine Module
//!
//! Local analysis pipeline for MatchAI: turns a match's free-text
//! self-introduction into keywords and a ready-to-send suggestion, without
//! calling any model.
//!
//! ## Components
//! - `lexicon`: word segmentation + lexical-class tagging capability
//! - `dictionary`: ordered keyword dictionary and stoplist
//! - `extractor`: noun filtering, normalization, dedup/sort
//! - `suggestion`: template-driven message and topic generation
//! - `report`: output data structure
//! - `analyzer`: main orchestrator and the local `SuggestionSource` strategy

pub mod analyzer;
pub mod dictionary;
pub mod extractor;
pub mod lexicon;
pub mod report;
pub mod suggestion;

pub use analyzer::{LocalTemplateEngine, ProfileAnalyzer};
pub use dictionary::{DictionaryEntry, KeywordDictionary, StopList};
pub use extractor::KeywordExtractor;
pub use lexicon::{BasicTagger, LexicalAnalyzer, LexicalClass, Token};
pub use report::AnalysisReport;
pub use suggestion::{SuggestionGenerator, SuggestionResult};
