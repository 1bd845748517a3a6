//! Test Module
//!
//! Cross-module test suite for the MatchAI backend.
//!
//! ## Test Categories
//! - `engine_tests`: extraction/generation properties over the full pipeline
//! - `remote_tests`: remote adapter behavior against a mock API server
//! - `integration_tests`: both suggestion strategies behind the shared seam

pub mod engine_tests;
