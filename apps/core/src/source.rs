//! Suggestion strategy seam.

use async_trait::async_trait;

use crate::engine::suggestion::SuggestionResult;
use crate::profile::ProfileInput;

/// Produces a suggestion for a profile.
///
/// Two interchangeable strategies implement this: the local template engine
/// and the remote chat-completion adapter. Which one serves requests is a
/// configuration decision, not a call-site decision. Implementations never
/// fault past this boundary: failures of an underlying service are collapsed
/// into display-ready strings inside the result.
#[async_trait]
pub trait SuggestionSource: Send + Sync + 'static {
    async fn request_suggestion(&self, profile: &ProfileInput) -> SuggestionResult;
}
