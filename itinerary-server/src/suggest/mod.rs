//! Timing-suggestion service boundary.
//!
//! The scheduler asks an external natural-language service when a POI
//! is best visited. The service is strictly optional: every failure
//! (network, timeout, malformed reply) degrades to the deterministic
//! rules in the timing policy. One attempt per POI per build.

mod client;
mod error;
mod mock;
mod types;

pub use client::{DisabledSuggester, SuggestClient, SuggestConfig};
pub use error::SuggestError;
pub use mock::MockSuggester;
pub use types::{TimingReply, TimingRequest};

/// Trait for sources of timing suggestions.
///
/// This abstraction lets the timing policy be tested with canned
/// replies and run without any service configured.
pub trait TimingSuggester: Send + Sync {
    /// Submit a timing request and return the parsed reply.
    ///
    /// Implementations must make at most one attempt and bound their
    /// own latency; callers treat any error as "service returned
    /// nothing".
    fn suggest_timing(
        &self,
        request: &TimingRequest,
    ) -> impl Future<Output = Result<TimingReply, SuggestError>> + Send;
}
