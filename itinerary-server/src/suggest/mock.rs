//! Mock timing suggester for testing without a live service.
//!
//! Serves canned reply texts keyed by POI name, either built in code
//! or loaded from a directory of `.txt` files (one file per POI name).

use std::collections::HashMap;
use std::path::Path;

use super::TimingSuggester;
use super::error::SuggestError;
use super::types::{TimingReply, TimingRequest};

/// Mock suggester serving canned replies.
///
/// POIs with no canned reply get `EmptyResponse`, which exercises the
/// fallback path exactly as a live outage would.
#[derive(Debug, Clone, Default)]
pub struct MockSuggester {
    replies: HashMap<String, String>,
}

impl MockSuggester {
    /// Create an empty mock. Every request will fail over to the
    /// deterministic rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned reply for a POI name.
    pub fn with_reply(mut self, poi_name: impl Into<String>, text: impl Into<String>) -> Self {
        self.replies.insert(poi_name.into(), text.into());
        self
    }

    /// Load canned replies from a directory of `.txt` files.
    ///
    /// The file stem is the POI name (e.g. `Cubbon Park.txt`).
    pub fn from_dir(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let mut replies = HashMap::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("txt") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let text = std::fs::read_to_string(&path)?;
            replies.insert(name.to_string(), text);
        }

        Ok(Self { replies })
    }

    /// Number of canned replies.
    pub fn len(&self) -> usize {
        self.replies.len()
    }

    /// Whether the mock has no replies at all.
    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }
}

impl TimingSuggester for MockSuggester {
    async fn suggest_timing(&self, request: &TimingRequest) -> Result<TimingReply, SuggestError> {
        match self.replies.get(&request.poi_name) {
            Some(text) => Ok(TimingReply::parse(text)),
            None => Err(SuggestError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeOfDay;
    use std::io::Write;

    fn request(name: &str) -> TimingRequest {
        TimingRequest {
            poi_name: name.to_string(),
            category: "park".into(),
            rating: None,
            description: None,
            weather_condition: None,
            temperature_high: None,
            sunrise: "06:30".into(),
            sunset: "18:30".into(),
        }
    }

    #[tokio::test]
    async fn canned_reply_is_parsed() {
        let mock = MockSuggester::new().with_reply(
            "Cubbon Park",
            "TIME_CATEGORY: EARLY_MORNING\nSTART_TIME: 07:00\nREASONING: cool and quiet",
        );
        let reply = mock.suggest_timing(&request("Cubbon Park")).await.unwrap();
        assert_eq!(reply.time_of_day, Some(TimeOfDay::EarlyMorning));
    }

    #[tokio::test]
    async fn unknown_poi_errs_like_an_outage() {
        let mock = MockSuggester::new();
        let err = mock.suggest_timing(&request("Unknown")).await.unwrap_err();
        assert!(matches!(err, SuggestError::EmptyResponse));
    }

    #[tokio::test]
    async fn loads_replies_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("Toit Brewpub.txt")).unwrap();
        writeln!(file, "TIME_CATEGORY: NIGHT").unwrap();
        writeln!(file, "START_TIME: 21:00").unwrap();
        writeln!(file, "REASONING: live music starts late").unwrap();
        drop(file);
        // Non-txt files are ignored.
        std::fs::write(dir.path().join("notes.md"), "ignore me").unwrap();

        let mock = MockSuggester::from_dir(dir.path()).unwrap();
        assert_eq!(mock.len(), 1);

        let reply = mock.suggest_timing(&request("Toit Brewpub")).await.unwrap();
        assert_eq!(reply.time_of_day, Some(TimeOfDay::Night));
        assert_eq!(reply.start.unwrap().to_string(), "21:00");
    }
}
