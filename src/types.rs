//! Common types and data structures

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Activity record as served by `GET /activities`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus enrollment. Negative when the server over-allocates.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Ordered snapshot of server state, in response key order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivitySnapshot {
    entries: Vec<(String, Activity)>,
}

impl ActivitySnapshot {
    pub fn from_entries(entries: Vec<(String, Activity)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, a)| (name.as_str(), a))
    }

    /// Exact name lookup
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivitySnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = ActivitySnapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
                let mut entries: Vec<(String, Activity)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    // Later duplicates replace earlier ones, keeping the first position
                    if let Some(pos) = entries.iter().position(|(n, _)| *n == name) {
                        entries[pos].1 = activity;
                    } else {
                        entries.push((name, activity));
                    }
                }
                Ok(ActivitySnapshot { entries })
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

/// Entry from `GET /search/activities`; joined locally against the snapshot
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivitySearchResult {
    pub activity_name: String,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Entry from `GET /search/participants`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParticipantSearchResult {
    pub email: String,
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub activity_results: Vec<ActivitySearchResult>,
    pub participant_results: Vec<ParticipantSearchResult>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.activity_results.is_empty() && self.participant_results.is_empty()
    }
}

/// Form payload for signup and removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub activity: String,
}

/// Server reply body for signup/remove. Either field may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class_name(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Transient message shown under the signup form
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    pub shown_at: Instant,
    pub timeout: Duration,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, kind: MessageKind, timeout: Duration) -> Self {
        Self {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
            timeout,
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.timeout
    }

    /// Time until the message hides, zero once hidden
    pub fn remaining(&self, now: Instant) -> Duration {
        self.timeout
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }
}
