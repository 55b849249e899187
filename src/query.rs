//! Search input policy and response ordering

use crate::constants::MIN_QUERY_LEN;

/// What a settled search input should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Empty query: show the full snapshot again, no network
    Restore,
    /// Too short to search: leave the list as it is
    Ignore,
    Search(String),
}

impl SearchAction {
    /// `query` is expected to be lower-cased already. Length counts chars.
    pub fn from_query(query: &str) -> Self {
        match query.chars().count() {
            0 => SearchAction::Restore,
            n if n < MIN_QUERY_LEN => SearchAction::Ignore,
            _ => SearchAction::Search(query.to_string()),
        }
    }
}

pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
}

/// Hands out monotonically increasing tickets for list updates.
/// Only results holding the latest ticket may replace the list.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    latest: u64,
}

impl SearchSequencer {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
