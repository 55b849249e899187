//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Activity Board";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
/// Overrides `base_url` from settings.json when set
pub const BASE_URL_ENV: &str = "ACTIVITY_BOARD_URL";

// Backend endpoints (relative to base URL)
pub const ACTIVITIES_PATH: &str = "activities";
pub const SEARCH_ACTIVITIES_PATH: &str = "search/activities";
pub const SEARCH_PARTICIPANTS_PATH: &str = "search/participants";
pub const SIGNUP_ACTION: &str = "signup";
pub const REMOVE_ACTION: &str = "remove";

/// Quiet period before a search input is acted on
pub const DEBOUNCE_MS: u64 = 300;
/// How long a signup message stays visible
pub const MESSAGE_TIMEOUT_MS: u64 = 5000;
/// Queries shorter than this (but non-empty) are ignored
pub const MIN_QUERY_LEN: usize = 3;

// User-visible strings
pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_RESULTS_TEXT: &str = "No results found.";
pub const PARTICIPANT_RESULTS_HEADING: &str = "Participant Search Results";
pub const GENERIC_ERROR_TEXT: &str = "An error occurred";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const REMOVE_FAILED_TEXT: &str = "Failed to remove participant. Please try again.";
