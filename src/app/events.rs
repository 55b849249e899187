//! Results of background work, applied on the UI thread

use super::App;
use crate::error::ApiError;
use crate::types::*;
use tracing::trace;

pub enum AppEvent {
    /// Only the load with the latest `generation` is applied
    ActivitiesLoaded {
        generation: u64,
        result: Result<ActivitySnapshot, ApiError>,
    },
    /// Debounce window for this (lower-cased) query has settled
    SearchDue(String),
    SearchCompleted {
        ticket: u64,
        query: String,
        results: SearchResults,
    },
    SignupFinished(Result<String, ApiError>),
    RemoveFinished {
        request: SignupRequest,
        result: Result<String, ApiError>,
    },
}

impl AppEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::ActivitiesLoaded { .. } => "activities_loaded",
            AppEvent::SearchDue(_) => "search_due",
            AppEvent::SearchCompleted { .. } => "search_completed",
            AppEvent::SignupFinished(_) => "signup_finished",
            AppEvent::RemoveFinished { .. } => "remove_finished",
        }
    }
}

impl App {
    /// Drain everything background tasks have reported since the last frame.
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    pub(crate) fn handle_event(&mut self, event: AppEvent) {
        trace!(event = event.kind(), "Handling event");
        match event {
            AppEvent::ActivitiesLoaded { generation, result } => {
                self.on_activities_loaded(generation, result)
            }
            AppEvent::SearchDue(query) => self.on_search_due(query),
            AppEvent::SearchCompleted {
                ticket,
                query,
                results,
            } => self.on_search_completed(ticket, &query, results),
            AppEvent::SignupFinished(result) => self.on_signup_finished(result),
            AppEvent::RemoveFinished { request, result } => self.on_remove_finished(request, result),
        }
    }
}
