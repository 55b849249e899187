//! Debounced search over activities and participants

use super::{deliver, App, AppEvent};
use crate::query::{normalize_query, SearchAction};
use crate::types::SearchResults;
use crate::view;
use tracing::debug;

impl App {
    /// Called whenever the search box text changes. Restarts the debounce window.
    pub fn on_search_changed(&mut self) {
        let query = normalize_query(&self.search_query);
        let tx = self.events_tx.clone();
        let ctx = self.ctx.clone();
        self.debouncer.schedule(self.settings.debounce(), async move {
            deliver(&tx, &ctx, AppEvent::SearchDue(query));
        });
    }

    pub(crate) fn on_search_due(&mut self, query: String) {
        match SearchAction::from_query(&query) {
            SearchAction::Restore => {
                self.sequencer.issue();
                self.search_results = None;
                self.list = view::render_all(&self.snapshot);
                debug!(count = self.snapshot.len(), "Search cleared, showing all activities");
            }
            SearchAction::Ignore => {
                debug!(query = %query, "Query too short, leaving list as is");
            }
            SearchAction::Search(query) => {
                let ticket = self.sequencer.issue();
                debug!(query = %query, ticket, "Dispatching search");
                let api = self.api.clone();
                self.spawn_task(async move {
                    let results = api.search(&query).await;
                    AppEvent::SearchCompleted {
                        ticket,
                        query,
                        results,
                    }
                });
            }
        }
    }

    pub(crate) fn on_search_completed(&mut self, ticket: u64, query: &str, results: SearchResults) {
        if !self.sequencer.is_current(ticket) {
            debug!(query, ticket, "Discarding stale search results");
            return;
        }
        debug!(
            query,
            activities = results.activity_results.len(),
            participants = results.participant_results.len(),
            top_activity_score = ?results.activity_results.first().and_then(|r| r.score),
            top_participant_score = ?results.participant_results.first().and_then(|r| r.score),
            "Search results"
        );
        self.list = view::render_search_results(&self.snapshot, &results);
        self.search_results = Some(results);
    }

    /// Bring the list in line with the search box after the snapshot changed.
    /// Shown results are re-joined at once; an active query is also re-run.
    pub(crate) fn reapply_search(&mut self) {
        let query = normalize_query(&self.search_query);
        let action = SearchAction::from_query(&query);
        if action == SearchAction::Restore {
            self.on_search_due(query);
            return;
        }
        self.list = match &self.search_results {
            Some(results) => view::render_search_results(&self.snapshot, results),
            None => view::render_all(&self.snapshot),
        };
        if let SearchAction::Search(_) = action {
            self.on_search_due(query);
        }
    }
}
