//! Activity snapshot loading

use super::{App, AppEvent};
use crate::error::ApiError;
use crate::types::ActivitySnapshot;
use crate::view;
use tracing::{debug, error, info};

impl App {
    /// Fetch the full snapshot. The list and selector are replaced when it lands.
    /// A newer load supersedes any still in flight.
    pub fn load_activities(&mut self) {
        self.loading = true;
        self.load_generation += 1;
        let generation = self.load_generation;
        info!(url = %self.api.base_url(), generation, "Loading activities");
        let api = self.api.clone();
        self.spawn_task(async move {
            AppEvent::ActivitiesLoaded {
                generation,
                result: api.fetch_activities().await,
            }
        });
    }

    pub(crate) fn on_activities_loaded(
        &mut self,
        generation: u64,
        result: Result<ActivitySnapshot, ApiError>,
    ) {
        if generation != self.load_generation {
            debug!(generation, latest = self.load_generation, "Discarding superseded activities load");
            return;
        }
        self.loading = false;
        match result {
            Ok(snapshot) => {
                info!(count = snapshot.len(), "Activities loaded");
                self.snapshot = snapshot;
                self.reapply_search();
                self.activity_options = view::selector_options(&self.snapshot);
                if let Some(selected) = &self.selected_activity {
                    if !self.activity_options.contains(selected) {
                        self.selected_activity = None;
                    }
                }
            }
            Err(e) => {
                error!(error = %e, "Error fetching activities");
                self.list = view::render_load_failure();
            }
        }
    }
}
