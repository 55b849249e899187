//! Signup form submission, participant removal and the status message

use super::{App, AppEvent};
use crate::constants::*;
use crate::error::ApiError;
use crate::types::*;
use std::time::Instant;
use tracing::{debug, error, info};

impl App {
    pub fn can_submit(&self) -> bool {
        !self.signup_in_flight && !self.email.trim().is_empty() && self.selected_activity.is_some()
    }

    /// Send the form. The snapshot is left untouched on success.
    pub fn submit_signup(&mut self) {
        if !self.can_submit() {
            return;
        }
        let Some(activity) = self.selected_activity.clone() else {
            return;
        };
        let request = SignupRequest {
            email: self.email.clone(),
            activity,
        };
        info!(email = %request.email, activity = %request.activity, "Submitting signup");

        self.signup_in_flight = true;
        let api = self.api.clone();
        self.spawn_task(async move { AppEvent::SignupFinished(api.signup(&request).await) });
    }

    pub(crate) fn on_signup_finished(&mut self, result: Result<String, ApiError>) {
        self.signup_in_flight = false;
        match result {
            Ok(message) => {
                info!(message = %message, "Signup succeeded");
                self.show_message(message, MessageKind::Success);
                self.email.clear();
                self.selected_activity = None;
            }
            Err(e) => {
                error!(error = %e, "Error signing up");
                self.show_message(failure_text(&e, SIGNUP_FAILED_TEXT), MessageKind::Error);
            }
        }
    }

    /// One removal at a time; further clicks are ignored until it finishes.
    pub fn remove_participant(&mut self, activity: String, email: String) {
        if self.remove_in_flight {
            debug!(email = %email, activity = %activity, "Removal already in flight, ignoring");
            return;
        }
        let request = SignupRequest { email, activity };
        info!(email = %request.email, activity = %request.activity, "Removing participant");
        self.remove_in_flight = true;
        let api = self.api.clone();
        self.spawn_task(async move {
            let result = api.unregister(&request).await;
            AppEvent::RemoveFinished { request, result }
        });
    }

    pub(crate) fn on_remove_finished(&mut self, request: SignupRequest, result: Result<String, ApiError>) {
        self.remove_in_flight = false;
        match result {
            Ok(message) => {
                info!(email = %request.email, activity = %request.activity, "Participant removed");
                self.show_message(message, MessageKind::Success);
                self.load_activities();
            }
            Err(e) => {
                error!(error = %e, email = %request.email, activity = %request.activity, "Error removing participant");
                self.show_message(failure_text(&e, REMOVE_FAILED_TEXT), MessageKind::Error);
            }
        }
    }

    pub fn show_message(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.message = Some(StatusMessage::new(text, kind, self.settings.message_timeout()));
    }

    /// Current message, dropping it once its time is up
    pub fn visible_message(&mut self, now: Instant) -> Option<&StatusMessage> {
        if self.message.as_ref().is_some_and(|m| !m.is_visible(now)) {
            self.message = None;
        }
        self.message.as_ref()
    }
}

/// Server detail when present, a generic error for detail-less protocol
/// failures, `fallback` when the request never got a usable reply.
fn failure_text(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Protocol { .. } => err
            .detail()
            .filter(|d| !d.is_empty())
            .unwrap_or(GENERIC_ERROR_TEXT)
            .to_string(),
        _ => fallback.to_string(),
    }
}
