//! App module - contains the main application state and logic

mod events;
mod loading;
mod search;
mod signup;

pub use events::AppEvent;

use crate::api::ApiClient;
use crate::debounce::Debouncer;
use crate::query::SearchSequencer;
use crate::settings::Settings;
use crate::types::*;
use crate::view::{self, ListNode};
use eframe::egui;
use std::future::Future;
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::debug;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) api: ApiClient,
    pub(crate) ctx: egui::Context,
    // Background work reports back through this channel
    pub(crate) events_tx: mpsc::Sender<AppEvent>,
    pub(crate) events_rx: mpsc::Receiver<AppEvent>,
    // Activities
    pub(crate) snapshot: ActivitySnapshot,
    pub(crate) list: Vec<ListNode>,
    pub(crate) loading: bool,
    pub(crate) load_generation: u64,
    pub(crate) initial_load_started: bool,
    // Search
    pub(crate) search_query: String,
    pub(crate) debouncer: Debouncer,
    pub(crate) sequencer: SearchSequencer,
    // Last applied results, re-joined when the snapshot is reloaded
    pub(crate) search_results: Option<SearchResults>,
    // Signup form
    pub(crate) email: String,
    pub(crate) selected_activity: Option<String>,
    pub(crate) activity_options: Vec<String>,
    pub(crate) signup_in_flight: bool,
    pub(crate) remove_in_flight: bool,
    pub(crate) message: Option<StatusMessage>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    // Network work and debounce timers run here
    pub(crate) runtime: tokio::runtime::Runtime,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        ctx: egui::Context,
        api: ApiClient,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("activity-board-io")
            .enable_all()
            .build()?;
        let (events_tx, events_rx) = mpsc::channel();

        Ok(Self {
            api,
            ctx,
            events_tx,
            events_rx,
            snapshot: ActivitySnapshot::default(),
            list: view::render_loading(),
            loading: false,
            load_generation: 0,
            initial_load_started: false,
            search_query: String::new(),
            debouncer: Debouncer::new(runtime.handle().clone()),
            sequencer: SearchSequencer::default(),
            search_results: None,
            email: String::new(),
            selected_activity: None,
            activity_options: Vec::new(),
            signup_in_flight: false,
            remove_in_flight: false,
            message: None,
            window_pos: settings.window_x.zip(settings.window_y).map(|(x, y)| egui::pos2(x, y)),
            window_size: settings.window_w.zip(settings.window_h).map(|(w, h)| egui::vec2(w, h)),
            settings,
            data_dir,
            runtime,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }

    /// Run `task` on the runtime and deliver its event to the UI thread.
    pub(crate) fn spawn_task<F>(&self, task: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        let tx = self.events_tx.clone();
        let ctx = self.ctx.clone();
        self.runtime.spawn(async move {
            deliver(&tx, &ctx, task.await);
        });
    }
}

pub(crate) fn deliver(tx: &mpsc::Sender<AppEvent>, ctx: &egui::Context, event: AppEvent) {
    if tx.send(event).is_err() {
        debug!("UI closed, dropping event");
        return;
    }
    ctx.request_repaint();
}
