#![windows_subsystem = "windows"]
//! Activity Board - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod debounce;
mod error;
mod query;
mod settings;
mod theme;
mod types;
mod ui;
mod view;

use api::ApiClient;
use app::App;
use constants::*;
use eframe::egui;
use std::time::Instant;
use tracing::{error, info};
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "activity-board.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,activity_board=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = settings::data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Activity Board starting");

    let settings = settings::Settings::load(&data_dir);
    let api = match ApiClient::new(&settings.base_url) {
        Ok(api) => {
            info!(url = %api.base_url(), "Backend configured");
            api
        }
        Err(e) => {
            error!(error = %e, "Invalid backend configuration");
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(
            settings
                .window_w
                .zip(settings.window_h)
                .map(|(w, h)| egui::vec2(w, h))
                .unwrap_or(egui::vec2(1100.0, 760.0)),
        )
        .with_min_inner_size([760.0, 520.0])
        .with_title(APP_NAME);
    if let Some((x, y)) = settings.window_x.zip(settings.window_y) {
        viewport = viewport.with_position(egui::pos2(x, y));
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            theme::apply_visuals(&cc.egui_ctx);

            let app = App::new(cc.egui_ctx.clone(), api, settings, data_dir).map_err(|e| {
                error!(error = %e, "Failed to start async runtime");
                e
            })?;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        self.poll_events();

        if !self.initial_load_started {
            self.initial_load_started = true;
            self.load_activities();
        }

        egui::TopBottomPanel::top("header")
            .frame(theme::header_frame())
            .show(ctx, |ui| self.render_header(ui));

        // Right column: search stacked above the signup form
        egui::SidePanel::right("search_and_registration")
            .resizable(false)
            .exact_width(theme::SIDEBAR_WIDTH)
            .frame(theme::sidebar_frame())
            .show(ctx, |ui| {
                self.render_search_box(ui);
                ui.add_space(theme::SPACING_XL);
                self.render_signup_form(ui);
            });

        // Left column: activities list
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Available Activities")
                    .size(theme::FONT_TITLE)
                    .strong(),
            );
            ui.add_space(theme::SPACING_MD);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let can_remove = !self.remove_in_flight;
                    if let Some((activity, email)) = components::render_list(ui, &self.list, can_remove) {
                        self.remove_participant(activity, email);
                    }
                });
        });

        // Wake up again when the message is due to hide
        if let Some(msg) = self.visible_message(Instant::now()) {
            ctx.request_repaint_after(msg.remaining(Instant::now()));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

impl App {
    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Mergington High School")
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_ON_ACCENT),
            );
            ui.label(
                egui::RichText::new("Extracurricular Activities")
                    .size(theme::FONT_BODY)
                    .color(theme::BG_BASE),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = format!("{}  Reload", egui_phosphor::regular::ARROW_CLOCKWISE);
                if ui.add_enabled(!self.loading, theme::button(label)).clicked() {
                    self.load_activities();
                }
                if self.loading {
                    ui.spinner();
                }
            });
        });
    }

    fn render_search_box(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Search").size(theme::FONT_HEADING).strong());
        ui.add_space(theme::SPACING_SM);

        let mut changed = false;
        egui::Frame::new()
            .fill(theme::BG_INPUT)
            .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT))
            .corner_radius(theme::RADIUS_DEFAULT)
            .inner_margin(egui::Margin::symmetric(8, 6))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                            .color(theme::TEXT_MUTED),
                    );
                    let clear_width = if self.search_query.is_empty() { 0.0 } else { 20.0 };
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.search_query)
                            .id(ui.make_persistent_id("activity_search"))
                            .hint_text("Search activities or participants...")
                            .frame(false)
                            .desired_width(ui.available_width() - clear_width),
                    );
                    changed |= response.changed();
                    if !self.search_query.is_empty()
                        && ui
                            .add(theme::icon_button(egui_phosphor::regular::X, theme::TEXT_MUTED))
                            .on_hover_text("Clear search")
                            .clicked()
                    {
                        self.search_query.clear();
                        changed = true;
                    }
                });
            });
        if changed {
            self.on_search_changed();
        }
        ui.label(
            egui::RichText::new(format!("Type at least {MIN_QUERY_LEN} characters"))
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_MUTED),
        );
    }

    fn render_signup_form(&mut self, ui: &mut egui::Ui) {
        theme::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Sign Up for an Activity").size(theme::FONT_HEADING).strong());
            ui.add_space(theme::SPACING_MD);

            ui.label("Student Email:");
            let email_response = ui.add(
                egui::TextEdit::singleline(&mut self.email)
                    .hint_text("your-email@mergington.edu")
                    .desired_width(f32::INFINITY),
            );
            let enter_pressed =
                email_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(theme::SPACING_SM);
            ui.label("Activity:");
            egui::ComboBox::from_id_salt("activity")
                .width(ui.available_width())
                .selected_text(
                    self.selected_activity
                        .as_deref()
                        .unwrap_or("-- Select an activity --"),
                )
                .show_ui(ui, |ui| {
                    for name in &self.activity_options {
                        ui.selectable_value(&mut self.selected_activity, Some(name.clone()), name.as_str());
                    }
                });

            ui.add_space(theme::SPACING_LG);
            let label = format!("{}  Sign Up", egui_phosphor::regular::USER_PLUS);
            let clicked = ui
                .add_enabled(self.can_submit(), theme::button_accent(label))
                .clicked();
            if clicked || (enter_pressed && self.can_submit()) {
                self.submit_signup();
            }
            if self.signup_in_flight {
                ui.spinner();
            }
        });

        if let Some(msg) = self.visible_message(Instant::now()) {
            ui.add_space(theme::SPACING_MD);
            components::message_box(ui, msg);
        }
    }
}
