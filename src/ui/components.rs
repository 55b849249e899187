//! Reusable UI components
//!
//! Paints the view tree from `view` and the signup status message.

use crate::theme;
use crate::types::{MessageKind, StatusMessage};
use crate::view::{ActivityCard, ListNode};
use eframe::egui;

/// A participant the user asked to remove: (activity, email)
pub type RemoveRequest = (String, String);

/// Paint the activities list. Returns a removal request if one was clicked.
/// Remove buttons are disabled unless `can_remove`.
pub fn render_list(ui: &mut egui::Ui, nodes: &[ListNode], can_remove: bool) -> Option<RemoveRequest> {
    let mut remove = None;
    for node in nodes {
        match node {
            ListNode::Card(card) => {
                if let Some(email) = activity_card(ui, card, can_remove) {
                    remove = Some((card.name.clone(), email));
                }
            }
            ListNode::ParticipantResults { heading, emails } => participant_results(ui, heading, emails),
            ListNode::Notice(text) => notice(ui, text),
        }
        ui.add_space(theme::SPACING_MD);
    }
    remove
}

/// Returns the email whose remove button was clicked
pub fn activity_card(ui: &mut egui::Ui, card: &ActivityCard, can_remove: bool) -> Option<String> {
    theme::card_frame()
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(&card.name)
                    .size(theme::FONT_HEADING)
                    .strong(),
            );
            ui.label(egui::RichText::new(&card.description).color(theme::TEXT_SECONDARY));
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new("Schedule:").strong());
                ui.label(&card.schedule);
            });
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Availability:").strong());
                ui.label(
                    egui::RichText::new(card.availability_text())
                        .color(theme::spots_color(card.spots_left)),
                );
            });

            if card.participants.is_empty() {
                return None;
            }
            ui.add_space(theme::SPACING_SM);
            ui.label(egui::RichText::new("Participants:").strong());
            let mut removed = None;
            for email in &card.participants {
                ui.horizontal(|ui| {
                    ui.label(format!("•  {email}"));
                    let clicked = ui
                        .add_enabled(can_remove, theme::icon_button(egui_phosphor::regular::TRASH, theme::TEXT_MUTED))
                        .on_hover_text("Remove participant")
                        .clicked();
                    if clicked {
                        removed = Some(email.clone());
                    }
                });
            }
            removed
        })
        .inner
}

pub fn participant_results(ui: &mut egui::Ui, heading: &str, emails: &[String]) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(heading).size(theme::FONT_HEADING).strong());
        for email in emails {
            ui.label(format!("•  {email}"));
        }
    });
}

pub fn notice(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).color(theme::TEXT_MUTED));
}

pub fn message_box(ui: &mut egui::Ui, message: &StatusMessage) {
    let success = message.kind == MessageKind::Success;
    let (icon, color) = if success {
        (egui_phosphor::regular::CHECK_CIRCLE, theme::STATUS_SUCCESS)
    } else {
        (egui_phosphor::regular::WARNING_CIRCLE, theme::STATUS_ERROR)
    };
    theme::message_frame(success).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(icon).color(color));
            ui.label(egui::RichText::new(&message.text).color(color));
        });
    });
}
