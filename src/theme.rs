//! Centralized theme constants for Activity Board
//! Panels, cards and the signup message should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0xf5, 0xf7, 0xfa); // page
pub const BG_PANEL: Color32 = Color32::from_rgb(0xff, 0xff, 0xff); // right column
pub const BG_CARD: Color32 = Color32::from_rgb(0xf9, 0xfa, 0xfb);
pub const BG_INPUT: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
pub const BG_HEADER: Color32 = Color32::from_rgb(0x1a, 0x23, 0x7e); // indigo-900

// =============================================================================
// COLORS - Accent
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x3f, 0x51, 0xb5); // indigo-500

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37); // gray-800
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63); // gray-600
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80); // gray-500
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb); // gray-200
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb); // gray-300

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x2e, 0x7d, 0x32); // green-800
pub const STATUS_SUCCESS_BG: Color32 = Color32::from_rgb(0xe8, 0xf5, 0xe9);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xb4, 0x53, 0x09); // amber-700
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xc6, 0x28, 0x28); // red-800
pub const STATUS_ERROR_BG: Color32 = Color32::from_rgb(0xff, 0xeb, 0xee);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 20.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 12.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 340.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_theme(egui::Theme::Light);

    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = BG_BASE;
    visuals.extreme_bg_color = BG_INPUT;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = Color32::from_rgb(0xc5, 0xca, 0xe9); // indigo-100
    visuals.selection.stroke = egui::Stroke::new(STROKE_DEFAULT, ACCENT);
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);
    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        widget.corner_radius = RADIUS_DEFAULT.into();
    }
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(STROKE_DEFAULT, ACCENT);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_PANEL)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

pub fn header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_HEADER)
        .inner_margin(egui::Margin::symmetric(SPACING_XL as i8, SPACING_LG as i8))
}

pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_PANEL)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

/// Frame for the signup message, colored by outcome
pub fn message_frame(success: bool) -> egui::Frame {
    let (fill, stroke) = if success {
        (STATUS_SUCCESS_BG, STATUS_SUCCESS)
    } else {
        (STATUS_ERROR_BG, STATUS_ERROR)
    };
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, stroke))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(SPACING_LG as i8, SPACING_MD as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Plain outlined button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BG_PANEL)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent button for the primary action (Sign Up)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_ON_ACCENT))
        .fill(ACCENT)
        .corner_radius(RADIUS_DEFAULT)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Borderless icon button (participant removal)
pub fn icon_button(icon: &str, color: Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(icon.to_string()).size(FONT_BODY).color(color))
        .frame(false)
}

/// Availability color: red when over capacity, amber when full
pub fn spots_color(spots_left: i64) -> Color32 {
    match spots_left {
        n if n < 0 => STATUS_ERROR,
        0 => STATUS_WARNING,
        _ => STATUS_SUCCESS,
    }
}
