//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(31, 41, 55);
pub const BG_SURFACE: Color32 = Color32::from_rgb(55, 65, 81);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(229, 231, 235);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(156, 163, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
/// Contacts side
pub const ACCENT_CONTACT: Color32 = Color32::from_rgb(168, 85, 247);
/// Meetings side and the briefing card
pub const ACCENT_MEETING: Color32 = Color32::from_rgb(34, 211, 238);
pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

pub fn accent_for(view: agenda_types::model::ViewType) -> Color32 {
    match view {
        agenda_types::model::ViewType::Contacts => ACCENT_CONTACT,
        agenda_types::model::ViewType::Meetings => ACCENT_MEETING,
    }
}

/// Apply the dark theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SURFACE;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT_MEETING;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT_MEETING.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT_MEETING);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
