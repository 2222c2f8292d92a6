//! Rendering surfaces. Each takes the store snapshot by shared reference and
//! returns at most one `ViewCommand` for the frame.

pub mod nav;
pub mod contacts;
pub mod meetings;
pub mod modals;

use chrono::{DateTime, Local, Utc};
use egui::{self, Color32, RichText, Sense, Vec2};
use agenda_core::store::{Action, AppState};
use agenda_types::model::{Contact, EntityId, Meeting};
use crate::state::ViewState;
use crate::theme::*;

/// The single effect a UI event may have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Apply one store action
    Dispatch(Action),
    /// Ask the briefing generator about a meeting
    GenerateBriefing(EntityId),
}

impl From<Action> for ViewCommand {
    fn from(action: Action) -> Self {
        ViewCommand::Dispatch(action)
    }
}

/// Pick the frame's single command. While a modal is open only the modal
/// may act; anything the panels behind it reported is dropped.
pub fn frame_command(
    state: &AppState,
    background: Option<ViewCommand>,
    modal: Option<ViewCommand>,
) -> Option<ViewCommand> {
    if state.modal.is_open() {
        modal
    } else {
        background
    }
}

pub const DETAIL_PLACEHOLDER: &str = "Select an item to see details";

/// Detail pane: whichever entity is selected for the active view, or a prompt.
pub fn detail_panel(ui: &mut egui::Ui, state: &AppState, view: &ViewState) -> Option<ViewCommand> {
    if let Some(contact) = state.selected_contact() {
        return contacts::contact_detail(ui, contact);
    }
    if let Some(meeting) = state.selected_meeting() {
        return meetings::meeting_detail(ui, state, meeting, view);
    }
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(DETAIL_PLACEHOLDER).color(TEXT_SECONDARY).size(16.0));
    });
    None
}

/// "Monday 3:05 PM"
pub fn format_list_time(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%A %-I:%M %p").to_string()
}

/// "3:05 PM"
pub fn format_clock_time(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%-I:%M %p").to_string()
}

/// "Monday, June 15, 2026 at 3:05 PM until 4:05 PM (60 min)"
pub fn format_meeting_span(meeting: &Meeting) -> String {
    format!(
        "{} until {} ({} min)",
        format_detail_time(&meeting.time),
        format_clock_time(&meeting.ends_at()),
        meeting.duration
    )
}

/// "Monday, March 4, 2024 at 3:05 PM"
pub fn format_detail_time(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local)
        .format("%A, %B %-d, %Y at %-I:%M %p")
        .to_string()
}

/// Round initials badge standing in for the avatar image.
///
/// `avatar_url` points at a remote picture; showing it would need an image
/// loader plus network fetches inside the canvas, which this build does not
/// install, so the badge carries the contact's initials and the URL is shown
/// on hover.
pub(crate) fn avatar(ui: &mut egui::Ui, contact: &Contact, diameter: f32, ring: Color32) {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::hover());
    response.on_hover_text(&contact.avatar_url);
    let painter = ui.painter();
    painter.circle_filled(rect.center(), diameter / 2.0, BG_SURFACE);
    painter.circle_stroke(rect.center(), diameter / 2.0, egui::Stroke::new(2.0, ring));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        contact.initials(),
        egui::FontId::proportional(diameter * 0.4),
        TEXT_PRIMARY,
    );
}

/// Header row shared by both list panes.
pub(crate) fn list_header(ui: &mut egui::Ui, title: &str, accent: Color32, add_hint: &str) -> bool {
    let mut add = false;
    ui.horizontal(|ui| {
        ui.heading(RichText::new(title).color(accent).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            add = ui
                .add(
                    egui::Button::new(RichText::new("+").color(accent).strong())
                        .fill(accent.linear_multiply(0.2))
                        .corner_radius(PANEL_ROUNDING),
                )
                .on_hover_text(add_hint)
                .clicked();
        });
    });
    ui.separator();
    add
}
