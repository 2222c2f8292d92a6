//! Meeting list, meeting detail and the AI briefing card.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use agenda_core::store::{Action, AppState, DeleteTarget};
use agenda_types::briefing::Briefing;
use agenda_types::model::Meeting;
use super::{avatar, format_list_time, format_meeting_span, list_header, ViewCommand};
use crate::state::{BriefingPanel, ViewState};
use crate::theme::*;

pub const NO_ATTENDEES: &str = "No attendees assigned.";
pub const BRIEFING_UNAVAILABLE: &str = "Briefing unavailable: no API key was configured for this build.";

pub fn meeting_list(ui: &mut egui::Ui, state: &AppState) -> Option<ViewCommand> {
    let mut command = None;

    if list_header(ui, "Meetings", ACCENT_MEETING, "Add new meeting") {
        command = Some(Action::OpenNewMeetingModal.into());
    }

    ScrollArea::vertical()
        .id_salt("meeting_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for meeting in &state.meetings {
                let selected = state.selected_meeting_id.as_deref() == Some(meeting.id.as_str());
                if meeting_row(ui, meeting, selected) {
                    command = Some(Action::SelectMeeting(meeting.id.clone()).into());
                }
                ui.add_space(4.0);
            }
        });

    command
}

fn meeting_row(ui: &mut egui::Ui, meeting: &Meeting, selected: bool) -> bool {
    let fill = if selected {
        ACCENT_MEETING.linear_multiply(0.3)
    } else {
        BG_SECONDARY
    };
    egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&meeting.title).color(TEXT_PRIMARY).strong());
            ui.label(
                RichText::new(format_list_time(&meeting.time))
                    .color(TEXT_SECONDARY)
                    .small(),
            );
        })
        .response
        .interact(egui::Sense::click())
        .clicked()
}

pub fn meeting_detail(
    ui: &mut egui::Ui,
    state: &AppState,
    meeting: &Meeting,
    view: &ViewState,
) -> Option<ViewCommand> {
    let mut command = None;

    // Header
    ui.horizontal(|ui| {
        ui.heading(RichText::new(&meeting.title).color(TEXT_PRIMARY).strong().size(26.0));
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            if ui.button(RichText::new("Delete").color(DANGER)).clicked() {
                command = Some(Action::RequestDelete(DeleteTarget::Meeting(meeting.id.clone())).into());
            }
            if ui.button(RichText::new("Edit").color(ACCENT_MEETING)).clicked() {
                command = Some(Action::OpenEditMeetingModal(meeting.clone()).into());
            }
        });
    });
    ui.horizontal(|ui| {
        ui.label(RichText::new(format_meeting_span(meeting)).color(ACCENT_MEETING));
        if meeting.recurrence.is_repeating() {
            ui.separator();
            ui.label(RichText::new(meeting.recurrence.label()).color(ACCENT_MEETING));
        }
    });

    ui.add_space(8.0);

    ui.columns(2, |cols| {
        // Agenda and attendees
        card(&mut cols[0], |ui| {
            ui.label(RichText::new("Agenda").color(TEXT_PRIMARY).strong().size(16.0));
            ui.label(RichText::new(&meeting.agenda).color(TEXT_SECONDARY));
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Attendees").color(TEXT_PRIMARY).strong().size(16.0));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(RichText::new("Manage").color(ACCENT_MEETING)).clicked() {
                        command = Some(Action::OpenAttendeeModal(meeting.clone()).into());
                    }
                });
            });
            let attendees = state.attendees_of(meeting);
            if attendees.is_empty() {
                ui.label(RichText::new(NO_ATTENDEES).color(TEXT_MUTED));
            }
            for contact in attendees {
                ui.horizontal(|ui| {
                    avatar(ui, contact, 32.0, ACCENT_MEETING);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&contact.name).color(TEXT_PRIMARY));
                        ui.label(RichText::new(&contact.title).color(TEXT_SECONDARY).small());
                    });
                });
            }
        });

        // AI briefing
        card(&mut cols[1], |ui| {
            if let Some(cmd) = briefing_card(ui, meeting, &view.briefing, view.briefing_enabled) {
                command = Some(cmd);
            }
        });
    });

    command
}

fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

fn briefing_card(
    ui: &mut egui::Ui,
    meeting: &Meeting,
    panel: &BriefingPanel,
    enabled: bool,
) -> Option<ViewCommand> {
    let mut command = None;
    let loading = panel.is_loading();

    ui.horizontal(|ui| {
        ui.label(RichText::new("AI Briefing").color(ACCENT_MEETING).strong().size(16.0));
        if !enabled {
            return;
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let label = if loading { "Generating..." } else { "Generate" };
            let btn = ui.add_enabled(
                !loading,
                egui::Button::new(RichText::new(label).color(TEXT_PRIMARY).strong())
                    .fill(ACCENT_MEETING.linear_multiply(0.6))
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(100.0, 26.0)),
            );
            if btn.clicked() {
                command = Some(ViewCommand::GenerateBriefing(meeting.id.clone()));
            }
            if loading {
                ui.add(egui::Spinner::new());
            }
        });
    });
    ui.add_space(6.0);

    if !enabled {
        ui.label(RichText::new(BRIEFING_UNAVAILABLE).color(TEXT_MUTED).italics());
        return None;
    }

    ScrollArea::vertical()
        .id_salt("briefing")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if let Some(err) = panel.error() {
                ui.label(RichText::new(err).color(ERROR));
            }
            if let Some(briefing) = panel.briefing() {
                render_briefing(ui, briefing);
            }
        });

    command
}

fn render_briefing(ui: &mut egui::Ui, briefing: &Briefing) {
    ui.label(RichText::new("Summary").color(TEXT_PRIMARY).strong());
    ui.label(RichText::new(&briefing.summary).color(TEXT_SECONDARY));
    ui.add_space(8.0);

    ui.label(RichText::new("Attendee Insights").color(TEXT_PRIMARY).strong());
    for ab in &briefing.attendee_briefings {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(format!("• {}:", ab.name)).color(TEXT_PRIMARY).strong());
            ui.label(RichText::new(&ab.brief).color(TEXT_SECONDARY));
        });
    }
    ui.add_space(8.0);

    ui.label(RichText::new("Key Talking Points").color(TEXT_PRIMARY).strong());
    for point in &briefing.talking_points {
        ui.label(RichText::new(format!("• {}", point)).color(TEXT_SECONDARY));
    }
}
