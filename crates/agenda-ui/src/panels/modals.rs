//! Modal host. Exactly one blocking dialog per open `ModalState`.

use egui::{self, RichText, ScrollArea};
use agenda_core::store::{Action, AppState, DeleteTarget, ModalState};
use agenda_types::model::{Contact, Meeting, Recurrence};
use super::ViewCommand;
use crate::state::ViewState;
use crate::theme::*;

const MODAL_WIDTH: f32 = 420.0;

/// Render the open modal. The backdrop swallows clicks aimed at the panels
/// behind it; Escape or a click on the backdrop dismisses the dialog.
pub fn modal_host(ctx: &egui::Context, state: &AppState, view: &mut ViewState) -> Option<ViewCommand> {
    if !state.modal.is_open() {
        return None;
    }

    let response = egui::Modal::new(egui::Id::new("modal_host")).show(ctx, |ui| {
        ui.set_width(MODAL_WIDTH);
        ui.heading(RichText::new(state.modal.title()).color(TEXT_PRIMARY).strong());
        ui.add_space(8.0);
        match &state.modal {
            ModalState::None => None,
            ModalState::ContactForm(_) => contact_form(ui, view),
            ModalState::MeetingForm(_) => meeting_form(ui, &state.contacts, view),
            ModalState::AttendeeManager(meeting) => attendee_manager(ui, &state.contacts, meeting, view),
            ModalState::ConfirmDelete(target) => confirm_delete(ui, target),
        }
    });

    if response.inner.is_some() {
        return response.inner;
    }
    if response.should_close() {
        return dismiss_action(&state.modal).map(ViewCommand::from);
    }
    None
}

/// The action a plain dismissal maps to for each modal.
pub fn dismiss_action(modal: &ModalState) -> Option<Action> {
    match modal {
        ModalState::None => None,
        ModalState::ContactForm(_) => Some(Action::CloseContactModal),
        ModalState::MeetingForm(_) => Some(Action::CloseMeetingModal),
        ModalState::AttendeeManager(_) => Some(Action::CloseAttendeeModal),
        ModalState::ConfirmDelete(_) => Some(Action::CancelDelete),
    }
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
    ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY));
    ui.add_space(4.0);
}

fn form_error(ui: &mut egui::Ui, view: &ViewState) {
    if let Some(err) = &view.form_error {
        ui.label(RichText::new(err.to_string()).color(ERROR).small());
    }
}

/// Cancel / primary button row. Returns (cancel, primary).
fn button_row(ui: &mut egui::Ui, primary: &str, fill: egui::Color32) -> (bool, bool) {
    let mut cancel = false;
    let mut save = false;
    ui.add_space(8.0);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        save = ui
            .add(
                egui::Button::new(RichText::new(primary).color(TEXT_PRIMARY).strong())
                    .fill(fill)
                    .corner_radius(PANEL_ROUNDING),
            )
            .clicked();
        cancel = ui
            .add(egui::Button::new("Cancel").corner_radius(PANEL_ROUNDING))
            .clicked();
    });
    (cancel, save)
}

fn contact_form(ui: &mut egui::Ui, view: &mut ViewState) -> Option<ViewCommand> {
    let form = &mut view.contact_form;
    field(ui, "Full Name", &mut form.name);
    field(ui, "Title", &mut form.title);
    field(ui, "Company", &mut form.company);
    field(ui, "Email", &mut form.email);
    field(ui, "Phone", &mut form.phone);
    form_error(ui, view);

    let (cancel, save) = button_row(ui, "Save Contact", ACCENT_CONTACT);
    if cancel {
        return Some(Action::CloseContactModal.into());
    }
    if save {
        match view.contact_form.validate() {
            Ok(draft) => return Some(Action::SaveContact(draft).into()),
            Err(e) => view.form_error = Some(e),
        }
    }
    None
}

fn meeting_form(ui: &mut egui::Ui, contacts: &[Contact], view: &mut ViewState) -> Option<ViewCommand> {
    let form = &mut view.meeting_form;
    field(ui, "Title", &mut form.title);

    ui.columns(2, |cols| {
        cols[0].label(RichText::new("Date & Time").color(TEXT_SECONDARY).small());
        cols[0].add(egui::TextEdit::singleline(&mut form.time).hint_text("YYYY-MM-DDTHH:MM"));
        cols[1].label(RichText::new("Duration (minutes)").color(TEXT_SECONDARY).small());
        cols[1].add(egui::TextEdit::singleline(&mut form.duration));
    });
    ui.add_space(4.0);

    ui.label(RichText::new("Recurrence").color(TEXT_SECONDARY).small());
    egui::ComboBox::from_id_salt("meeting_recurrence")
        .selected_text(form.recurrence.label())
        .show_ui(ui, |ui| {
            for r in Recurrence::all() {
                ui.selectable_value(&mut form.recurrence, *r, r.label());
            }
        });
    ui.add_space(4.0);

    ui.label(RichText::new("Agenda").color(TEXT_SECONDARY).small());
    ui.add(egui::TextEdit::multiline(&mut form.agenda).desired_rows(3).desired_width(f32::INFINITY));
    ui.add_space(4.0);

    ui.label(RichText::new("Attendees").color(TEXT_SECONDARY).small());
    ScrollArea::vertical()
        .id_salt("meeting_form_attendees")
        .max_height(120.0)
        .show(ui, |ui| {
            for contact in contacts {
                let mut checked = form.attendees.contains(&contact.id);
                if ui.checkbox(&mut checked, contact.name.as_str()).changed() {
                    form.toggle_attendee(&contact.id);
                }
            }
        });
    form_error(ui, view);

    let (cancel, save) = button_row(ui, "Save Meeting", ACCENT_MEETING);
    if cancel {
        return Some(Action::CloseMeetingModal.into());
    }
    if save {
        match view.meeting_form.validate() {
            Ok(draft) => return Some(Action::SaveMeeting(draft).into()),
            Err(e) => view.form_error = Some(e),
        }
    }
    None
}

fn attendee_manager(
    ui: &mut egui::Ui,
    contacts: &[Contact],
    meeting: &Meeting,
    view: &mut ViewState,
) -> Option<ViewCommand> {
    let picker = &mut view.attendee_picker;
    ui.label(
        RichText::new(format!("Select contacts to invite to \"{}\".", meeting.title))
            .color(TEXT_SECONDARY),
    );
    ui.add_space(4.0);

    ScrollArea::vertical()
        .id_salt("attendee_picker")
        .max_height(260.0)
        .show(ui, |ui| {
            if contacts.is_empty() {
                ui.label(RichText::new("No contacts available to add.").color(TEXT_MUTED));
            }
            for contact in contacts {
                let mut checked = picker.is_selected(&contact.id);
                let text = format!("{}  ·  {}", contact.name, contact.title);
                if ui.checkbox(&mut checked, text).changed() {
                    picker.toggle(&contact.id);
                }
            }
        });

    let (cancel, save) = button_row(ui, "Update Attendees", ACCENT_MEETING);
    if cancel {
        return Some(Action::CloseAttendeeModal.into());
    }
    if save {
        return Some(
            Action::UpdateAttendees {
                meeting_id: meeting.id.clone(),
                attendee_ids: picker.selected.clone(),
            }
            .into(),
        );
    }
    None
}

fn confirm_delete(ui: &mut egui::Ui, target: &DeleteTarget) -> Option<ViewCommand> {
    ui.label(RichText::new(target.confirmation_message()).color(TEXT_PRIMARY));
    let (cancel, confirm) = button_row(ui, "Delete", DANGER);
    if cancel {
        return Some(Action::CancelDelete.into());
    }
    if confirm {
        return Some(Action::ConfirmDelete.into());
    }
    None
}
