//! Contact list and contact detail.

use egui::{self, Align, Layout, RichText, ScrollArea};
use agenda_core::store::{Action, AppState, DeleteTarget};
use agenda_types::model::Contact;
use super::{avatar, list_header, ViewCommand};
use crate::theme::*;

pub fn contact_list(ui: &mut egui::Ui, state: &AppState) -> Option<ViewCommand> {
    let mut command = None;

    if list_header(ui, "Contacts", ACCENT_CONTACT, "Add new contact") {
        command = Some(Action::OpenNewContactModal.into());
    }

    ScrollArea::vertical()
        .id_salt("contact_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for contact in &state.contacts {
                let selected = state.selected_contact_id.as_deref() == Some(contact.id.as_str());
                if contact_row(ui, contact, selected) {
                    command = Some(Action::SelectContact(contact.id.clone()).into());
                }
                ui.add_space(4.0);
            }
        });

    command
}

fn contact_row(ui: &mut egui::Ui, contact: &Contact, selected: bool) -> bool {
    let fill = if selected {
        ACCENT_CONTACT.linear_multiply(0.3)
    } else {
        BG_SECONDARY
    };
    let response = egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                avatar(ui, contact, 40.0, ACCENT_CONTACT);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&contact.name).color(TEXT_PRIMARY).strong());
                    ui.label(RichText::new(&contact.title).color(TEXT_SECONDARY).small());
                });
            });
        })
        .response
        .interact(egui::Sense::click());
    response.clicked()
}

pub fn contact_detail(ui: &mut egui::Ui, contact: &Contact) -> Option<ViewCommand> {
    let mut command = None;

    ui.horizontal(|ui| {
        avatar(ui, contact, 72.0, ACCENT_CONTACT);
        ui.vertical(|ui| {
            ui.heading(RichText::new(&contact.name).color(TEXT_PRIMARY).strong().size(26.0));
            ui.label(
                RichText::new(format!("{} at {}", contact.title, contact.company))
                    .color(ACCENT_CONTACT),
            );
        });
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            if ui.button(RichText::new("Delete").color(DANGER)).clicked() {
                command = Some(Action::RequestDelete(DeleteTarget::Contact(contact.id.clone())).into());
            }
            if ui.button(RichText::new("Edit").color(ACCENT_CONTACT)).clicked() {
                command = Some(Action::OpenEditContactModal(contact.clone()).into());
            }
        });
    });

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(8.0);

    ui.label(RichText::new("Contact Information").color(TEXT_PRIMARY).strong());
    ui.add_space(4.0);
    egui::Grid::new("contact_info")
        .num_columns(2)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Email").color(TEXT_MUTED));
            ui.label(RichText::new(&contact.email).color(TEXT_SECONDARY));
            ui.end_row();
            ui.label(RichText::new("Phone").color(TEXT_MUTED));
            ui.label(RichText::new(&contact.phone).color(TEXT_SECONDARY));
            ui.end_row();
        });

    command
}
