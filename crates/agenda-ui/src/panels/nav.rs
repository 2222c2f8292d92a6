//! View switcher.

use egui::{self, RichText};
use agenda_core::store::{Action, AppState};
use agenda_types::model::ViewType;
use super::ViewCommand;
use crate::theme::*;

pub fn nav_bar(ui: &mut egui::Ui, state: &AppState) -> Option<ViewCommand> {
    let mut command = None;
    ui.vertical(|ui| {
        for view in ViewType::all() {
            let active = state.active_view == *view;
            let text = RichText::new(view.label()).size(15.0).color(if active {
                accent_for(*view)
            } else {
                TEXT_SECONDARY
            });
            if ui.selectable_label(active, text).clicked() && !active {
                command = Some(Action::SetActiveView(*view).into());
            }
            ui.add_space(4.0);
        }
    });
    command
}
