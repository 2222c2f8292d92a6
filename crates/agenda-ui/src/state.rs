//! View-local state that drives rendering.
//! Store state is never copied in here; this only holds what the views own
//! themselves: editor drafts and the briefing card, re-synced from each
//! snapshot and updated by draining the EventBus.

use agenda_core::store::{AppState, ModalState};
use agenda_types::briefing::Briefing;
use agenda_types::event::{BriefingEvent, BriefingTicket};
use agenda_types::model::EntityId;
use crate::forms::{AttendeePicker, ContactForm, FormError, MeetingForm};

/// State visible to UI panels
#[derive(Debug, Default)]
pub struct ViewState {
    pub contact_form: ContactForm,
    pub meeting_form: MeetingForm,
    pub attendee_picker: AttendeePicker,
    pub briefing: BriefingPanel,
    /// Inline validation message for the open editor
    pub form_error: Option<FormError>,
    /// Whether a briefing generator was configured at startup
    pub briefing_enabled: bool,
    synced_modal: ModalState,
    synced_revision: Option<u64>,
}

impl ViewState {
    pub fn new(briefing_enabled: bool) -> Self {
        Self {
            briefing_enabled,
            ..Self::default()
        }
    }

    /// Re-derive view-local state from the latest snapshot.
    /// Cheap when nothing changed since the last call.
    pub fn sync(&mut self, state: &AppState, revision: u64) {
        if self.synced_revision == Some(revision) {
            return;
        }
        self.synced_revision = Some(revision);

        let displayed = state.selected_meeting().map(|m| m.id.clone());
        if displayed != self.briefing.meeting_id {
            self.briefing.reset_for(displayed);
        }

        if state.modal != self.synced_modal {
            self.form_error = None;
            match &state.modal {
                ModalState::ContactForm(contact) => self.contact_form.load(contact.as_ref()),
                ModalState::MeetingForm(meeting) => self.meeting_form.load(meeting.as_ref()),
                ModalState::AttendeeManager(meeting) => self.attendee_picker.load(meeting),
                ModalState::ConfirmDelete(_) | ModalState::None => {}
            }
            self.synced_modal = state.modal.clone();
        }
    }

    /// Process events from the EventBus and update the briefing card
    pub fn process_events(&mut self, events: Vec<BriefingEvent>) {
        for event in events {
            if !self.briefing.apply(&event) {
                log::debug!("Discarding stale briefing event for ticket #{}", event.ticket().id);
            }
        }
    }
}

// ─── Briefing card ───────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BriefingStatus {
    #[default]
    Idle,
    Loading(BriefingTicket),
    Ready(Briefing),
    Failed(String),
}

/// Briefing state for the meeting currently on screen.
#[derive(Debug, Default)]
pub struct BriefingPanel {
    pub meeting_id: Option<EntityId>,
    pub status: BriefingStatus,
    next_ticket: u64,
}

impl BriefingPanel {
    /// Point the card at another meeting (or none), dropping any result
    /// or pending request for the previous one.
    pub fn reset_for(&mut self, meeting_id: Option<EntityId>) {
        self.meeting_id = meeting_id;
        self.status = BriefingStatus::Idle;
    }

    /// Start a new attempt. Any earlier in-flight ticket becomes stale.
    pub fn begin(&mut self, meeting_id: &str) -> BriefingTicket {
        self.next_ticket += 1;
        let ticket = BriefingTicket {
            id: self.next_ticket,
            meeting_id: meeting_id.to_string(),
        };
        self.meeting_id = Some(meeting_id.to_string());
        self.status = BriefingStatus::Loading(ticket.clone());
        ticket
    }

    /// Apply a generation event. Returns false if it belongs to an
    /// attempt that is no longer the one in flight.
    pub fn apply(&mut self, event: &BriefingEvent) -> bool {
        let current = match &self.status {
            BriefingStatus::Loading(ticket) => ticket,
            _ => return false,
        };
        if current != event.ticket() || self.meeting_id.as_ref() != Some(&current.meeting_id) {
            return false;
        }
        match event {
            BriefingEvent::Started { .. } => {}
            BriefingEvent::Finished { briefing, .. } => {
                self.status = BriefingStatus::Ready(briefing.clone());
            }
            BriefingEvent::Failed { message, .. } => {
                self.status = BriefingStatus::Failed(message.clone());
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, BriefingStatus::Loading(_))
    }

    pub fn briefing(&self) -> Option<&Briefing> {
        match &self.status {
            BriefingStatus::Ready(b) => Some(b),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            BriefingStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
