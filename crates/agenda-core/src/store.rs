//! Application store: the single writer of contact, meeting and navigation state.
//!
//! Views read an `AppState` snapshot and hand back at most one `Action` per
//! event. `AppStore::dispatch` applies the action to a copy of the snapshot
//! and swaps it in only when the whole action succeeded, so no action can
//! leave the state half-updated. Each successful write bumps `revision`.

use chrono::{DateTime, Utc};
use agenda_types::{
    Result,
    model::{Contact, ContactDraft, EntityId, Meeting, MeetingDraft, ViewType},
};
use crate::normalize::{dedup_ids, parse_duration_minutes, parse_meeting_time};
use crate::seed::{seed_contacts, seed_meetings};

// ─── State ───────────────────────────────────────────────────

/// Which modal is open, and what it was opened with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    None,
    /// `None` payload means "create"
    ContactForm(Option<Contact>),
    /// `None` payload means "create"
    MeetingForm(Option<Meeting>),
    AttendeeManager(Meeting),
    ConfirmDelete(DeleteTarget),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::None)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModalState::None => "",
            ModalState::ContactForm(None) => "Add Contact",
            ModalState::ContactForm(Some(_)) => "Edit Contact",
            ModalState::MeetingForm(None) => "Add Meeting",
            ModalState::MeetingForm(Some(_)) => "Edit Meeting",
            ModalState::AttendeeManager(_) => "Manage Attendees",
            ModalState::ConfirmDelete(_) => "Confirm Delete",
        }
    }
}

/// Entity awaiting delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Contact(EntityId),
    Meeting(EntityId),
}

impl DeleteTarget {
    pub fn confirmation_message(&self) -> &'static str {
        match self {
            DeleteTarget::Contact(_) => {
                "Are you sure you want to delete this contact? They will be removed from all meetings."
            }
            DeleteTarget::Meeting(_) => "Are you sure you want to delete this meeting?",
        }
    }
}

/// A full snapshot of application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub contacts: Vec<Contact>,
    pub meetings: Vec<Meeting>,
    pub active_view: ViewType,
    pub selected_contact_id: Option<EntityId>,
    pub selected_meeting_id: Option<EntityId>,
    pub modal: ModalState,
}

impl AppState {
    /// Sample data with the first contact selected.
    pub fn seeded_at(now: DateTime<Utc>) -> Self {
        let contacts = seed_contacts();
        let selected_contact_id = contacts.first().map(|c| c.id.clone());
        Self {
            contacts,
            meetings: seed_meetings(now),
            active_view: ViewType::Contacts,
            selected_contact_id,
            selected_meeting_id: None,
            modal: ModalState::None,
        }
    }

    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn meeting(&self, id: &str) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.id == id)
    }

    /// The selected contact, if the contacts view is active and it still exists.
    pub fn selected_contact(&self) -> Option<&Contact> {
        if self.active_view != ViewType::Contacts {
            return None;
        }
        self.selected_contact_id.as_deref().and_then(|id| self.contact(id))
    }

    /// The selected meeting, if the meetings view is active and it still exists.
    pub fn selected_meeting(&self) -> Option<&Meeting> {
        if self.active_view != ViewType::Meetings {
            return None;
        }
        self.selected_meeting_id.as_deref().and_then(|id| self.meeting(id))
    }

    /// Live contacts attending `meeting`, in attendee order. Dangling ids are skipped.
    pub fn attendees_of(&self, meeting: &Meeting) -> Vec<&Contact> {
        meeting
            .attendees
            .iter()
            .filter_map(|id| self.contact(id))
            .collect()
    }

    /// First violated structural invariant, if any.
    pub fn invariant_violation(&self) -> Option<&'static str> {
        if self.selected_contact_id.is_some() && self.selected_meeting_id.is_some() {
            return Some("both a contact and a meeting are selected");
        }
        if self.selected_contact_id.is_some() && self.active_view != ViewType::Contacts {
            return Some("contact selected outside the contacts view");
        }
        if self.selected_meeting_id.is_some() && self.active_view != ViewType::Meetings {
            return Some("meeting selected outside the meetings view");
        }
        let mut ids: Vec<&str> = self.contacts.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        if ids.windows(2).any(|w| w[0] == w[1]) {
            return Some("duplicate contact id");
        }
        let mut ids: Vec<&str> = self.meetings.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        if ids.windows(2).any(|w| w[0] == w[1]) {
            return Some("duplicate meeting id");
        }
        None
    }
}

// ─── Actions ─────────────────────────────────────────────────

/// Every legal state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetActiveView(ViewType),
    SelectContact(EntityId),
    SelectMeeting(EntityId),

    OpenNewContactModal,
    OpenEditContactModal(Contact),
    SaveContact(ContactDraft),
    CloseContactModal,

    OpenNewMeetingModal,
    OpenEditMeetingModal(Meeting),
    SaveMeeting(MeetingDraft),
    CloseMeetingModal,

    OpenAttendeeModal(Meeting),
    UpdateAttendees {
        meeting_id: EntityId,
        attendee_ids: Vec<EntityId>,
    },
    CloseAttendeeModal,

    RequestDelete(DeleteTarget),
    ConfirmDelete,
    CancelDelete,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetActiveView(_) => "set_active_view",
            Action::SelectContact(_) => "select_contact",
            Action::SelectMeeting(_) => "select_meeting",
            Action::OpenNewContactModal => "open_new_contact_modal",
            Action::OpenEditContactModal(_) => "open_edit_contact_modal",
            Action::SaveContact(_) => "save_contact",
            Action::CloseContactModal => "close_contact_modal",
            Action::OpenNewMeetingModal => "open_new_meeting_modal",
            Action::OpenEditMeetingModal(_) => "open_edit_meeting_modal",
            Action::SaveMeeting(_) => "save_meeting",
            Action::CloseMeetingModal => "close_meeting_modal",
            Action::OpenAttendeeModal(_) => "open_attendee_modal",
            Action::UpdateAttendees { .. } => "update_attendees",
            Action::CloseAttendeeModal => "close_attendee_modal",
            Action::RequestDelete(_) => "request_delete",
            Action::ConfirmDelete => "confirm_delete",
            Action::CancelDelete => "cancel_delete",
        }
    }
}

// ─── Store ───────────────────────────────────────────────────

/// Owner of the current snapshot. Held by the composition root and lent to views.
pub struct AppStore {
    state: AppState,
    revision: u64,
}

impl AppStore {
    pub fn new(state: AppState) -> Self {
        Self { state, revision: 0 }
    }

    /// Store pre-seeded with sample data scheduled relative to the current time.
    pub fn seeded() -> Self {
        Self::new(AppState::seeded_at(Utc::now()))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of writes so far. Changes exactly when the snapshot changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply one action atomically. Returns whether the snapshot changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let name = action.name();
        let mut next = self.state.clone();
        if let Err(e) = apply(&mut next, action) {
            log::warn!("{} rejected: {}", name, e);
            return false;
        }
        debug_assert!(
            next.invariant_violation().is_none(),
            "{} broke an invariant: {:?}",
            name,
            next.invariant_violation()
        );
        if next == self.state {
            log::debug!("{}: no change", name);
            return false;
        }
        self.state = next;
        self.revision += 1;
        log::debug!("{}: revision {}", name, self.revision);
        true
    }

    pub fn set_active_view(&mut self, view: ViewType) -> bool {
        self.dispatch(Action::SetActiveView(view))
    }

    pub fn select_contact(&mut self, id: impl Into<EntityId>) -> bool {
        self.dispatch(Action::SelectContact(id.into()))
    }

    pub fn select_meeting(&mut self, id: impl Into<EntityId>) -> bool {
        self.dispatch(Action::SelectMeeting(id.into()))
    }

    pub fn open_new_contact_modal(&mut self) -> bool {
        self.dispatch(Action::OpenNewContactModal)
    }

    pub fn open_edit_contact_modal(&mut self, contact: Contact) -> bool {
        self.dispatch(Action::OpenEditContactModal(contact))
    }

    pub fn save_contact(&mut self, draft: ContactDraft) -> bool {
        self.dispatch(Action::SaveContact(draft))
    }

    pub fn close_contact_modal(&mut self) -> bool {
        self.dispatch(Action::CloseContactModal)
    }

    pub fn open_new_meeting_modal(&mut self) -> bool {
        self.dispatch(Action::OpenNewMeetingModal)
    }

    pub fn open_edit_meeting_modal(&mut self, meeting: Meeting) -> bool {
        self.dispatch(Action::OpenEditMeetingModal(meeting))
    }

    pub fn save_meeting(&mut self, draft: MeetingDraft) -> bool {
        self.dispatch(Action::SaveMeeting(draft))
    }

    pub fn close_meeting_modal(&mut self) -> bool {
        self.dispatch(Action::CloseMeetingModal)
    }

    pub fn open_attendee_modal(&mut self, meeting: Meeting) -> bool {
        self.dispatch(Action::OpenAttendeeModal(meeting))
    }

    pub fn update_attendees(&mut self, meeting_id: impl Into<EntityId>, attendee_ids: Vec<EntityId>) -> bool {
        self.dispatch(Action::UpdateAttendees {
            meeting_id: meeting_id.into(),
            attendee_ids,
        })
    }

    pub fn close_attendee_modal(&mut self) -> bool {
        self.dispatch(Action::CloseAttendeeModal)
    }

    pub fn request_delete(&mut self, target: DeleteTarget) -> bool {
        self.dispatch(Action::RequestDelete(target))
    }

    pub fn confirm_delete(&mut self) -> bool {
        self.dispatch(Action::ConfirmDelete)
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.dispatch(Action::CancelDelete)
    }

    /// Remove a contact and strip it from every meeting. Bypasses confirmation.
    pub fn delete_contact(&mut self, id: &str) -> bool {
        let mut next = self.state.clone();
        delete_contact(&mut next, id);
        self.commit(next, "delete_contact")
    }

    /// Remove a meeting. Bypasses confirmation.
    pub fn delete_meeting(&mut self, id: &str) -> bool {
        let mut next = self.state.clone();
        delete_meeting(&mut next, id);
        self.commit(next, "delete_meeting")
    }

    fn commit(&mut self, next: AppState, name: &str) -> bool {
        if next == self.state {
            log::debug!("{}: no change", name);
            return false;
        }
        self.state = next;
        self.revision += 1;
        log::debug!("{}: revision {}", name, self.revision);
        true
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::seeded()
    }
}

// ─── Transitions ─────────────────────────────────────────────

fn apply(state: &mut AppState, action: Action) -> Result<()> {
    match action {
        Action::SetActiveView(view) => {
            if state.active_view != view {
                state.active_view = view;
                state.selected_contact_id = None;
                state.selected_meeting_id = None;
            }
        }
        Action::SelectContact(id) => select_contact(state, id),
        Action::SelectMeeting(id) => select_meeting(state, id),

        Action::OpenNewContactModal => state.modal = ModalState::ContactForm(None),
        Action::OpenEditContactModal(contact) => {
            state.modal = ModalState::ContactForm(Some(contact));
        }
        Action::SaveContact(draft) => save_contact(state, draft),

        Action::OpenNewMeetingModal => state.modal = ModalState::MeetingForm(None),
        Action::OpenEditMeetingModal(meeting) => {
            state.modal = ModalState::MeetingForm(Some(meeting));
        }
        Action::SaveMeeting(draft) => save_meeting(state, draft)?,

        Action::OpenAttendeeModal(meeting) => {
            state.modal = ModalState::AttendeeManager(meeting);
        }
        Action::UpdateAttendees { meeting_id, attendee_ids } => {
            match state.meetings.iter_mut().find(|m| m.id == meeting_id) {
                Some(meeting) => meeting.attendees = dedup_ids(attendee_ids),
                None => log::debug!("update_attendees: unknown meeting {}", meeting_id),
            }
            state.modal = ModalState::None;
        }

        Action::RequestDelete(target) => {
            let exists = match &target {
                DeleteTarget::Contact(id) => state.contact(id).is_some(),
                DeleteTarget::Meeting(id) => state.meeting(id).is_some(),
            };
            if exists {
                state.modal = ModalState::ConfirmDelete(target);
            } else {
                log::debug!("request_delete: {:?} does not exist", target);
            }
        }
        Action::ConfirmDelete => match state.modal.clone() {
            ModalState::ConfirmDelete(target) => {
                state.modal = ModalState::None;
                match target {
                    DeleteTarget::Contact(id) => delete_contact(state, &id),
                    DeleteTarget::Meeting(id) => delete_meeting(state, &id),
                }
            }
            _ => log::debug!("confirm_delete: nothing pending"),
        },

        Action::CloseContactModal
        | Action::CloseMeetingModal
        | Action::CloseAttendeeModal
        | Action::CancelDelete => state.modal = ModalState::None,
    }
    Ok(())
}

/// Unknown ids are still selected; they resolve to no detail at render time.
fn select_contact(state: &mut AppState, id: EntityId) {
    if state.contact(&id).is_none() {
        log::debug!("select_contact: unknown contact {}", id);
    }
    state.selected_contact_id = Some(id);
    state.selected_meeting_id = None;
    state.active_view = ViewType::Contacts;
}

fn select_meeting(state: &mut AppState, id: EntityId) {
    if state.meeting(&id).is_none() {
        log::debug!("select_meeting: unknown meeting {}", id);
    }
    state.selected_meeting_id = Some(id);
    state.selected_contact_id = None;
    state.active_view = ViewType::Meetings;
}

fn save_contact(state: &mut AppState, draft: ContactDraft) {
    let ContactDraft { id, name, title, company, email, phone } = draft;
    match id {
        Some(id) => match state.contacts.iter_mut().find(|c| c.id == id) {
            Some(contact) => {
                contact.name = name;
                contact.title = title;
                contact.company = company;
                contact.email = email;
                contact.phone = phone;
            }
            None => log::debug!("save_contact: unknown contact {}, ignoring", id),
        },
        None => {
            let id = fresh_id(|candidate| state.contact(candidate).is_some());
            state.contacts.push(Contact {
                id: id.clone(),
                name,
                title,
                company,
                avatar_url: Contact::avatar_url_for(&uuid::Uuid::new_v4().to_string()),
                email,
                phone,
            });
            select_contact(state, id);
        }
    }
    state.modal = ModalState::None;
}

fn save_meeting(state: &mut AppState, draft: MeetingDraft) -> Result<()> {
    let time = parse_meeting_time(&draft.time)?;
    let duration = parse_duration_minutes(&draft.duration)?;
    let attendees = dedup_ids(draft.attendees);

    match draft.id {
        Some(id) => match state.meetings.iter_mut().find(|m| m.id == id) {
            Some(meeting) => {
                meeting.title = draft.title;
                meeting.time = time;
                meeting.duration = duration;
                meeting.agenda = draft.agenda;
                meeting.attendees = attendees;
                if let Some(recurrence) = draft.recurrence {
                    meeting.recurrence = recurrence;
                }
            }
            None => log::debug!("save_meeting: unknown meeting {}, ignoring", id),
        },
        None => {
            let id = fresh_id(|candidate| state.meeting(candidate).is_some());
            state.meetings.push(Meeting {
                id: id.clone(),
                title: draft.title,
                time,
                duration,
                attendees,
                agenda: draft.agenda,
                recurrence: draft.recurrence.unwrap_or_default(),
            });
            select_meeting(state, id);
        }
    }
    state.modal = ModalState::None;
    Ok(())
}

fn delete_contact(state: &mut AppState, id: &str) {
    state.contacts.retain(|c| c.id != id);
    for meeting in state.meetings.iter_mut().filter(|m| m.has_attendee(id)) {
        meeting.attendees.retain(|a| a != id);
    }
    if state.selected_contact_id.as_deref() == Some(id) {
        state.selected_contact_id = None;
    }
}

fn delete_meeting(state: &mut AppState, id: &str) {
    state.meetings.retain(|m| m.id != id);
    if state.selected_meeting_id.as_deref() == Some(id) {
        state.selected_meeting_id = None;
    }
}

fn fresh_id(taken: impl Fn(&str) -> bool) -> EntityId {
    loop {
        let id = uuid::Uuid::new_v4().to_string();
        if !taken(&id) {
            return id;
        }
    }
}
