//! Transient editor drafts. These are the only state views own; they are
//! validated here so the store never receives an incomplete draft.

use thiserror::Error;
use agenda_core::normalize::{parse_duration_minutes, parse_meeting_time, to_datetime_local};
use agenda_types::model::{Contact, ContactDraft, EntityId, Meeting, MeetingDraft, Recurrence};

const DEFAULT_DURATION: &str = "60";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("{0}")]
    Invalid(String),
}

fn missing(fields: &[(&'static str, &str)]) -> Result<(), FormError> {
    let empty: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect();
    if empty.is_empty() {
        Ok(())
    } else {
        Err(FormError::Missing(empty))
    }
}

// ─── Contact form ────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub id: Option<EntityId>,
    pub name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

impl ContactForm {
    /// Reset from the modal payload; `None` gives an empty create form.
    pub fn load(&mut self, contact: Option<&Contact>) {
        *self = match contact {
            Some(c) => Self {
                id: Some(c.id.clone()),
                name: c.name.clone(),
                title: c.title.clone(),
                company: c.company.clone(),
                email: c.email.clone(),
                phone: c.phone.clone(),
            },
            None => Self::default(),
        };
    }

    pub fn validate(&self) -> Result<ContactDraft, FormError> {
        missing(&[
            ("Full Name", &self.name),
            ("Title", &self.title),
            ("Company", &self.company),
            ("Email", &self.email),
            ("Phone", &self.phone),
        ])?;
        Ok(ContactDraft {
            id: self.id.clone(),
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

// ─── Meeting form ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingForm {
    pub id: Option<EntityId>,
    pub title: String,
    /// `YYYY-MM-DDTHH:MM`, local time
    pub time: String,
    pub duration: String,
    pub agenda: String,
    pub recurrence: Recurrence,
    pub attendees: Vec<EntityId>,
}

impl Default for MeetingForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            time: String::new(),
            duration: DEFAULT_DURATION.to_string(),
            agenda: String::new(),
            recurrence: Recurrence::None,
            attendees: Vec::new(),
        }
    }
}

impl MeetingForm {
    pub fn load(&mut self, meeting: Option<&Meeting>) {
        *self = match meeting {
            Some(m) => Self {
                id: Some(m.id.clone()),
                title: m.title.clone(),
                time: to_datetime_local(&m.time),
                duration: m.duration.to_string(),
                agenda: m.agenda.clone(),
                recurrence: m.recurrence,
                attendees: m.attendees.clone(),
            },
            None => Self::default(),
        };
    }

    pub fn toggle_attendee(&mut self, contact_id: &str) {
        toggle(&mut self.attendees, contact_id);
    }

    pub fn validate(&self) -> Result<MeetingDraft, FormError> {
        missing(&[
            ("Title", &self.title),
            ("Date & Time", &self.time),
            ("Duration", &self.duration),
            ("Agenda", &self.agenda),
        ])?;
        parse_meeting_time(&self.time)
            .map_err(|_| FormError::Invalid("Enter a valid date and time.".to_string()))?;
        parse_duration_minutes(&self.duration)
            .map_err(|_| FormError::Invalid("Duration must be a whole number of minutes, at least 1.".to_string()))?;

        Ok(MeetingDraft {
            id: self.id.clone(),
            title: self.title.trim().to_string(),
            time: self.time.trim().to_string(),
            duration: self.duration.trim().to_string(),
            agenda: self.agenda.trim().to_string(),
            attendees: self.attendees.clone(),
            recurrence: Some(self.recurrence),
        })
    }
}

// ─── Attendee picker ─────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendeePicker {
    pub meeting_id: EntityId,
    pub selected: Vec<EntityId>,
}

impl AttendeePicker {
    pub fn load(&mut self, meeting: &Meeting) {
        self.meeting_id = meeting.id.clone();
        self.selected = meeting.attendees.clone();
    }

    pub fn is_selected(&self, contact_id: &str) -> bool {
        self.selected.iter().any(|id| id == contact_id)
    }

    pub fn toggle(&mut self, contact_id: &str) {
        toggle(&mut self.selected, contact_id);
    }
}

fn toggle(ids: &mut Vec<EntityId>, id: &str) {
    if let Some(pos) = ids.iter().position(|x| x == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
}
