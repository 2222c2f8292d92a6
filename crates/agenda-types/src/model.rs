//! Domain records: contacts, meetings and the two closed enumerations
//! that drive navigation and recurrence tagging.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque, stable entity identifier.
pub type EntityId = String;

/// A person that can be invited to meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: EntityId,
    pub name: String,
    pub title: String,
    pub company: String,
    pub avatar_url: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Avatar reference derived from an arbitrary seed string.
    pub fn avatar_url_for(seed: &str) -> String {
        format!("https://picsum.photos/seed/{}/200", seed)
    }

    /// Up to two uppercase initials, used where no image can be shown.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// A scheduled meeting. Attendees reference contacts by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: EntityId,
    pub title: String,
    pub time: DateTime<Utc>,
    /// Minutes, always positive
    pub duration: u32,
    pub attendees: Vec<EntityId>,
    pub agenda: String,
    #[serde(default)]
    pub recurrence: Recurrence,
}

impl Meeting {
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.time + chrono::Duration::minutes(i64::from(self.duration))
    }

    pub fn has_attendee(&self, contact_id: &str) -> bool {
        self.attendees.iter().any(|id| id == contact_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Recurrence {
    #[default]
    #[serde(rename = "Does not repeat")]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub fn all() -> &'static [Recurrence] {
        &[
            Recurrence::None,
            Recurrence::Daily,
            Recurrence::Weekly,
            Recurrence::Monthly,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recurrence::None => "Does not repeat",
            Recurrence::Daily => "Daily",
            Recurrence::Weekly => "Weekly",
            Recurrence::Monthly => "Monthly",
        }
    }

    pub fn is_repeating(&self) -> bool {
        !matches!(self, Recurrence::None)
    }
}

/// Top-level navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Contacts,
    Meetings,
}

impl ViewType {
    pub fn all() -> &'static [ViewType] {
        &[ViewType::Contacts, ViewType::Meetings]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewType::Contacts => "Contacts",
            ViewType::Meetings => "Meetings",
        }
    }
}

// ─── Drafts ──────────────────────────────────────────────────

/// Submitted contents of the contact editor.
/// `id == None` creates a new contact; otherwise the fields are merged
/// into the existing contact and its avatar is retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<EntityId>,
    pub name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

impl From<&Contact> for ContactDraft {
    fn from(c: &Contact) -> Self {
        Self {
            id: Some(c.id.clone()),
            name: c.name.clone(),
            title: c.title.clone(),
            company: c.company.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
        }
    }
}

/// Submitted contents of the meeting editor, still in form representation:
/// `time` and `duration` are normalised by the store on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingDraft {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<EntityId>,
    pub title: String,
    pub time: String,
    pub duration: String,
    pub agenda: String,
    pub attendees: Vec<EntityId>,
    /// `None` keeps the existing tag on update
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recurrence: Option<Recurrence>,
}
