use serde::{Deserialize, Serialize};

/// Generated pre-meeting briefing. Transient: never stored in the app state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Briefing {
    pub summary: String,
    pub attendee_briefings: Vec<AttendeeBriefing>,
    pub talking_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeBriefing {
    pub name: String,
    pub brief: String,
}

/// What the generator is told about one attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeProfile {
    pub name: String,
    pub title: String,
    pub company: String,
}

/// Input to a single generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingRequest {
    pub title: String,
    pub agenda: String,
    pub attendees: Vec<AttendeeProfile>,
}
