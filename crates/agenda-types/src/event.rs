use serde::{Deserialize, Serialize};
use crate::briefing::Briefing;
use crate::model::EntityId;

/// Identifies one generation attempt for one meeting.
/// A result is only applied when its ticket is still the one in flight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BriefingTicket {
    pub id: u64,
    pub meeting_id: EntityId,
}

/// Events emitted by briefing generation.
/// The UI drains these each frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BriefingEvent {
    /// A generation call was started
    Started { ticket: BriefingTicket },

    /// The generator returned a well-formed briefing
    Finished { ticket: BriefingTicket, briefing: Briefing },

    /// The call failed; `message` is the user-facing text
    Failed { ticket: BriefingTicket, message: String },
}

impl BriefingEvent {
    pub fn ticket(&self) -> &BriefingTicket {
        match self {
            BriefingEvent::Started { ticket }
            | BriefingEvent::Finished { ticket, .. }
            | BriefingEvent::Failed { ticket, .. } => ticket,
        }
    }
}
