//! Meeting briefing: request assembly, prompt, response schema, parsing,
//! and the fire-and-forget generation run that reports through the EventBus.
//!
//! Nothing here touches the store: a failed or late generation can never
//! corrupt contacts, meetings or navigation state.

use serde_json::{json, Value};
use agenda_types::{
    AppError, Result,
    briefing::{AttendeeProfile, Briefing, BriefingRequest},
    event::{BriefingEvent, BriefingTicket},
    model::{Contact, Meeting},
};
use crate::event_bus::EventBus;
use crate::ports::BriefingPort;

/// The only failure text users ever see.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate briefing. Please try again.";

/// Build the generator input for `meeting`. Attendee ids with no live
/// contact are skipped; order follows the meeting's attendee list.
pub fn request_for(meeting: &Meeting, contacts: &[Contact]) -> BriefingRequest {
    let attendees = meeting
        .attendees
        .iter()
        .filter_map(|id| contacts.iter().find(|c| &c.id == id))
        .map(|c| AttendeeProfile {
            name: c.name.clone(),
            title: c.title.clone(),
            company: c.company.clone(),
        })
        .collect();

    BriefingRequest {
        title: meeting.title.clone(),
        agenda: meeting.agenda.clone(),
        attendees,
    }
}

pub fn build_prompt(req: &BriefingRequest) -> String {
    let attendees: Vec<String> = req
        .attendees
        .iter()
        .map(|a| format!("- {}, {} at {}", a.name, a.title, a.company))
        .collect();

    format!(
        "Generate a pre-meeting briefing for a professional setting.\n\n\
         Meeting Title: {}\n\n\
         Meeting Agenda: {}\n\n\
         Attendees:\n{}\n\n\
         Based on the information provided, generate a structured briefing.\n\
         The tone should be professional, concise, and action-oriented.\n\
         Focus only on the information given (attendee names, titles, companies, and the meeting agenda). \
         Do not invent outside information.\n\
         Provide a JSON object that adheres to the specified schema.\n",
        req.title,
        req.agenda,
        attendees.join("\n"),
    )
}

/// Structured-output schema sent with every generation request.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A brief, one-paragraph summary of the meeting's primary goal and context."
            },
            "attendeeBriefings": {
                "type": "ARRAY",
                "description": "A list of briefings for each attendee.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {
                            "type": "STRING",
                            "description": "The attendee's full name."
                        },
                        "brief": {
                            "type": "STRING",
                            "description": "A concise briefing on the attendee's likely role, perspective, and key contributions relevant to this meeting's agenda. Focus on their job title and company."
                        }
                    },
                    "required": ["name", "brief"]
                }
            },
            "talkingPoints": {
                "type": "ARRAY",
                "description": "A list of 3-5 key talking points or insightful questions to facilitate a productive discussion, based on the agenda and attendee roles.",
                "items": { "type": "STRING" }
            }
        },
        "required": ["summary", "attendeeBriefings", "talkingPoints"]
    })
}

/// Parse the generator's JSON text. Fails when the text is not JSON or any
/// of `summary`, `attendeeBriefings`, `talkingPoints` is missing or empty-valued.
pub fn parse_briefing(text: &str) -> Result<Briefing> {
    let value: Value = serde_json::from_str(text.trim())?;

    let summary_ok = value["summary"].as_str().is_some_and(|s| !s.is_empty());
    let briefings_ok = value["attendeeBriefings"].is_array();
    let points_ok = value["talkingPoints"].is_array();
    if !(summary_ok && briefings_ok && points_ok) {
        return Err(AppError::MalformedBriefing(
            "response did not match the expected format".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| AppError::MalformedBriefing(e.to_string()))
}

/// Run one generation attempt, reporting progress on `bus`.
///
/// Never retries. Any error is logged and replaced by
/// [`GENERATION_FAILED_MESSAGE`] in the emitted `Failed` event.
pub async fn run_briefing(
    ticket: BriefingTicket,
    req: BriefingRequest,
    port: &dyn BriefingPort,
    bus: &EventBus,
) -> Result<Briefing> {
    log::info!(
        "Generating briefing #{} for meeting {} via {}",
        ticket.id,
        ticket.meeting_id,
        port.model_name()
    );
    bus.emit(BriefingEvent::Started { ticket: ticket.clone() });

    match port.generate(req).await {
        Ok(briefing) => {
            log::info!("Briefing #{} ready", ticket.id);
            bus.emit(BriefingEvent::Finished {
                ticket,
                briefing: briefing.clone(),
            });
            Ok(briefing)
        }
        Err(e) => {
            log::error!("Briefing #{} failed: {}", ticket.id, e);
            bus.emit(BriefingEvent::Failed {
                ticket,
                message: GENERATION_FAILED_MESSAGE.to_string(),
            });
            Err(e)
        }
    }
}
