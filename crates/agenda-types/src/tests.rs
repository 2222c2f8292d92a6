#[cfg(test)]
mod tests {
    use crate::briefing::*;
    use crate::config::*;
    use crate::event::*;
    use crate::model::*;
    use chrono::{TimeZone, Utc};
    use crate::{AppError, Result};

    fn sample_contact() -> Contact {
        Contact {
            id: "c1".to_string(),
            name: "Aria Montgomery".to_string(),
            title: "Lead Product Manager".to_string(),
            company: "Innovate Inc.".to_string(),
            avatar_url: Contact::avatar_url_for("c1"),
            email: "aria.m@innovate.com".to_string(),
            phone: "555-0101".to_string(),
        }
    }

    fn sample_meeting() -> Meeting {
        Meeting {
            id: "m1".to_string(),
            title: "Kick-off".to_string(),
            time: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            duration: 90,
            attendees: vec!["c1".to_string(), "c3".to_string()],
            agenda: "Plan".to_string(),
            recurrence: Recurrence::Weekly,
        }
    }

    // ─── Contact Tests ───────────────────────────────────────

    #[test]
    fn test_avatar_url_for_seed() {
        assert_eq!(
            Contact::avatar_url_for("abc"),
            "https://picsum.photos/seed/abc/200"
        );
    }

    #[test]
    fn test_contact_initials() {
        let mut c = sample_contact();
        assert_eq!(c.initials(), "AM");
        c.name = "chloe".to_string();
        assert_eq!(c.initials(), "C");
        c.name = "Jean Luc Picard".to_string();
        assert_eq!(c.initials(), "JL");
        c.name = String::new();
        assert_eq!(c.initials(), "");
    }

    #[test]
    fn test_contact_serializes_camel_case() {
        let json = serde_json::to_string(&sample_contact()).unwrap();
        assert!(json.contains("\"avatarUrl\""));
        assert!(!json.contains("avatar_url"));
    }

    #[test]
    fn test_contact_draft_from_contact() {
        let c = sample_contact();
        let draft = ContactDraft::from(&c);
        assert_eq!(draft.id.as_deref(), Some("c1"));
        assert_eq!(draft.name, c.name);
        assert_eq!(draft.phone, c.phone);
    }

    // ─── Meeting Tests ───────────────────────────────────────

    #[test]
    fn test_meeting_ends_at() {
        let m = sample_meeting();
        assert_eq!(m.ends_at(), Utc.with_ymd_and_hms(2026, 3, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_meeting_has_attendee() {
        let m = sample_meeting();
        assert!(m.has_attendee("c3"));
        assert!(!m.has_attendee("c2"));
    }

    #[test]
    fn test_meeting_missing_recurrence_defaults_to_none() {
        let json = r#"{
            "id": "m9",
            "title": "t",
            "time": "2026-03-01T09:00:00Z",
            "duration": 30,
            "attendees": [],
            "agenda": "a"
        }"#;
        let m: Meeting = serde_json::from_str(json).unwrap();
        assert_eq!(m.recurrence, Recurrence::None);
    }

    #[test]
    fn test_meeting_draft_optional_fields_skipped() {
        let draft = MeetingDraft::default();
        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(!json.contains("recurrence"));
    }

    // ─── Enum Tests ──────────────────────────────────────────

    #[test]
    fn test_recurrence_labels() {
        assert_eq!(Recurrence::None.label(), "Does not repeat");
        assert_eq!(Recurrence::Monthly.label(), "Monthly");
        assert_eq!(Recurrence::all().len(), 4);
        assert!(!Recurrence::None.is_repeating());
        assert!(Recurrence::Daily.is_repeating());
    }

    #[test]
    fn test_recurrence_serializes_as_label() {
        let json = serde_json::to_string(&Recurrence::None).unwrap();
        assert_eq!(json, "\"Does not repeat\"");
        let back: Recurrence = serde_json::from_str("\"Weekly\"").unwrap();
        assert_eq!(back, Recurrence::Weekly);
    }

    #[test]
    fn test_view_type() {
        assert_eq!(ViewType::default(), ViewType::Contacts);
        assert_eq!(ViewType::Meetings.label(), "Meetings");
        assert_eq!(serde_json::to_string(&ViewType::Meetings).unwrap(), "\"meetings\"");
    }

    // ─── Briefing Tests ──────────────────────────────────────

    #[test]
    fn test_briefing_wire_names() {
        let json = r#"{
            "summary": "s",
            "attendeeBriefings": [{"name": "Aria", "brief": "PM"}],
            "talkingPoints": ["one", "two"]
        }"#;
        let b: Briefing = serde_json::from_str(json).unwrap();
        assert_eq!(b.attendee_briefings[0].name, "Aria");
        assert_eq!(b.talking_points.len(), 2);
    }

    #[test]
    fn test_briefing_event_ticket() {
        let ticket = BriefingTicket { id: 7, meeting_id: "m1".to_string() };
        let ev = BriefingEvent::Failed {
            ticket: ticket.clone(),
            message: "x".to_string(),
        };
        assert_eq!(ev.ticket(), &ticket);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_briefing_config_defaults() {
        let cfg = BriefingConfig::default();
        assert_eq!(cfg.model, "gemini-2.5-flash");
        assert!((cfg.temperature - 0.5).abs() < f32::EPSILON);
        assert!(cfg.timeout_ms.is_none());
        assert!(!cfg.has_credential());
        assert_eq!(cfg.base_url(), BriefingConfig::DEFAULT_API_BASE);
    }

    #[test]
    fn test_briefing_config_custom_base() {
        let cfg = BriefingConfig {
            api_base: Some("http://localhost:8080".to_string()),
            api_key: "  ".to_string(),
            ..BriefingConfig::default()
        };
        assert_eq!(cfg.base_url(), "http://localhost:8080");
        assert!(!cfg.has_credential());
    }

    #[test]
    fn test_app_config_roundtrip() {
        let cfg = AppConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Config("API_KEY not set".to_string()).to_string(),
            "Configuration error: API_KEY not set"
        );
        assert_eq!(AppError::Timeout(500).to_string(), "Timeout after 500ms");
        assert_eq!(
            AppError::InvalidDuration("0".to_string()).to_string(),
            "Invalid duration: \"0\""
        );
    }

    #[test]
    fn test_error_from_serde() {
        let err = serde_json::from_str::<Briefing>("{").unwrap_err();
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Serialization(_)));
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> Result<()> {
            Err(AppError::Timeout(10))
        }
        assert!(fails().is_err());
    }
}
