#[cfg(test)]
mod tests {
    use crate::forms::*;
    use crate::panels::{self, ViewCommand};
    use crate::state::*;
    use agenda_core::store::*;
    use agenda_types::briefing::{AttendeeBriefing, Briefing};
    use agenda_types::event::{BriefingEvent, BriefingTicket};
    use agenda_types::model::*;
    use chrono::{DateTime, Local, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    fn store() -> AppStore {
        AppStore::new(AppState::seeded_at(now()))
    }

    fn synced(store: &AppStore) -> ViewState {
        let mut view = ViewState::new(true);
        view.sync(store.state(), store.revision());
        view
    }

    fn sample_briefing() -> Briefing {
        Briefing {
            summary: "Align on Q3.".to_string(),
            attendee_briefings: vec![AttendeeBriefing {
                name: "Aria Montgomery".to_string(),
                brief: "Owns the roadmap.".to_string(),
            }],
            talking_points: vec!["Budget".to_string()],
        }
    }

    // ─── BriefingPanel Tests ─────────────────────────────────

    #[test]
    fn test_briefing_panel_initial() {
        let panel = BriefingPanel::default();
        assert_eq!(panel.status, BriefingStatus::Idle);
        assert!(panel.meeting_id.is_none());
        assert!(!panel.is_loading());
        assert!(panel.briefing().is_none());
        assert!(panel.error().is_none());
    }

    #[test]
    fn test_briefing_panel_begin_issues_fresh_tickets() {
        let mut panel = BriefingPanel::default();
        let t1 = panel.begin("m1");
        let t2 = panel.begin("m1");
        assert_ne!(t1.id, t2.id);
        assert_eq!(t2.meeting_id, "m1");
        assert!(panel.is_loading());
        assert_eq!(panel.meeting_id.as_deref(), Some("m1"));
    }

    #[test]
    fn test_briefing_panel_applies_current_result() {
        let mut panel = BriefingPanel::default();
        let ticket = panel.begin("m1");
        assert!(panel.apply(&BriefingEvent::Started { ticket: ticket.clone() }));
        assert!(panel.is_loading());

        assert!(panel.apply(&BriefingEvent::Finished {
            ticket,
            briefing: sample_briefing(),
        }));
        assert!(!panel.is_loading());
        assert_eq!(panel.briefing(), Some(&sample_briefing()));
    }

    #[test]
    fn test_briefing_panel_failure_shows_message() {
        let mut panel = BriefingPanel::default();
        let ticket = panel.begin("m1");
        assert!(panel.apply(&BriefingEvent::Failed {
            ticket,
            message: "Failed to generate briefing. Please try again.".to_string(),
        }));
        assert!(!panel.is_loading());
        assert_eq!(panel.error(), Some("Failed to generate briefing. Please try again."));
    }

    #[test]
    fn test_briefing_panel_discards_superseded_ticket() {
        let mut panel = BriefingPanel::default();
        let old = panel.begin("m1");
        let _new = panel.begin("m1");
        assert!(!panel.apply(&BriefingEvent::Finished {
            ticket: old,
            briefing: sample_briefing(),
        }));
        assert!(panel.is_loading());
    }

    #[test]
    fn test_briefing_panel_discards_result_after_navigation() {
        let mut panel = BriefingPanel::default();
        let ticket = panel.begin("m1");
        panel.reset_for(Some("m2".to_string()));
        assert!(!panel.apply(&BriefingEvent::Finished {
            ticket,
            briefing: sample_briefing(),
        }));
        assert_eq!(panel.status, BriefingStatus::Idle);
        assert_eq!(panel.meeting_id.as_deref(), Some("m2"));
    }

    #[test]
    fn test_briefing_panel_ignores_unknown_ticket() {
        let mut panel = BriefingPanel::default();
        let stray = BriefingTicket { id: 42, meeting_id: "m1".to_string() };
        assert!(!panel.apply(&BriefingEvent::Failed {
            ticket: stray,
            message: "x".to_string(),
        }));
        assert_eq!(panel.status, BriefingStatus::Idle);
    }

    // ─── ViewState Tests ─────────────────────────────────────

    #[test]
    fn test_view_state_follows_selected_meeting() {
        let mut store = store();
        let mut view = synced(&store);
        assert!(view.briefing.meeting_id.is_none());

        store.select_meeting("m1");
        view.sync(store.state(), store.revision());
        assert_eq!(view.briefing.meeting_id.as_deref(), Some("m1"));
    }

    #[test]
    fn test_view_state_navigation_drops_in_flight_briefing() {
        let mut store = store();
        store.select_meeting("m1");
        let mut view = synced(&store);
        let ticket = view.briefing.begin("m1");

        store.select_meeting("m2");
        view.sync(store.state(), store.revision());
        view.process_events(vec![BriefingEvent::Finished {
            ticket,
            briefing: sample_briefing(),
        }]);

        assert_eq!(view.briefing.meeting_id.as_deref(), Some("m2"));
        assert!(view.briefing.briefing().is_none());
    }

    #[test]
    fn test_view_state_switching_view_clears_briefing() {
        let mut store = store();
        store.select_meeting("m1");
        let mut view = synced(&store);
        let ticket = view.briefing.begin("m1");
        view.process_events(vec![BriefingEvent::Finished {
            ticket,
            briefing: sample_briefing(),
        }]);
        assert!(view.briefing.briefing().is_some());

        store.set_active_view(ViewType::Contacts);
        view.sync(store.state(), store.revision());
        assert!(view.briefing.meeting_id.is_none());
        assert_eq!(view.briefing.status, BriefingStatus::Idle);
    }

    #[test]
    fn test_view_state_result_survives_unrelated_writes() {
        let mut store = store();
        store.select_meeting("m1");
        let mut view = synced(&store);
        let ticket = view.briefing.begin("m1");

        store.open_new_contact_modal();
        view.sync(store.state(), store.revision());
        view.process_events(vec![BriefingEvent::Finished {
            ticket,
            briefing: sample_briefing(),
        }]);
        assert_eq!(view.briefing.briefing(), Some(&sample_briefing()));
    }

    #[test]
    fn test_view_state_loads_contact_editor() {
        let mut store = store();
        let mut view = synced(&store);
        let c1 = store.state().contact("c1").cloned().unwrap();

        store.open_edit_contact_modal(c1.clone());
        view.sync(store.state(), store.revision());
        assert_eq!(view.contact_form.id.as_deref(), Some("c1"));
        assert_eq!(view.contact_form.name, c1.name);

        store.close_contact_modal();
        view.sync(store.state(), store.revision());
        store.open_new_contact_modal();
        view.sync(store.state(), store.revision());
        assert_eq!(view.contact_form, ContactForm::default());
    }

    #[test]
    fn test_view_state_loads_meeting_editor_and_picker() {
        let mut store = store();
        let mut view = synced(&store);
        let m2 = store.state().meeting("m2").cloned().unwrap();

        store.open_edit_meeting_modal(m2.clone());
        view.sync(store.state(), store.revision());
        assert_eq!(view.meeting_form.id.as_deref(), Some("m2"));
        assert_eq!(view.meeting_form.duration, "90");
        assert_eq!(view.meeting_form.recurrence, Recurrence::Weekly);
        assert_eq!(view.meeting_form.attendees, m2.attendees);

        store.close_meeting_modal();
        store.open_attendee_modal(m2.clone());
        view.sync(store.state(), store.revision());
        assert_eq!(view.attendee_picker.meeting_id, "m2");
        assert_eq!(view.attendee_picker.selected, m2.attendees);
    }

    #[test]
    fn test_view_state_keeps_draft_edits_between_frames() {
        let mut store = store();
        let mut view = synced(&store);
        store.open_new_contact_modal();
        view.sync(store.state(), store.revision());

        view.contact_form.name = "Typed".to_string();
        view.sync(store.state(), store.revision());
        assert_eq!(view.contact_form.name, "Typed");
    }

    #[test]
    fn test_view_state_modal_change_clears_form_error() {
        let mut store = store();
        let mut view = synced(&store);
        store.open_new_contact_modal();
        view.sync(store.state(), store.revision());
        view.form_error = view.contact_form.validate().err();
        assert!(view.form_error.is_some());

        store.close_contact_modal();
        view.sync(store.state(), store.revision());
        assert!(view.form_error.is_none());
    }

    // ─── Form Tests ──────────────────────────────────────────

    #[test]
    fn test_contact_form_requires_every_field() {
        let mut form = ContactForm::default();
        form.name = "Ada".to_string();
        form.email = "   ".to_string();
        match form.validate() {
            Err(FormError::Missing(fields)) => {
                assert_eq!(fields, vec!["Title", "Company", "Email", "Phone"]);
            }
            other => panic!("expected missing fields, got {:?}", other),
        }
    }

    #[test]
    fn test_contact_form_valid_draft_is_trimmed() {
        let form = ContactForm {
            id: Some("c1".to_string()),
            name: " Ada ".to_string(),
            title: "CTO".to_string(),
            company: "Acme".to_string(),
            email: "ada@acme.test".to_string(),
            phone: "555".to_string(),
        };
        let draft = form.validate().unwrap();
        assert_eq!(draft.id.as_deref(), Some("c1"));
        assert_eq!(draft.name, "Ada");
    }

    #[test]
    fn test_meeting_form_defaults() {
        let form = MeetingForm::default();
        assert_eq!(form.duration, "60");
        assert_eq!(form.recurrence, Recurrence::None);
        assert!(form.attendees.is_empty());
    }

    #[test]
    fn test_meeting_form_rejects_bad_time_and_duration() {
        let mut form = MeetingForm {
            title: "Sync".to_string(),
            time: "tomorrow".to_string(),
            agenda: "x".to_string(),
            ..MeetingForm::default()
        };
        assert!(matches!(form.validate(), Err(FormError::Invalid(_))));

        form.time = "2026-06-15T15:05".to_string();
        form.duration = "0".to_string();
        assert!(matches!(form.validate(), Err(FormError::Invalid(_))));

        form.duration = "abc".to_string();
        assert!(matches!(form.validate(), Err(FormError::Invalid(_))));
    }

    #[test]
    fn test_meeting_form_valid_draft_saves() {
        let mut store = store();
        let mut form = MeetingForm {
            title: "Sync".to_string(),
            time: "2026-06-15T15:05".to_string(),
            duration: "30".to_string(),
            agenda: "x".to_string(),
            recurrence: Recurrence::Daily,
            ..MeetingForm::default()
        };
        form.toggle_attendee("c2");
        form.toggle_attendee("c3");
        form.toggle_attendee("c2");

        let draft = form.validate().unwrap();
        assert_eq!(draft.recurrence, Some(Recurrence::Daily));
        assert_eq!(draft.attendees, vec!["c3".to_string()]);

        assert!(store.save_meeting(draft));
        let created = store.state().selected_meeting().unwrap();
        assert_eq!(created.title, "Sync");
        assert_eq!(created.duration, 30);
        assert_eq!(created.recurrence, Recurrence::Daily);
    }

    #[test]
    fn test_meeting_form_round_trips_edit() {
        let store = store();
        let m1 = store.state().meeting("m1").cloned().unwrap();
        let mut form = MeetingForm::default();
        form.load(Some(&m1));
        let draft = form.validate().unwrap();

        let mut store = store;
        store.save_meeting(draft);
        let saved = store.state().meeting("m1").unwrap();
        // datetime-local drops seconds
        assert_eq!(saved.time.timestamp() / 60, m1.time.timestamp() / 60);
        assert_eq!(saved.duration, m1.duration);
        assert_eq!(saved.attendees, m1.attendees);
    }

    #[test]
    fn test_attendee_picker_toggle() {
        let mut picker = AttendeePicker::default();
        picker.toggle("c1");
        picker.toggle("c2");
        assert!(picker.is_selected("c1"));
        picker.toggle("c1");
        assert!(!picker.is_selected("c1"));
        assert_eq!(picker.selected, vec!["c2".to_string()]);
    }

    // ─── Formatting Tests ────────────────────────────────────

    #[test]
    fn test_time_formatting() {
        let local = Local.with_ymd_and_hms(2026, 6, 15, 15, 5, 0).unwrap();
        let utc = local.with_timezone(&Utc);
        assert_eq!(panels::format_list_time(&utc), "Monday 3:05 PM");
        assert_eq!(panels::format_detail_time(&utc), "Monday, June 15, 2026 at 3:05 PM");
    }

    #[test]
    fn test_meeting_span_shows_end_time() {
        let start = Local.with_ymd_and_hms(2026, 6, 15, 15, 5, 0).unwrap().with_timezone(&Utc);
        let mut meeting = store().state().meeting("m1").cloned().unwrap();
        meeting.time = start;
        meeting.duration = 45;
        assert_eq!(panels::format_clock_time(&meeting.ends_at()), "3:50 PM");
        assert_eq!(
            panels::format_meeting_span(&meeting),
            "Monday, June 15, 2026 at 3:05 PM until 3:50 PM (45 min)"
        );
    }

    // ─── Rendering Tests ─────────────────────────────────────

    fn render(
        state: &AppState,
        view: &mut ViewState,
    ) -> Vec<ViewCommand> {
        let ctx = egui::Context::default();
        let mut commands = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::SidePanel::left("nav").show(ctx, |ui| {
                commands.extend(panels::nav::nav_bar(ui, state));
            });
            egui::SidePanel::left("list").show(ctx, |ui| {
                let cmd = match state.active_view {
                    ViewType::Contacts => panels::contacts::contact_list(ui, state),
                    ViewType::Meetings => panels::meetings::meeting_list(ui, state),
                };
                commands.extend(cmd);
            });
            egui::CentralPanel::default().show(ctx, |ui| {
                commands.extend(panels::detail_panel(ui, state, view));
            });
            commands.extend(panels::modals::modal_host(ctx, state, view));
        });
        commands
    }

    #[test]
    fn test_render_without_input_emits_nothing() {
        let mut store = store();
        let mut view = synced(&store);
        assert!(render(store.state(), &mut view).is_empty());

        store.select_meeting("m1");
        view.sync(store.state(), store.revision());
        let ticket = view.briefing.begin("m1");
        view.process_events(vec![BriefingEvent::Finished {
            ticket,
            briefing: sample_briefing(),
        }]);
        assert!(render(store.state(), &mut view).is_empty());
    }

    #[test]
    fn test_render_every_modal() {
        let mut store = store();
        let mut view = synced(&store);
        let m1 = store.state().meeting("m1").cloned().unwrap();
        let c1 = store.state().contact("c1").cloned().unwrap();

        let opens: Vec<Action> = vec![
            Action::OpenNewContactModal,
            Action::OpenEditContactModal(c1),
            Action::OpenNewMeetingModal,
            Action::OpenEditMeetingModal(m1.clone()),
            Action::OpenAttendeeModal(m1),
            Action::RequestDelete(DeleteTarget::Meeting("m2".to_string())),
        ];
        for open in opens {
            store.dispatch(open);
            view.sync(store.state(), store.revision());
            assert!(store.state().modal.is_open());
            assert!(render(store.state(), &mut view).is_empty());
            store.dispatch(Action::CancelDelete);
            view.sync(store.state(), store.revision());
        }
    }

    #[test]
    fn test_render_placeholder_and_unavailable_briefing() {
        let mut store = store();
        store.set_active_view(ViewType::Meetings);
        let mut view = ViewState::new(false);
        view.sync(store.state(), store.revision());
        assert!(render(store.state(), &mut view).is_empty());

        store.select_meeting("m3");
        view.sync(store.state(), store.revision());
        assert!(render(store.state(), &mut view).is_empty());
    }

    // ─── Modal Blocking Tests ────────────────────────────────

    #[test]
    fn test_frame_command_drops_background_while_modal_open() {
        let mut store = store();
        let background = Some(ViewCommand::Dispatch(Action::SelectContact("c2".to_string())));

        assert_eq!(
            panels::frame_command(store.state(), background.clone(), None),
            background
        );

        store.open_new_contact_modal();
        assert_eq!(panels::frame_command(store.state(), background.clone(), None), None);

        let save = Some(ViewCommand::Dispatch(Action::CloseContactModal));
        assert_eq!(panels::frame_command(store.state(), background, save.clone()), save);
    }

    #[test]
    fn test_dismiss_action_closes_each_modal() {
        use crate::panels::modals::dismiss_action;

        let mut store = store();
        assert_eq!(dismiss_action(&store.state().modal), None);

        let m1 = store.state().meeting("m1").cloned().unwrap();
        let cases = vec![
            (Action::OpenNewContactModal, Action::CloseContactModal),
            (Action::OpenNewMeetingModal, Action::CloseMeetingModal),
            (Action::OpenAttendeeModal(m1), Action::CloseAttendeeModal),
            (
                Action::RequestDelete(DeleteTarget::Contact("c1".to_string())),
                Action::CancelDelete,
            ),
        ];
        for (open, close) in cases {
            assert!(store.dispatch(open));
            assert_eq!(dismiss_action(&store.state().modal), Some(close.clone()));
            assert!(store.dispatch(close));
            assert!(!store.state().modal.is_open());
        }
    }

    #[test]
    fn test_view_command_from_action() {
        let cmd: ViewCommand = Action::ConfirmDelete.into();
        assert_eq!(cmd, ViewCommand::Dispatch(Action::ConfirmDelete));
    }
}
