//! Main egui application. Owns the store and composes all panels.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use agenda_core::briefing::{request_for, run_briefing};
use agenda_core::event_bus::EventBus;
use agenda_core::ports::BriefingPort;
use agenda_core::store::AppStore;
use agenda_platform::llm::GeminiBriefingProvider;
use agenda_types::config::AppConfig;
use agenda_types::model::ViewType;
use agenda_ui::panels::{self, contacts, meetings, modals, nav, ViewCommand};
use agenda_ui::state::ViewState;
use agenda_ui::theme;

pub struct AgendaApp {
    store: AppStore,
    view: ViewState,
    event_bus: EventBus,
    /// `None` when no credential was configured
    briefing: Option<Rc<dyn BriefingPort>>,
    first_frame: bool,
}

impl AgendaApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let briefing: Option<Rc<dyn BriefingPort>> = match GeminiBriefingProvider::new(config.briefing) {
            Ok(provider) => {
                log::info!("Briefing generator ready ({})", provider.model_name());
                Some(Rc::new(provider))
            }
            Err(e) => {
                log::error!("Briefing generator disabled: {}", e);
                None
            }
        };

        let store = AppStore::seeded();
        let mut view = ViewState::new(briefing.is_some());
        view.sync(store.state(), store.revision());

        Self {
            store,
            view,
            event_bus: EventBus::new(),
            briefing,
            first_frame: true,
        }
    }

    fn execute(&mut self, command: ViewCommand, ctx: &egui::Context) {
        match command {
            ViewCommand::Dispatch(action) => {
                if self.store.dispatch(action) {
                    self.view.sync(self.store.state(), self.store.revision());
                    ctx.request_repaint();
                }
            }
            ViewCommand::GenerateBriefing(meeting_id) => self.generate_briefing(&meeting_id, ctx),
        }
    }

    /// Start a generation for the displayed meeting (async, fire-and-forget).
    fn generate_briefing(&mut self, meeting_id: &str, ctx: &egui::Context) {
        let Some(port) = self.briefing.clone() else {
            log::warn!("Briefing requested but no generator is configured");
            return;
        };
        if self.view.briefing.is_loading() {
            return;
        }
        let Some(meeting) = self.store.state().meeting(meeting_id) else {
            log::debug!("generate_briefing: unknown meeting {}", meeting_id);
            return;
        };

        let req = request_for(meeting, &self.store.state().contacts);
        let ticket = self.view.briefing.begin(meeting_id);
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            // failures are already logged and reported on the bus
            let _ = run_briefing(ticket, req, port.as_ref(), &bus).await;
            ctx.request_repaint();
        });
    }
}

impl eframe::App for AgendaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Apply briefing results posted since the last frame
        if self.event_bus.has_pending() {
            self.view.process_events(self.event_bus.drain());
            ctx.request_repaint();
        }
        self.view.sync(self.store.state(), self.store.revision());

        if self.view.briefing.is_loading() {
            ctx.request_repaint();
        }

        let state = self.store.state();
        let mut command: Option<ViewCommand> = None;

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Agenda")
                        .strong()
                        .color(theme::accent_for(state.active_view))
                        .size(16.0),
                );
                ui.separator();
                let status = match &self.briefing {
                    Some(port) => format!("AI briefings: {}", port.model_name()),
                    None => "AI briefings unavailable".to_string(),
                };
                ui.label(RichText::new(status).color(theme::TEXT_SECONDARY).small());
            });
        });

        // ── Navigation ───────────────────────────────────────
        SidePanel::left("nav_panel")
            .resizable(false)
            .exact_width(120.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                command = command.take().or(nav::nav_bar(ui, state));
            });

        // ── List ─────────────────────────────────────────────
        SidePanel::left("list_panel")
            .min_width(280.0)
            .max_width(420.0)
            .show(ctx, |ui| {
                let cmd = match state.active_view {
                    ViewType::Contacts => contacts::contact_list(ui, state),
                    ViewType::Meetings => meetings::meeting_list(ui, state),
                };
                command = command.take().or(cmd);
            });

        // ── Detail ───────────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            command = command.take().or(panels::detail_panel(ui, state, &self.view));
        });

        // ── Modals ───────────────────────────────────────────
        let modal_cmd = modals::modal_host(ctx, state, &mut self.view);
        let command = panels::frame_command(state, command, modal_cmd);

        if let Some(cmd) = command {
            self.execute(cmd, ctx);
        }
    }
}
