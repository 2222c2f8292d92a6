//! Hand-off from spawned briefing futures to the frame loop.
//!
//! Generation runs in `spawn_local` and cannot borrow the view state, so it
//! posts `BriefingEvent`s here. The app checks `has_pending` each frame and
//! drains the queue into the view only when something arrived. Single-threaded
//! (WASM), so a `RefCell` is enough.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use agenda_types::event::BriefingEvent;

/// Clone-cheap handle; every clone feeds the same queue.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<BriefingEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: BriefingEvent) {
        log::debug!("bus: ticket #{} {}", event.ticket().id, event_kind(&event));
        self.queue.borrow_mut().push_back(event);
    }

    /// Everything posted since the last drain, oldest first.
    pub fn drain(&self) -> Vec<BriefingEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Whether the frame loop has anything to apply.
    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}

fn event_kind(event: &BriefingEvent) -> &'static str {
    match event {
        BriefingEvent::Started { .. } => "started",
        BriefingEvent::Finished { .. } => "finished",
        BriefingEvent::Failed { .. } => "failed",
    }
}
