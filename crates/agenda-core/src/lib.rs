//! Agenda core: the single-writer application store and everything that
//! surrounds it without touching the platform.

pub mod event_bus;
pub mod ports;
pub mod store;
pub mod seed;
pub mod normalize;
pub mod briefing;
