//! Port traits: the hexagonal architecture boundary.
//!
//! The briefing generator is defined here in `agenda-core` (pure Rust).
//! Implementations live in `agenda-platform` (browser adapters).

use async_trait::async_trait;
use agenda_types::{
    Result,
    briefing::{Briefing, BriefingRequest},
};

// ─── Briefing Port ───────────────────────────────────────────

/// External generator turning a meeting and its attendees into a briefing.
///
/// Implementations must fail (never return a partial briefing) when the
/// upstream call errors or its payload lacks any required field.
#[async_trait(?Send)]
pub trait BriefingPort {
    async fn generate(&self, req: BriefingRequest) -> Result<Briefing>;

    /// Model identifier (for logging/debug)
    fn model_name(&self) -> &str;
}
