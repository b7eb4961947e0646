//! fieldforce-assistant
//!
//! Keyword-routed replies for the dashboard chat surfaces. Pure rule tables
//! plus a thin per-surface adapter that owns message history and timing.

pub mod conversation;
pub mod error;
pub mod presets;
pub mod responder;
pub mod surface;

use serde::{Deserialize, Serialize};

use responder::RuleTable;

/// Trait implemented by each named rule preset.
pub trait Preset: Send + Sync {
    /// Unique identifier for this preset (e.g., "waive", "insights").
    fn id(&self) -> &str;

    /// Human-readable name shown in the surface header.
    fn name(&self) -> &str;

    /// First assistant message of every new conversation.
    fn greeting(&self) -> &str;

    /// The ordered rule table and fallback for this preset.
    fn table(&self) -> &'static RuleTable;

    /// Select the reply for `input`. Pure and total.
    fn respond(&self, input: &str) -> &'static str {
        self.table().respond(input)
    }
}

/// Identifier and display name of a registered preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSummary {
    pub id: String,
    pub name: String,
}

impl PresetSummary {
    pub fn of(preset: &dyn Preset) -> Self {
        Self {
            id: preset.id().to_string(),
            name: preset.name().to_string(),
        }
    }
}

/// Id of the preset [`respond`] uses.
pub const CANONICAL_PRESET: &str = "waive";

/// Return all registered presets, canonical first.
pub fn all_presets() -> Vec<Box<dyn Preset>> {
    vec![
        Box::new(presets::waive::Waive),
        Box::new(presets::insights::Insights),
    ]
}

/// Look up a preset by ID.
pub fn get_preset(id: &str) -> Option<Box<dyn Preset>> {
    all_presets().into_iter().find(|p| p.id() == id)
}

/// Reply to `input` using the canonical rule table.
pub fn respond(input: &str) -> &'static str {
    presets::waive::Waive.respond(input)
}
