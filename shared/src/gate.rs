/// Consent gate in front of tool selection.
use crate::consent::ConsentState;
use crate::tools::{self, ToolInfo};

/// Outcome of a tool selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSelection {
    /// Consent checkbox unchecked: surface the consent footer, leave any
    /// open panel alone.
    ConsentRequired,
    /// Consented and the id resolves: open the panel for this tool.
    Open(&'static ToolInfo),
    /// Consented but the id resolves to nothing: show the fallback, leave
    /// any open panel alone.
    UnknownTool,
}

/// Gate a tool selection. Consent is checked before the id is resolved, so
/// an unconsented tap yields `ConsentRequired` even for ids that do not
/// exist.
pub fn select_tool(consent: &ConsentState, raw_id: &str) -> ToolSelection {
    if !consent.is_consented() {
        return ToolSelection::ConsentRequired;
    }
    match tools::find_tool(raw_id) {
        Some(info) => ToolSelection::Open(info),
        None => ToolSelection::UnknownTool,
    }
}

// ====== TESTS ======
