/// Open-panel state for one session.
///
/// A session shows at most one tool panel at a time and there is no panel
/// history: opening a tool while another is open replaces the previous panel
/// together with its form state.
use crate::forms::PanelForm;
use crate::tools::ToolId;

#[derive(Debug, Clone, Default)]
pub enum ToolModal {
    #[default]
    Closed,
    Open {
        tool: ToolId,
        title: String,
        form: PanelForm,
    },
}

impl ToolModal {
    /// Open the panel for a tool, seeding the tool's default form.
    pub fn open(&mut self, tool: ToolId, title: impl Into<String>) {
        *self = ToolModal::Open {
            tool,
            title: title.into(),
            form: PanelForm::for_tool(tool),
        };
    }

    pub fn close(&mut self) {
        *self = ToolModal::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ToolModal::Open { .. })
    }

    pub fn selected_tool(&self) -> Option<ToolId> {
        match self {
            ToolModal::Open { tool, .. } => Some(*tool),
            ToolModal::Closed => None,
        }
    }

    /// Title of the open panel; empty when closed.
    pub fn selected_title(&self) -> &str {
        match self {
            ToolModal::Open { title, .. } => title,
            ToolModal::Closed => "",
        }
    }

    pub fn form(&self) -> Option<&PanelForm> {
        match self {
            ToolModal::Open { form, .. } => Some(form),
            ToolModal::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut PanelForm> {
        match self {
            ToolModal::Open { form, .. } => Some(form),
            ToolModal::Closed => None,
        }
    }
}

// ====== TESTS ======

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldAction;

    #[test]
    fn test_starts_closed() {
        let modal = ToolModal::default();
        assert!(!modal.is_open());
        assert_eq!(modal.selected_tool(), None);
        assert_eq!(modal.selected_title(), "");
        assert!(modal.form().is_none());
    }

    #[test]
    fn test_open_seeds_default_form() {
        let mut modal = ToolModal::default();
        modal.open(ToolId::Image, "Image Processor");
        assert!(modal.is_open());
        assert_eq!(modal.selected_tool(), Some(ToolId::Image));
        assert_eq!(modal.selected_title(), "Image Processor");
        assert!(matches!(modal.form(), Some(PanelForm::Image(_))));
    }

    #[test]
    fn test_close_clears_everything() {
        let mut modal = ToolModal::default();
        modal.open(ToolId::Audio, "Audio Processor");
        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.selected_title(), "");
        assert!(modal.form().is_none());
    }

    #[test]
    fn test_reopen_replaces_panel_and_form() {
        let mut modal = ToolModal::default();
        modal.open(ToolId::Image, "Image Processor");
        if let Some(form) = modal.form_mut() {
            form.apply(FieldAction::CompressionUp);
        }

        // Switching tools drops the previous form entirely
        modal.open(ToolId::Font, "Font Optimizer");
        assert_eq!(modal.selected_tool(), Some(ToolId::Font));
        assert!(matches!(modal.form(), Some(PanelForm::Font(_))));

        // Reopening the first tool starts from defaults again
        modal.open(ToolId::Image, "Image Processor");
        match modal.form() {
            Some(PanelForm::Image(f)) => assert_eq!(f.compression, 80),
            other => panic!("unexpected form: {:?}", other),
        }
    }
}
