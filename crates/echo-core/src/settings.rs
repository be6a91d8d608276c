/// Show/hide state of the tone and scenario settings panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsPanel {
    expanded: bool,
}

impl SettingsPanel {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip based on the current state and return the new one.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Focusing the message field always collapses the panel.
    pub fn on_input_focus(&mut self) {
        self.expanded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        assert!(!SettingsPanel::default().is_expanded());
    }

    #[test]
    fn test_toggle_flips() {
        let mut panel = SettingsPanel::default();
        assert!(panel.toggle());
        assert!(!panel.toggle());
    }

    #[test]
    fn test_input_focus_collapses_from_either_state() {
        let mut panel = SettingsPanel::default();
        panel.on_input_focus();
        assert!(!panel.is_expanded());

        panel.toggle();
        panel.on_input_focus();
        assert!(!panel.is_expanded());
    }
}
