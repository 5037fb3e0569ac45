//! UI state - focus and the help overlay

/// Which part of the window receives keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusTarget {
    /// The token chip area
    #[default]
    CorrectionArea,
    /// The inline word editor
    InlineEditor,
    /// The help overlay's close button
    HelpOverlay,
}

/// UI state that is not part of the correction session
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Where focus currently is
    pub focus: FocusTarget,
    /// Help overlay visibility
    pub help_open: bool,
    /// Focus to restore when the help overlay closes
    pub focus_before_help: Option<FocusTarget>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the help overlay, remembering the current focus
    pub fn open_help(&mut self) {
        if self.help_open {
            return;
        }
        self.focus_before_help = Some(self.focus);
        self.help_open = true;
        self.focus = FocusTarget::HelpOverlay;
    }

    /// Close the help overlay, returning the restored focus
    pub fn close_help(&mut self) -> FocusTarget {
        self.help_open = false;
        let restored = match self.focus_before_help.take() {
            Some(FocusTarget::HelpOverlay) | None => FocusTarget::CorrectionArea,
            Some(target) => target,
        };
        self.focus = restored;
        restored
    }
}
