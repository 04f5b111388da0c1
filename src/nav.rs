use crate::content::{find_section, NavSection};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

/// In-page jump produced by selecting a navigation entry. Performing the jump
/// is left to the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorJump {
    pub section: NavSection,
}

impl AnchorJump {
    pub fn href(&self) -> String {
        self.section.href()
    }
}

/// Narrow-viewport navigation drawer. Wide viewports render the same links
/// inline and select through here too; selection from `Closed` stays closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavOverlay {
    state: PanelState,
}

impl NavOverlay {
    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PanelState::Open)
    }

    pub fn open(&mut self) {
        self.state = PanelState::Open;
    }

    pub fn close(&mut self) {
        self.state = PanelState::Closed;
    }

    /// Backdrop click or similar gesture outside the drawer.
    pub fn dismiss(&mut self) {
        self.close();
    }

    pub fn select_section(&mut self, id: &str) -> Option<AnchorJump> {
        self.close();
        find_section(id).map(|section| AnchorJump { section })
    }
}
