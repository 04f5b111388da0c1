use serde::Serialize;

pub const DEFAULT_THEME_TRANSITION_MS: u32 = 400;
const THEME_TRANSITION_EASING: &str = "ease-in-out";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Dark,
    Light,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Fade that accompanies a mode switch. The key is the mode itself, so a
/// renderer that keys its root on it restarts the animation on every toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeTransition {
    pub key: DisplayMode,
    pub duration_ms: u32,
    pub easing: &'static str,
}

impl ThemeTransition {
    pub fn animation_css(&self) -> String {
        format!(
            "animation: theme-fade {}ms {};",
            self.duration_ms, self.easing
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    mode: DisplayMode,
    transition_ms: u32,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(DEFAULT_THEME_TRANSITION_MS)
    }
}

impl ThemeState {
    pub fn new(transition_ms: u32) -> Self {
        Self {
            mode: DisplayMode::default(),
            transition_ms,
        }
    }

    /// Reduced motion drops the fade to 0 ms; the key still changes per mode.
    pub fn with_motion(transition_ms: u32, reduced_motion: bool) -> Self {
        if reduced_motion {
            Self::new(0)
        } else {
            Self::new(transition_ms)
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn transition(&self) -> ThemeTransition {
        ThemeTransition {
            key: self.mode,
            duration_ms: self.transition_ms,
            easing: THEME_TRANSITION_EASING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_mode_is_dark() {
        assert_eq!(ThemeState::default().mode(), DisplayMode::Dark);
    }

    #[test]
    fn double_toggle_restores_mode() {
        for mode in [DisplayMode::Dark, DisplayMode::Light] {
            assert_eq!(mode.toggled().toggled(), mode);
        }

        let mut state = ThemeState::default();
        let before = state;
        state.toggle();
        assert_eq!(state.mode(), DisplayMode::Light);
        state.toggle();
        assert_eq!(state, before);
    }

    #[test]
    fn transition_is_keyed_by_mode() {
        let mut state = ThemeState::default();
        let first = state.transition();
        state.toggle();
        let second = state.transition();

        assert_ne!(first.key, second.key);
        assert_eq!(second.key, DisplayMode::Light);
        assert_eq!(second.duration_ms, DEFAULT_THEME_TRANSITION_MS);
        assert_eq!(
            second.animation_css(),
            "animation: theme-fade 400ms ease-in-out;"
        );
    }

    #[test]
    fn parse_round_trips_mode_names() {
        for mode in [DisplayMode::Dark, DisplayMode::Light] {
            assert_eq!(DisplayMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(DisplayMode::parse(" Light "), Some(DisplayMode::Light));
        assert_eq!(DisplayMode::parse("sepia"), None);
        assert_eq!(DisplayMode::parse(""), None);
    }

    #[test]
    fn reduced_motion_zeroes_the_fade() {
        let mut reduced = ThemeState::with_motion(400, true);
        assert_eq!(reduced.transition().duration_ms, 0);
        assert_eq!(reduced.mode(), DisplayMode::Dark);

        let before = reduced.transition().key;
        reduced.toggle();
        assert_ne!(reduced.transition().key, before);
        assert_eq!(reduced.transition().duration_ms, 0);

        let full = ThemeState::with_motion(250, false);
        assert_eq!(full.transition().duration_ms, 250);
        assert_eq!(ThemeState::with_motion(DEFAULT_THEME_TRANSITION_MS, false), ThemeState::default());
    }

    #[test]
    fn toggle_affordance_names_the_next_mode() {
        assert_eq!(DisplayMode::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(DisplayMode::Light.toggle_label(), "Switch to dark theme");
        assert!(DisplayMode::Dark.pressed());
        assert!(!DisplayMode::Light.pressed());
    }
}
