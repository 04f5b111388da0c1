use crate::theme::DisplayMode;

pub type Color = &'static str;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Navbar,
    Hero,
    About,
    Skills,
    Projects,
    Contact,
    Footer,
}

impl Region {
    #[cfg(test)]
    pub const ALL: [Region; 7] = [
        Region::Navbar,
        Region::Hero,
        Region::About,
        Region::Skills,
        Region::Projects,
        Region::Contact,
        Region::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Footer => "footer",
        }
    }
}

/// Category color of a skill tag. The concrete color depends on the mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorToken {
    Core,
    Backend,
    Exploring,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorStop {
    pub color: Color,
    pub at_percent: Option<u8>,
}

impl ColorStop {
    const fn at(color: Color, percent: u8) -> Self {
        Self {
            color,
            at_percent: Some(percent),
        }
    }

    fn to_css(self) -> String {
        match self.at_percent {
            Some(percent) => format!("{} {percent}%", self.color),
            None => self.color.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Background {
    Solid(Color),
    Linear { angle_deg: u16, stops: Vec<ColorStop> },
    Radial { position: &'static str, stops: Vec<ColorStop> },
}

impl Background {
    fn linear(angle_deg: u16, colors: &[Color]) -> Self {
        Self::Linear {
            angle_deg,
            stops: spread_stops(colors),
        }
    }

    fn radial(position: &'static str, colors: &[Color]) -> Self {
        Self::Radial {
            position,
            stops: spread_stops(colors),
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Solid(color) => color.to_string(),
            Self::Linear { angle_deg, stops } => {
                format!("linear-gradient({angle_deg}deg, {})", join_stops(stops))
            }
            Self::Radial { position, stops } => {
                format!("radial-gradient(circle at {position}, {})", join_stops(stops))
            }
        }
    }
}

// Evenly spaced stops from 0% to 100%.
fn spread_stops(colors: &[Color]) -> Vec<ColorStop> {
    let last = colors.len().saturating_sub(1).max(1);
    colors
        .iter()
        .enumerate()
        .map(|(index, color)| {
            let percent = u8::try_from(index * 100 / last).unwrap_or(100);
            ColorStop::at(*color, percent)
        })
        .collect()
}

fn join_stops(stops: &[ColorStop]) -> String {
    stops
        .iter()
        .map(|stop| stop.to_css())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Foreground {
    pub primary: Color,
    pub secondary: Option<Color>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glow {
    pub blur_px: u16,
    pub spread_px: u16,
    pub color: Color,
}

impl Glow {
    pub fn to_css(self) -> String {
        format!("0 0 {}px {}px {}", self.blur_px, self.spread_px, self.color)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionStyle {
    pub background: Background,
    pub foreground: Foreground,
    pub glow: Option<Glow>,
}

impl RegionStyle {
    pub fn inline_style(&self) -> String {
        let mut style = format!(
            "background: {}; color: {};",
            self.background.to_css(),
            self.foreground.primary
        );

        if let Some(secondary) = self.foreground.secondary {
            style.push_str(&format!(" --text-secondary: {secondary};"));
        }

        if let Some(glow) = self.glow {
            style.push_str(&format!(" box-shadow: {};", glow.to_css()));
        }

        style
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    pub mode: DisplayMode,
    pub accent: Color,
    pub navbar: RegionStyle,
    pub hero: RegionStyle,
    pub about: RegionStyle,
    pub skills: RegionStyle,
    pub projects: RegionStyle,
    pub contact: RegionStyle,
    pub footer: RegionStyle,
    pub card: RegionStyle,
    pub scroll_button: RegionStyle,
    tags: TagColors,
}

impl StyleSheet {
    pub fn region(&self, region: Region) -> &RegionStyle {
        match region {
            Region::Navbar => &self.navbar,
            Region::Hero => &self.hero,
            Region::About => &self.about,
            Region::Skills => &self.skills,
            Region::Projects => &self.projects,
            Region::Contact => &self.contact,
            Region::Footer => &self.footer,
        }
    }

    pub fn tag_color(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Core => self.tags.core,
            ColorToken::Backend => self.tags.backend,
            ColorToken::Exploring => self.tags.exploring,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TagColors {
    core: Color,
    backend: Color,
    exploring: Color,
}

struct Palette {
    accent: Color,
    accent_glow: Color,
    on_accent: Color,
    text: Color,
    text_muted: Color,
    navbar: Color,
    hero: [Color; 3],
    about: [Color; 2],
    skills: [Color; 2],
    projects: [Color; 2],
    contact: [Color; 2],
    footer: Color,
    footer_text: Color,
    footer_muted: Color,
    card: Color,
    card_border_glow: Color,
    tags: TagColors,
}

static DARK_PALETTE: Palette = Palette {
    accent: "#61dafb",
    accent_glow: "rgba(97, 218, 251, 0.35)",
    on_accent: "#000000",
    text: "#ffffff",
    text_muted: "#b0b8c4",
    navbar: "rgba(15, 17, 21, 0.85)",
    hero: ["#1e3c72", "#16222a", "#0f1115"],
    about: ["#2d2f36", "#24252a"],
    skills: ["#1e3c72", "#2a5298"],
    projects: ["#42275a", "#734b6d"],
    contact: ["#16222a", "#3a6073"],
    footer: "#111111",
    footer_text: "#ffffff",
    footer_muted: "#888888",
    card: "#1b1e24",
    card_border_glow: "rgba(97, 218, 251, 0.15)",
    tags: TagColors {
        core: "#61dafb",
        backend: "#a78bfa",
        exploring: "#fbbf24",
    },
};

static LIGHT_PALETTE: Palette = Palette {
    accent: "#1565c0",
    accent_glow: "rgba(21, 101, 192, 0.25)",
    on_accent: "#ffffff",
    text: "#1a1c20",
    text_muted: "#55606e",
    navbar: "rgba(255, 255, 255, 0.9)",
    hero: ["#e3f2fd", "#f5f7fa", "#ffffff"],
    about: ["#f5f7fa", "#e4e9f0"],
    skills: ["#e3f2fd", "#bbdefb"],
    projects: ["#f3e5f5", "#e1bee7"],
    contact: ["#e0f2f1", "#b2dfdb"],
    footer: "#eceff1",
    footer_text: "#1a1c20",
    footer_muted: "#607d8b",
    card: "#ffffff",
    card_border_glow: "rgba(21, 101, 192, 0.12)",
    tags: TagColors {
        core: "#1565c0",
        backend: "#6a1b9a",
        exploring: "#ef6c00",
    },
};

fn palette(mode: DisplayMode) -> &'static Palette {
    match mode {
        DisplayMode::Dark => &DARK_PALETTE,
        DisplayMode::Light => &LIGHT_PALETTE,
    }
}

/// Resolves every region of the page for one mode. Call once per render pass
/// and hand the same sheet to every region.
pub fn resolve_styles(mode: DisplayMode) -> StyleSheet {
    let p = palette(mode);
    let body_text = Foreground {
        primary: p.text,
        secondary: Some(p.text_muted),
    };

    StyleSheet {
        mode,
        accent: p.accent,
        navbar: RegionStyle {
            background: Background::Solid(p.navbar),
            foreground: Foreground {
                primary: p.accent,
                secondary: Some(p.text),
            },
            glow: Some(Glow {
                blur_px: 12,
                spread_px: 0,
                color: p.accent_glow,
            }),
        },
        hero: RegionStyle {
            background: Background::radial("top left", &p.hero),
            foreground: body_text,
            glow: None,
        },
        about: RegionStyle {
            background: Background::linear(135, &p.about),
            foreground: body_text,
            glow: None,
        },
        skills: RegionStyle {
            background: Background::linear(135, &p.skills),
            foreground: body_text,
            glow: None,
        },
        projects: RegionStyle {
            background: Background::linear(135, &p.projects),
            foreground: body_text,
            glow: None,
        },
        contact: RegionStyle {
            background: Background::radial("bottom right", &p.contact),
            foreground: body_text,
            glow: None,
        },
        footer: RegionStyle {
            background: Background::Solid(p.footer),
            foreground: Foreground {
                primary: p.footer_text,
                secondary: Some(p.footer_muted),
            },
            glow: None,
        },
        card: RegionStyle {
            background: Background::Solid(p.card),
            foreground: body_text,
            glow: Some(Glow {
                blur_px: 24,
                spread_px: 2,
                color: p.card_border_glow,
            }),
        },
        scroll_button: RegionStyle {
            background: Background::Solid(p.accent),
            foreground: Foreground {
                primary: p.on_accent,
                secondary: None,
            },
            glow: Some(Glow {
                blur_px: 16,
                spread_px: 2,
                color: p.accent_glow,
            }),
        },
        tags: p.tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolver_is_deterministic() {
        for mode in [DisplayMode::Dark, DisplayMode::Light] {
            assert_eq!(resolve_styles(mode), resolve_styles(mode));
        }
    }

    #[test]
    fn every_region_is_resolved_for_both_modes() {
        for mode in [DisplayMode::Dark, DisplayMode::Light] {
            let sheet = resolve_styles(mode);
            assert_eq!(sheet.mode, mode);

            for region in Region::ALL {
                let style = sheet.region(region);
                assert!(!style.foreground.primary.is_empty(), "{}", region.as_str());
                assert!(!style.background.to_css().is_empty(), "{}", region.as_str());
                if let Background::Linear { stops, .. } | Background::Radial { stops, .. } =
                    &style.background
                {
                    assert!(stops.len() >= 2, "{} needs two stops", region.as_str());
                }
            }
        }
    }

    #[test]
    fn navbar_foreground_follows_mode_accent() {
        let dark = resolve_styles(DisplayMode::Dark);
        let light = resolve_styles(DisplayMode::Light);

        assert_eq!(dark.navbar.foreground.primary, "#61dafb");
        assert_eq!(light.navbar.foreground.primary, "#1565c0");
        assert_eq!(light.navbar.foreground.primary, light.accent);
    }

    #[test]
    fn modes_do_not_share_region_styles() {
        let dark = resolve_styles(DisplayMode::Dark);
        let light = resolve_styles(DisplayMode::Light);

        for region in Region::ALL {
            assert_ne!(dark.region(region), light.region(region), "{}", region.as_str());
        }
    }

    #[test]
    fn gradients_render_ordered_stops() {
        let background = Background::linear(135, &["#2d2f36", "#24252a"]);
        assert_eq!(
            background.to_css(),
            "linear-gradient(135deg, #2d2f36 0%, #24252a 100%)"
        );

        let background = Background::radial("top left", &["#000", "#111", "#222"]);
        assert_eq!(
            background.to_css(),
            "radial-gradient(circle at top left, #000 0%, #111 50%, #222 100%)"
        );
    }

    #[test]
    fn inline_style_includes_secondary_and_glow() {
        let style = RegionStyle {
            background: Background::Solid("#111111"),
            foreground: Foreground {
                primary: "#ffffff",
                secondary: Some("#888888"),
            },
            glow: Some(Glow {
                blur_px: 12,
                spread_px: 0,
                color: "red",
            }),
        };

        assert_eq!(
            style.inline_style(),
            "background: #111111; color: #ffffff; --text-secondary: #888888; box-shadow: 0 0 12px 0px red;"
        );
    }

    #[test]
    fn tag_colors_differ_per_category() {
        let sheet = resolve_styles(DisplayMode::Dark);
        let core = sheet.tag_color(ColorToken::Core);
        let backend = sheet.tag_color(ColorToken::Backend);
        let exploring = sheet.tag_color(ColorToken::Exploring);

        assert_ne!(core, backend);
        assert_ne!(backend, exploring);
        assert_ne!(core, exploring);
    }
}
