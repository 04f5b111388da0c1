use crate::clock::Clock;
use crate::content::{
    copyright_line, NavSection, CONTACTS, NAV_SECTIONS, PROFILE, PROJECTS, SKILL_GROUPS,
};
use crate::links::LinkAttrs;
use crate::nav::NavOverlay;
use crate::style::{resolve_styles, Region, StyleSheet};
use crate::theme::{DisplayMode, ThemeState, ThemeTransition};

/// Everything the page reacts to. Both fields are the only copies of their
/// state; the frontend keeps one handle for each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub theme: ThemeState,
    pub nav: NavOverlay,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLinkView {
    pub id: &'static str,
    pub label: &'static str,
    pub href: String,
}

impl From<NavSection> for NavLinkView {
    fn from(section: NavSection) -> Self {
        Self {
            id: section.id,
            label: section.label,
            href: section.href(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeToggleView {
    pub label: String,
    pub icon: &'static str,
    pub pressed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavbarView {
    pub style: String,
    pub brand: &'static str,
    pub brand_href: String,
    pub links: Vec<NavLinkView>,
    pub toggle: ThemeToggleView,
    pub panel_open: bool,
    /// Closed drawer stays mounted for its slide-out, but must not take focus.
    pub drawer_inert: bool,
    pub panel_state: &'static str,
    pub panel_style: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionFrame {
    pub anchor: &'static str,
    pub region: &'static str,
    pub style: String,
    pub heading: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub link: LinkAttrs,
    pub primary: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroView {
    pub frame: SectionFrame,
    pub name: &'static str,
    pub name_style: String,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub avatar: &'static str,
    pub avatar_style: String,
    pub actions: Vec<CallToAction>,
    pub action_style: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AboutView {
    pub frame: SectionFrame,
    pub paragraphs: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillTagView {
    pub label: &'static str,
    pub style: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillGroupView {
    pub title: &'static str,
    pub tags: Vec<SkillTagView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillsView {
    pub frame: SectionFrame,
    pub card_style: String,
    pub groups: Vec<SkillGroupView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCardView {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub image_alt: String,
    pub repo: LinkAttrs,
    pub live: LinkAttrs,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectsView {
    pub frame: SectionFrame,
    pub card_style: String,
    pub link_style: String,
    pub cards: Vec<ProjectCardView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactLinkView {
    pub label: &'static str,
    pub value: &'static str,
    pub link: LinkAttrs,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactView {
    pub frame: SectionFrame,
    pub card_style: String,
    pub entries: Vec<ContactLinkView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterView {
    pub style: String,
    pub links: Vec<NavLinkView>,
    pub copyright: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollButtonView {
    pub style: String,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub mode: DisplayMode,
    pub transition: ThemeTransition,
    pub navbar: NavbarView,
    pub hero: HeroView,
    pub about: AboutView,
    pub skills: SkillsView,
    pub projects: ProjectsView,
    pub contact: ContactView,
    pub footer: FooterView,
    pub scroll_button: ScrollButtonView,
}

impl PageView {
    /// Section landmarks in page order; each matches one navigation entry.
    pub fn landmarks(&self) -> [&'static str; 5] {
        [
            self.hero.frame.anchor,
            self.about.frame.anchor,
            self.skills.frame.anchor,
            self.projects.frame.anchor,
            self.contact.frame.anchor,
        ]
    }
}

pub fn render_page(state: &PageState, clock: &impl Clock) -> PageView {
    let sheet = resolve_styles(state.theme.mode());
    let nav_links: Vec<NavLinkView> = NAV_SECTIONS.iter().copied().map(NavLinkView::from).collect();

    PageView {
        mode: sheet.mode,
        transition: state.theme.transition(),
        navbar: navbar_view(&sheet, state, nav_links.clone()),
        hero: hero_view(&sheet),
        about: AboutView {
            frame: frame(&sheet, Region::About, &NAV_SECTIONS[1], "About Me"),
            paragraphs: PROFILE.about,
        },
        skills: skills_view(&sheet),
        projects: projects_view(&sheet),
        contact: contact_view(&sheet),
        footer: FooterView {
            style: sheet.footer.inline_style(),
            links: nav_links,
            copyright: copyright_line(clock.current_year()),
        },
        scroll_button: ScrollButtonView {
            style: sheet.scroll_button.inline_style(),
            label: "Scroll to top",
        },
    }
}

fn frame(
    sheet: &StyleSheet,
    region: Region,
    section: &NavSection,
    heading: &'static str,
) -> SectionFrame {
    SectionFrame {
        anchor: section.id,
        region: region.as_str(),
        style: sheet.region(region).inline_style(),
        heading,
    }
}

fn navbar_view(sheet: &StyleSheet, state: &PageState, links: Vec<NavLinkView>) -> NavbarView {
    let mode = sheet.mode;
    let panel_style = format!(
        "background: {}; color: {};",
        sheet.card.background.to_css(),
        sheet.navbar.foreground.secondary.unwrap_or(sheet.navbar.foreground.primary)
    );

    NavbarView {
        style: sheet.navbar.inline_style(),
        brand: PROFILE.name,
        brand_href: NAV_SECTIONS[0].href(),
        links,
        toggle: ThemeToggleView {
            label: mode.toggle_label(),
            icon: mode.icon(),
            pressed: mode.pressed(),
        },
        panel_open: state.nav.is_open(),
        drawer_inert: !state.nav.is_open(),
        panel_state: state.nav.state().as_str(),
        panel_style,
    }
}

fn hero_view(sheet: &StyleSheet) -> HeroView {
    let accent_glow = sheet
        .scroll_button
        .glow
        .map(|glow| glow.to_css())
        .unwrap_or_default();

    HeroView {
        frame: frame(sheet, Region::Hero, &NAV_SECTIONS[0], "Home"),
        name: PROFILE.name,
        name_style: format!("color: {};", sheet.accent),
        headline: PROFILE.headline,
        tagline: PROFILE.tagline,
        avatar: PROFILE.avatar,
        avatar_style: format!("border-color: {}; box-shadow: {accent_glow};", sheet.accent),
        actions: vec![
            CallToAction {
                label: "View projects",
                link: LinkAttrs::new("#projects"),
                primary: true,
            },
            CallToAction {
                label: "Get in touch",
                link: LinkAttrs::new("#contact"),
                primary: false,
            },
        ],
        action_style: sheet.scroll_button.inline_style(),
    }
}

fn skills_view(sheet: &StyleSheet) -> SkillsView {
    let groups = SKILL_GROUPS
        .iter()
        .map(|group| SkillGroupView {
            title: group.title,
            tags: group
                .tags
                .iter()
                .map(|tag| {
                    let color = sheet.tag_color(tag.category);
                    SkillTagView {
                        label: tag.label,
                        style: format!("color: {color}; border-color: {color};"),
                    }
                })
                .collect(),
        })
        .collect();

    SkillsView {
        frame: frame(sheet, Region::Skills, &NAV_SECTIONS[2], "Skills"),
        card_style: sheet.card.inline_style(),
        groups,
    }
}

fn projects_view(sheet: &StyleSheet) -> ProjectsView {
    let cards = PROJECTS
        .iter()
        .map(|project| ProjectCardView {
            title: project.title,
            description: project.description,
            image: project.image,
            image_alt: format!("{} screenshot", project.title),
            repo: LinkAttrs::new(project.repo),
            live: LinkAttrs::new(project.live),
        })
        .collect();

    ProjectsView {
        frame: frame(sheet, Region::Projects, &NAV_SECTIONS[3], "Projects"),
        card_style: sheet.card.inline_style(),
        link_style: format!("color: {};", sheet.accent),
        cards,
    }
}

fn contact_view(sheet: &StyleSheet) -> ContactView {
    let entries = CONTACTS
        .iter()
        .map(|entry| ContactLinkView {
            label: entry.label,
            value: entry.value,
            link: LinkAttrs::new(entry.href),
        })
        .collect();

    ContactView {
        frame: frame(sheet, Region::Contact, &NAV_SECTIONS[4], "Contact"),
        card_style: sheet.card.inline_style(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::links::LinkKind;
    use crate::nav::PanelState;

    const CLOCK: FixedClock = FixedClock(2025);

    #[test]
    fn landmarks_match_navigation_one_to_one() {
        let view = render_page(&PageState::default(), &CLOCK);
        let ids: Vec<_> = NAV_SECTIONS.iter().map(|section| section.id).collect();

        assert_eq!(view.landmarks().as_slice(), ids.as_slice());
        assert_eq!(view.navbar.links.len(), 5);
        assert_eq!(view.navbar.links, view.footer.links);
        assert_eq!(view.navbar.links[3].href, "#projects");
    }

    #[test]
    fn every_region_reflects_the_same_mode() {
        let mut state = PageState::default();
        state.theme.toggle();
        let view = render_page(&state, &CLOCK);
        let light = resolve_styles(DisplayMode::Light);

        assert_eq!(view.mode, DisplayMode::Light);
        assert_eq!(view.transition.key, DisplayMode::Light);
        assert_eq!(view.navbar.style, light.navbar.inline_style());
        assert_eq!(view.hero.frame.style, light.hero.inline_style());
        assert_eq!(view.about.frame.style, light.about.inline_style());
        assert_eq!(view.skills.frame.style, light.skills.inline_style());
        assert_eq!(view.projects.frame.style, light.projects.inline_style());
        assert_eq!(view.contact.frame.style, light.contact.inline_style());
        assert_eq!(view.footer.style, light.footer.inline_style());
        assert_eq!(view.scroll_button.style, light.scroll_button.inline_style());
    }

    #[test]
    fn render_is_pure() {
        let state = PageState::default();
        assert_eq!(render_page(&state, &CLOCK), render_page(&state, &CLOCK));
    }

    #[test]
    fn footer_uses_injected_year() {
        let view = render_page(&PageState::default(), &FixedClock(2031));
        assert_eq!(view.footer.copyright, "© 2031 Nikko | All Rights Reserved");
    }

    #[test]
    fn panel_flag_flows_into_navbar() {
        let mut state = PageState::default();
        let closed = render_page(&state, &CLOCK).navbar;
        assert!(!closed.panel_open);
        assert!(closed.drawer_inert);

        state.nav.open();
        let view = render_page(&state, &CLOCK);
        assert!(view.navbar.panel_open);
        assert!(!view.navbar.drawer_inert);
        assert_eq!(view.navbar.panel_state, "open");
        assert_eq!(view.mode, DisplayMode::Dark);
    }

    #[test]
    fn toggle_affordance_tracks_mode() {
        let mut state = PageState::default();
        let dark = render_page(&state, &CLOCK).navbar.toggle;
        state.theme.toggle();
        let light = render_page(&state, &CLOCK).navbar.toggle;

        assert!(dark.pressed);
        assert_eq!(dark.label, "Switch to light theme");
        assert!(!light.pressed);
        assert_ne!(dark.icon, light.icon);
    }

    #[test]
    fn project_cards_link_out_in_new_tabs() {
        let view = render_page(&PageState::default(), &CLOCK);
        assert_eq!(view.projects.cards.len(), 6);
        for card in &view.projects.cards {
            assert_eq!(card.repo.kind, LinkKind::External);
            assert!(card.live.opens_new_tab());
        }
    }

    #[test]
    fn skill_tags_take_category_colors() {
        let view = render_page(&PageState::default(), &CLOCK);
        let sheet = resolve_styles(DisplayMode::Dark);
        let first = &view.skills.groups[0].tags[0];

        assert_eq!(view.skills.groups.len(), 3);
        assert!(first
            .style
            .contains(sheet.tag_color(crate::style::ColorToken::Core)));
    }

    #[test]
    fn scenario_toggle_open_select_scroll() {
        use crate::scroll::{scroll_to_origin, ScrollRequest, Viewport};
        use std::cell::Cell;

        struct CountingViewport(Cell<usize>);

        impl Viewport for CountingViewport {
            fn scroll_to(&self, request: ScrollRequest) {
                assert_eq!(request, ScrollRequest::origin());
                self.0.set(self.0.get() + 1);
            }
        }

        let mut state = PageState::default();
        assert_eq!(state.theme.mode(), DisplayMode::Dark);

        state.theme.toggle();
        let view = render_page(&state, &CLOCK);
        assert_eq!(view.mode, DisplayMode::Light);
        assert!(view.navbar.style.contains("color: #1565c0;"));

        state.nav.open();
        assert_eq!(state.nav.state(), PanelState::Open);

        let jump = state
            .nav
            .select_section("projects")
            .expect("projects landmark exists");
        assert_eq!(state.nav.state(), PanelState::Closed);
        assert_eq!(jump.section.label, "Projects");
        assert!(render_page(&state, &CLOCK).landmarks().contains(&jump.section.id));

        let before = state;
        let viewport = CountingViewport(Cell::new(0));
        scroll_to_origin(&viewport);
        assert_eq!(viewport.0.get(), 1);
        assert_eq!(state, before);
    }
}
