use crate::style::ColorToken;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavSection {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const NAV_SECTIONS: [NavSection; 5] = [
    NavSection {
        id: "home",
        label: "Home",
    },
    NavSection {
        id: "about",
        label: "About",
    },
    NavSection {
        id: "skills",
        label: "Skills",
    },
    NavSection {
        id: "projects",
        label: "Projects",
    },
    NavSection {
        id: "contact",
        label: "Contact",
    },
];

pub fn find_section(id: &str) -> Option<NavSection> {
    NAV_SECTIONS.iter().copied().find(|section| section.id == id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillTag {
    pub label: &'static str,
    pub category: ColorToken,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub tags: &'static [SkillTag],
}

const fn core(label: &'static str) -> SkillTag {
    SkillTag {
        label,
        category: ColorToken::Core,
    }
}

const fn backend(label: &'static str) -> SkillTag {
    SkillTag {
        label,
        category: ColorToken::Backend,
    }
}

const fn exploring(label: &'static str) -> SkillTag {
    SkillTag {
        label,
        category: ColorToken::Exploring,
    }
}

pub const SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Core",
        tags: &[
            core("JavaScript"),
            core("TypeScript"),
            core("React"),
            core("HTML"),
            core("CSS"),
            core("Material UI"),
        ],
    },
    SkillGroup {
        title: "Backend & Tools",
        tags: &[
            backend("Node.js"),
            backend("Express"),
            backend("MongoDB"),
            backend("PostgreSQL"),
            backend("Git"),
            backend("Docker"),
        ],
    },
    SkillGroup {
        title: "Exploring",
        tags: &[
            exploring("Rust"),
            exploring("WebAssembly"),
            exploring("Three.js"),
            exploring("GraphQL"),
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub repo: &'static str,
    pub live: &'static str,
}

pub const PROJECTS: [ProjectEntry; 6] = [
    ProjectEntry {
        title: "Portfolio v2",
        description: "This site: a single page with a light and dark theme, scroll reveals and a responsive navigation drawer.",
        image: "/assets/projects/portfolio.png",
        repo: "https://github.com/nikko-dev/portfolio",
        live: "https://nikko-dev.github.io/portfolio",
    },
    ProjectEntry {
        title: "Task Flow",
        description: "Kanban board with drag and drop columns, labels and offline-friendly local drafts.",
        image: "/assets/projects/task-flow.png",
        repo: "https://github.com/nikko-dev/task-flow",
        live: "https://task-flow.nikko.dev",
    },
    ProjectEntry {
        title: "Weather Now",
        description: "Forecast dashboard that charts hourly temperature and rain probability for any city.",
        image: "/assets/projects/weather-now.png",
        repo: "https://github.com/nikko-dev/weather-now",
        live: "https://weather.nikko.dev",
    },
    ProjectEntry {
        title: "Recipe Box",
        description: "Recipe manager with ingredient search, shopping lists and a REST API behind it.",
        image: "/assets/projects/recipe-box.png",
        repo: "https://github.com/nikko-dev/recipe-box",
        live: "https://recipes.nikko.dev",
    },
    ProjectEntry {
        title: "Chat Room",
        description: "Realtime chat rooms over websockets with typing indicators and message history.",
        image: "/assets/projects/chat-room.png",
        repo: "https://github.com/nikko-dev/chat-room",
        live: "https://chat.nikko.dev",
    },
    ProjectEntry {
        title: "Pixel Garden",
        description: "Small WebAssembly experiment that grows procedural pixel plants in the browser.",
        image: "/assets/projects/pixel-garden.png",
        repo: "https://github.com/nikko-dev/pixel-garden",
        live: "https://garden.nikko.dev",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactEntry {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACTS: [ContactEntry; 4] = [
    ContactEntry {
        label: "Email",
        value: "hello@nikko.dev",
        href: "mailto:hello@nikko.dev",
    },
    ContactEntry {
        label: "GitHub",
        value: "github.com/nikko-dev",
        href: "https://github.com/nikko-dev",
    },
    ContactEntry {
        label: "LinkedIn",
        value: "linkedin.com/in/nikko-dev",
        href: "https://www.linkedin.com/in/nikko-dev",
    },
    ContactEntry {
        label: "Resume",
        value: "Download PDF",
        href: "/resume.pdf",
    },
];

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub avatar: &'static str,
    pub about: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    name: "Nikko",
    headline: "Frontend Developer",
    tagline: "I build fast, accessible interfaces with a soft spot for smooth animations.",
    avatar: "/assets/avatar.png",
    about: &[
        "I'm a developer who enjoys turning rough ideas into polished, responsive web apps.",
        "Most of my work lives in the React ecosystem, and lately I've been learning Rust and WebAssembly to push performance further.",
        "When I'm not coding I'm sketching layouts, reading about typography or hunting for good coffee.",
    ],
};

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {} | All Rights Reserved", PROFILE.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_sections_are_fixed_and_ordered() {
        let labels: Vec<_> = NAV_SECTIONS.iter().map(|section| section.label).collect();
        assert_eq!(labels, ["Home", "About", "Skills", "Projects", "Contact"]);
        assert_eq!(NAV_SECTIONS[3].href(), "#projects");
    }

    #[test]
    fn section_lookup_matches_identifiers() {
        assert_eq!(find_section("skills").map(|section| section.label), Some("Skills"));
        assert_eq!(find_section("Skills"), None);
        assert_eq!(find_section("blog"), None);
    }

    #[test]
    fn skill_groups_are_tagged_by_category() {
        let expected = [ColorToken::Core, ColorToken::Backend, ColorToken::Exploring];
        for (group, token) in SKILL_GROUPS.iter().zip(expected) {
            assert!(!group.tags.is_empty(), "{} has no tags", group.title);
            assert!(group.tags.iter().all(|tag| tag.category == token));
        }
    }

    #[test]
    fn projects_have_required_fields() {
        assert_eq!(PROJECTS.len(), 6);
        for project in PROJECTS {
            assert!(!project.title.is_empty());
            assert!(!project.repo.is_empty(), "{} has no repo link", project.title);
            assert!(!project.live.is_empty(), "{} has no live link", project.title);
        }
    }

    #[test]
    fn copyright_uses_supplied_year() {
        assert_eq!(copyright_line(2024), "© 2024 Nikko | All Rights Reserved");
    }
}
