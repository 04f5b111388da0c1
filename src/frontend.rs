use serde_json::json;
use web_sys::{window, MouseEvent, ScrollToOptions};
use yew::prelude::*;

use crate::clock::BrowserClock;
use crate::config::PageConfig;
use crate::content::{NAV_SECTIONS, PROJECTS};
use crate::links::LinkAttrs;
use crate::logging::{log_event, LogLevel};
use crate::nav::NavOverlay;
use crate::page::{
    render_page, AboutView, ContactView, FooterView, HeroView, NavLinkView, NavbarView, PageState,
    ProjectsView, SectionFrame, SkillsView,
};
use crate::scroll::{scroll_to_origin, ScrollBehavior, ScrollRequest, Viewport};
use crate::theme::{DisplayMode, ThemeState};

fn apply_theme(mode: DisplayMode) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let current = root
                .get_attribute("data-theme")
                .and_then(|value| DisplayMode::parse(&value));
            if current != Some(mode) {
                let _ = root.set_attribute("data-theme", mode.as_str());
            }
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn initial_theme(config: PageConfig) -> ThemeState {
    ThemeState::with_motion(config.theme_transition_ms, prefers_reduced_motion())
}

struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to(&self, request: ScrollRequest) {
        let Some(win) = window() else {
            return;
        };

        let options = ScrollToOptions::new();
        options.set_top(request.top);
        options.set_behavior(match request.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        win.scroll_to_with_scroll_to_options(&options);
    }
}

fn link_target(link: &LinkAttrs) -> (Option<AttrValue>, Option<AttrValue>) {
    (
        link.target.map(AttrValue::from),
        link.rel.map(AttrValue::from),
    )
}

#[derive(Properties, PartialEq)]
struct NavLinksProps {
    links: Vec<NavLinkView>,
    class: AttrValue,
    on_select: Callback<&'static str>,
}

#[function_component(NavLinks)]
fn nav_links(props: &NavLinksProps) -> Html {
    html! {
        <ul class={props.class.clone()}>
            { for props.links.iter().map(|link| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    let id = link.id;
                    Callback::from(move |_: MouseEvent| on_select.emit(id))
                };
                html! {
                    <li key={link.id}>
                        <a href={link.href.clone()} onclick={onclick}>{link.label}</a>
                    </li>
                }
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    view: NavbarView,
    on_toggle_theme: Callback<MouseEvent>,
    on_open: Callback<MouseEvent>,
    on_close: Callback<MouseEvent>,
    on_dismiss: Callback<MouseEvent>,
    on_select: Callback<&'static str>,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let view = &props.view;

    html! {
        <>
            <header class="site-navbar" style={view.style.clone()}>
                <a class="brand" href={view.brand_href.clone()}>{view.brand}</a>
                <nav aria-label="Primary">
                    <NavLinks
                        links={view.links.clone()}
                        class="nav-inline"
                        on_select={props.on_select.clone()}
                    />
                </nav>
                <div class="navbar-actions">
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={view.toggle.label.clone()}
                        aria-pressed={view.toggle.pressed.to_string()}
                        onclick={props.on_toggle_theme.clone()}
                    >
                        <span aria-hidden="true">{view.toggle.icon}</span>
                    </button>
                    <button
                        class="menu-trigger"
                        type="button"
                        aria-label="Open navigation"
                        aria-expanded={view.panel_open.to_string()}
                        aria-controls="nav-drawer"
                        onclick={props.on_open.clone()}
                    >
                        <span aria-hidden="true">{"☰"}</span>
                    </button>
                </div>
            </header>
            if view.panel_open {
                <div class="nav-backdrop" onclick={props.on_dismiss.clone()}></div>
            }
            <aside
                id="nav-drawer"
                class={classes!("nav-drawer", view.panel_open.then_some("is-open"))}
                style={view.panel_style.clone()}
                data-state={view.panel_state}
                aria-hidden={(!view.panel_open).to_string()}
                inert={view.drawer_inert.then_some("")}
            >
                <button
                    class="drawer-close"
                    type="button"
                    aria-label="Close navigation"
                    onclick={props.on_close.clone()}
                >
                    <span aria-hidden="true">{"✕"}</span>
                </button>
                <NavLinks
                    links={view.links.clone()}
                    class="nav-drawer-links"
                    on_select={props.on_select.clone()}
                />
            </aside>
        </>
    }
}

fn section_heading(frame: &SectionFrame) -> Html {
    html! { <h2 class="section-heading">{frame.heading}</h2> }
}

fn hero_section(view: &HeroView) -> Html {
    html! {
        <section
            id={view.frame.anchor}
            class={classes!("page-section", view.frame.region)}
            style={view.frame.style.clone()}
        >
            <img
                class="avatar"
                src={view.avatar}
                alt={format!("Portrait of {}", view.name)}
                style={view.avatar_style.clone()}
            />
            <h1>
                {"Hi, I'm "}
                <span class="hero-name" style={view.name_style.clone()}>{view.name}</span>
            </h1>
            <p class="hero-headline">{view.headline}</p>
            <p class="muted">{view.tagline}</p>
            <div class="hero-actions">
                { for view.actions.iter().map(|action| html! {
                    <a
                        class={classes!("cta", action.primary.then_some("cta-primary"))}
                        href={action.link.href}
                        style={action.primary.then(|| view.action_style.clone())}
                    >
                        {action.label}
                    </a>
                }) }
            </div>
        </section>
    }
}

fn about_section(view: &AboutView) -> Html {
    html! {
        <section
            id={view.frame.anchor}
            class={classes!("page-section", view.frame.region)}
            style={view.frame.style.clone()}
        >
            { section_heading(&view.frame) }
            { for view.paragraphs.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
        </section>
    }
}

fn skills_section(view: &SkillsView) -> Html {
    html! {
        <section
            id={view.frame.anchor}
            class={classes!("page-section", view.frame.region)}
            style={view.frame.style.clone()}
        >
            { section_heading(&view.frame) }
            <div class="skill-groups">
                { for view.groups.iter().map(|group| html! {
                    <div class="card skill-group" style={view.card_style.clone()}>
                        <h3>{group.title}</h3>
                        <ul class="tag-list">
                            { for group.tags.iter().map(|tag| html! {
                                <li class="tag" style={tag.style.clone()}>{tag.label}</li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn projects_section(view: &ProjectsView) -> Html {
    html! {
        <section
            id={view.frame.anchor}
            class={classes!("page-section", view.frame.region)}
            style={view.frame.style.clone()}
        >
            { section_heading(&view.frame) }
            <div class="project-grid">
                { for view.cards.iter().map(|card| {
                    let (repo_target, repo_rel) = link_target(&card.repo);
                    let (live_target, live_rel) = link_target(&card.live);
                    html! {
                        <article class="card project-card" style={view.card_style.clone()}>
                            <img src={card.image} alt={card.image_alt.clone()} loading="lazy" />
                            <h3>{card.title}</h3>
                            <p class="muted">{card.description}</p>
                            <div class="project-links">
                                <a href={card.repo.href} target={repo_target} rel={repo_rel} style={view.link_style.clone()}>
                                    {"Code"}
                                </a>
                                <a href={card.live.href} target={live_target} rel={live_rel} style={view.link_style.clone()}>
                                    {"Live demo"}
                                </a>
                            </div>
                        </article>
                    }
                }) }
            </div>
        </section>
    }
}

fn contact_section(view: &ContactView) -> Html {
    html! {
        <section
            id={view.frame.anchor}
            class={classes!("page-section", view.frame.region)}
            style={view.frame.style.clone()}
        >
            { section_heading(&view.frame) }
            <ul class="card contact-list" style={view.card_style.clone()}>
                { for view.entries.iter().map(|entry| {
                    let (target, rel) = link_target(&entry.link);
                    html! {
                        <li>
                            <span class="muted">{entry.label}</span>
                            <a href={entry.link.href} target={target} rel={rel} data-link={entry.link.kind.as_str()}>
                                {entry.value}
                                if entry.link.opens_new_tab() {
                                    <span class="sr-only">{" (opens in a new tab)"}</span>
                                }
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}

fn footer(view: &FooterView) -> Html {
    html! {
        <footer class="site-footer" style={view.style.clone()}>
            <ul class="footer-links">
                { for view.links.iter().map(|link| html! {
                    <li><a href={link.href.clone()}>{link.label}</a></li>
                }) }
            </ul>
            <p class="copyright">{view.copyright.clone()}</p>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| PageConfig::from_build_env());
    let theme = {
        let config = *config;
        use_state(move || initial_theme(config))
    };
    let nav = use_state(NavOverlay::default);

    {
        let log_level = config.log_level;
        let mode = theme.mode();
        use_effect_with((), move |_| {
            log_event(
                log_level,
                LogLevel::Info,
                "page_mounted",
                json!({ "mode": mode, "sections": NAV_SECTIONS.len(), "projects": PROJECTS.len() }),
            );
            || ()
        });
    }

    use_effect_with(theme.mode(), |mode| {
        apply_theme(*mode);
        || ()
    });

    let on_toggle_theme = {
        let theme = theme.clone();
        let log_level = config.log_level;
        Callback::from(move |_: MouseEvent| {
            let mut next = *theme;
            next.toggle();
            log_event(
                log_level,
                LogLevel::Info,
                "theme_toggled",
                json!({
                    "from": theme.mode(),
                    "to": next.mode(),
                    "transition_ms": next.transition().duration_ms,
                }),
            );
            theme.set(next);
        })
    };

    let on_open = {
        let nav = nav.clone();
        let log_level = config.log_level;
        Callback::from(move |_: MouseEvent| {
            let mut next = *nav;
            next.open();
            log_event(log_level, LogLevel::Debug, "nav_panel_opened", json!({ "reason": "trigger" }));
            nav.set(next);
        })
    };

    let on_close = {
        let nav = nav.clone();
        let log_level = config.log_level;
        Callback::from(move |_: MouseEvent| {
            let mut next = *nav;
            next.close();
            log_event(log_level, LogLevel::Debug, "nav_panel_closed", json!({ "reason": "trigger" }));
            nav.set(next);
        })
    };

    let on_dismiss = {
        let nav = nav.clone();
        let log_level = config.log_level;
        Callback::from(move |_: MouseEvent| {
            let mut next = *nav;
            next.dismiss();
            log_event(log_level, LogLevel::Debug, "nav_panel_closed", json!({ "reason": "dismiss" }));
            nav.set(next);
        })
    };

    // The anchor's default action performs the jump.
    let on_select = {
        let nav = nav.clone();
        let log_level = config.log_level;
        Callback::from(move |id: &'static str| {
            let mut next = *nav;
            let jump = next.select_section(id);
            log_event(
                log_level,
                LogLevel::Debug,
                "nav_section_selected",
                json!({
                    "section": id,
                    "known": jump.is_some(),
                    "href": jump.map(|jump| jump.href()),
                }),
            );
            nav.set(next);
        })
    };

    let on_scroll_top = {
        let log_level = config.log_level;
        Callback::from(move |_: MouseEvent| {
            let request = scroll_to_origin(&WindowViewport);
            log_event(
                log_level,
                LogLevel::Debug,
                "scroll_to_origin",
                json!({ "behavior": request.behavior }),
            );
        })
    };

    let state = PageState {
        theme: *theme,
        nav: *nav,
    };
    let view = render_page(&state, &BrowserClock);

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            // Navbar sits outside the keyed subtree so the toggle keeps focus
            // across a mode change; only main and footer remount and re-fade.
            <Navbar
                view={view.navbar.clone()}
                on_toggle_theme={on_toggle_theme}
                on_open={on_open}
                on_close={on_close}
                on_dismiss={on_dismiss}
                on_select={on_select}
            />
            <div class="theme-shell" data-theme={view.mode.as_str()}>
                <div
                    key={view.transition.key.as_str()}
                    class="theme-root theme-fade"
                    style={view.transition.animation_css()}
                >
                    <main id="content">
                        { hero_section(&view.hero) }
                        { about_section(&view.about) }
                        { skills_section(&view.skills) }
                        { projects_section(&view.projects) }
                        { contact_section(&view.contact) }
                    </main>
                    { footer(&view.footer) }
                </div>
            </div>
            <button
                class="scroll-top"
                type="button"
                aria-label={view.scroll_button.label}
                style={view.scroll_button.style.clone()}
                onclick={on_scroll_top}
            >
                <span aria-hidden="true">{"↑"}</span>
            </button>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
