use dioxus::prelude::*;

use api::{
    config::SiteConfig,
    nav::{NavMenu, Section},
};

use crate::{
    common::themed,
    theme::{toggle_theme, use_theme},
};

#[derive(Clone, PartialEq, Props)]
struct NavBarLinkProps {
    section: Section,
    menu: Signal<NavMenu>,
}

#[component]
fn NavBarLink(props: NavBarLinkProps) -> Element {
    let section = props.section;
    let mut menu = props.menu;

    rsx! {
        a {
            class: if menu.read().active() == section { "nav-link active" } else { "nav-link" },
            href: section.href(),
            onclick: move |_| menu.write().select(section),
            "{section.label()}"
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let theme = use_theme();
    let config = use_context::<SiteConfig>();
    let mut menu = use_signal(NavMenu::default);

    let first_name = config.owner.split_whitespace().next().unwrap_or_default().to_owned();

    rsx! {
        header { class: themed("app-header", theme()),
            div { class: "nav-container",
                a { class: "logo", href: Section::Home.href(),
                    "{first_name}"
                    span { class: "accent", "." }
                }

                nav { class: "nav-links",
                    for section in Section::all() {
                        NavBarLink { key: "{section.label()}", section, menu }
                    }
                }

                div { class: "nav-actions",
                    button {
                        class: "icon-button",
                        title: if theme().is_dark() { "Switch to light mode" } else { "Switch to dark mode" },
                        onclick: move |_| toggle_theme(),
                        if theme().is_dark() { "☀" } else { "☾" }
                    }
                    button {
                        class: "icon-button menu-button",
                        onclick: move |_| menu.write().toggle(),
                        "☰"
                    }
                    a { class: "btn btn-outline resume", href: "{config.resume_href}", download: "",
                        "Resume"
                    }
                }
            }

            div { class: if menu.read().is_open() { "mobile-menu open" } else { "mobile-menu" },
                button {
                    class: "icon-button close",
                    onclick: move |_| menu.write().close(),
                    "✕"
                }
                for section in Section::all() {
                    NavBarLink { key: "{section.label()}", section, menu }
                }
                a { class: "btn btn-primary", href: "{config.resume_href}", download: "",
                    "Resume"
                }
            }
        }
    }
}
