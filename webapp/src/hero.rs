use dioxus::prelude::*;

use api::{ANCHOR_HOME, config::SiteConfig};

use crate::{common::themed, theme::use_theme};

#[component]
pub fn Hero() -> Element {
    let theme = use_theme();
    let config = use_context::<SiteConfig>();

    let connect = config.link("LinkedIn").map(|l| l.href.clone()).unwrap_or_default();
    let say_hi = config.link("Instagram").map(|l| l.href.clone()).unwrap_or_default();

    rsx! {
        section { id: ANCHOR_HOME, class: themed("hero", theme()),
            div { class: "hero-portrait",
                img { src: "/assets/portrait.png", alt: "{config.owner}", draggable: false }
            }

            div { class: "hero-content",
                p { class: "hero-greeting",
                    "Hi, I'm "
                    span { class: "accent", "{config.owner}" }
                    " 👋"
                }
                h1 { class: "hero-title", "{config.tagline}" }
                p { class: "section-lead",
                    "A developer who enjoys building modern, responsive web applications from the database up to the interface."
                }

                div { class: "hero-actions",
                    a { href: "{connect}",
                        button { class: "btn btn-secondary", "Connect with me." }
                    }
                    a { href: "{say_hi}",
                        button { class: "btn btn-primary", "Say Hi! 👋🏻" }
                    }
                }
            }
        }
    }
}
