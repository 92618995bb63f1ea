use dioxus::prelude::*;

use api::{ANCHOR_CONTACT, config::SiteConfig};

use crate::{common::themed, theme::use_theme};

mod form;
use form::MessageForm;

fn link_icon(name: &str) -> &'static str {
    match name {
        "Email" => "✉",
        "LinkedIn" => "in",
        "GitHub" => "⌥",
        "Instagram" => "◎",
        "Location" => "⌖",
        _ => "↗",
    }
}

#[component]
pub fn Contact() -> Element {
    let theme = use_theme();
    let config = use_context::<SiteConfig>();

    rsx! {
        section { id: ANCHOR_CONTACT, class: themed("section contact", theme()),
            div { class: "section-inner",
                div { class: "section-header",
                    span { class: "section-eyebrow", "Get in Touch" }
                    h2 { class: "section-title",
                        "Let's Work "
                        span { class: "accent", "Together" }
                    }
                    p { class: "section-lead",
                        "Have a project in mind or just want to chat? Send a message and I'll get back to you."
                    }
                }

                div { class: "contact-layout",
                    div {
                        div { class: "card info-card contact-links",
                            h3 { "Find me online" }
                            for (icon, link) in config.links.iter().map(|l| (link_icon(&l.name), l)) {
                                a { key: "{link.name}", href: "{link.href}",
                                    span { style: "display: inline-block; width: 2rem;", "{icon}" }
                                    "{link.name}"
                                }
                            }
                        }

                        div { class: "card info-card", style: "margin-top: var(--space-6);",
                            h3 { "Prefer a call?" }
                            p { "Book a slot that suits you." }
                            a { href: "{config.schedule_href}",
                                button { class: "btn btn-secondary", style: "margin-top: var(--space-4);",
                                    "Schedule a Call"
                                }
                            }
                        }
                    }

                    MessageForm { config: config.contact.clone() }
                }
            }
        }
    }
}
