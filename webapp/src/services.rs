use dioxus::prelude::*;

use api::{
    ANCHOR_CONTACT, ANCHOR_SERVICES,
    content::{Service, services},
};

use crate::{common::themed, theme::use_theme};

#[derive(Clone, PartialEq, Props)]
struct ServiceCardProps {
    service: Service,
}

#[component]
fn ServiceCard(props: ServiceCardProps) -> Element {
    let service = props.service;

    rsx! {
        div { class: "card",
            div { class: "card-image",
                img { src: "{service.image_ref}", alt: "{service.title}" }
                span { class: "badge badge-featured", "{service.category}" }
            }
            div { class: "card-body",
                h3 { "{service.title}" }
                p { "{service.description}" }
                div { class: "card-tags",
                    for feature in service.features.iter() {
                        span { class: "tag", "{feature}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Services() -> Element {
    let theme = use_theme();

    rsx! {
        section { id: ANCHOR_SERVICES, class: themed("section services", theme()),
            div { class: "section-inner",
                div { class: "section-header",
                    span { class: "section-eyebrow", "What I Offer" }
                    h2 { class: "section-title",
                        "My "
                        span { class: "accent", "Services" }
                    }
                    p { class: "section-lead",
                        "End-to-end web solutions tailored to your needs, from design to deployment."
                    }
                }

                div { class: "card-grid",
                    for (title, service) in services().into_iter().map(|s| (s.title.clone(), s)) {
                        ServiceCard { key: "{title}", service }
                    }
                }

                div { class: "section-header", style: "margin-top: var(--space-16);",
                    p { class: "section-lead", "Have a project in mind?" }
                    div { class: "hero-actions",
                        a { href: "#{ANCHOR_CONTACT}",
                            button { class: "btn btn-primary", "Let's talk" }
                        }
                    }
                }
            }
        }
    }
}
