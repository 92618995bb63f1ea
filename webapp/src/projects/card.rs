use dioxus::prelude::*;

use api::project::{ProjectCard, ProjectStatus};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardViewProps {
    card: ProjectCard,
}

#[component]
pub fn ProjectCardView(props: ProjectCardViewProps) -> Element {
    let card = props.card;

    let status_class = match card.status {
        ProjectStatus::Completed => "badge badge-completed",
        ProjectStatus::InProgress => "badge badge-progress",
    };

    rsx! {
        div { class: "card project-card",
            div { class: "card-image",
                img { src: "{card.image_ref}", alt: "{card.title}" }
                if card.featured {
                    span { class: "badge badge-featured", "Featured" }
                }
                span { class: status_class, "{card.status.label()}" }
            }
            div { class: "card-body",
                span { class: "tag", "{card.category}" }
                h3 { style: "margin-top: var(--space-3);", "{card.title}" }
                p { "{card.description}" }
                div { class: "card-tags",
                    for tech in card.technologies.iter() {
                        span { class: "tag", "{tech}" }
                    }
                }
                div { class: "card-links",
                    a { href: "{card.demo_link}", "Live Demo" }
                    a { href: "{card.code_link}", "Source Code" }
                }
            }
        }
    }
}
