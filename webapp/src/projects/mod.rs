use dioxus::prelude::*;

use api::{
    ANCHOR_PROJECTS,
    config::SiteConfig,
    content::projects,
    project::{CategoryFilter, ProjectCard, ProjectFilter},
};

use crate::{common::themed, theme::use_theme};

mod card;
use card::ProjectCardView;

#[derive(Clone, PartialEq, Props)]
struct FilterButtonProps {
    choice: CategoryFilter,
    filter: Signal<ProjectFilter>,
}

#[component]
fn FilterButton(props: FilterButtonProps) -> Element {
    let choice = props.choice;
    let mut filter = props.filter;

    let active = *filter.read().active() == choice;
    let label = choice.label().to_owned();

    rsx! {
        button {
            class: if active { "filter-btn active" } else { "filter-btn" },
            onclick: move |_| filter.write().set_filter(choice.clone()),
            "{label}"
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let theme = use_theme();
    let config = use_context::<SiteConfig>();
    let filter = use_signal(|| ProjectFilter::new(projects()));

    let visible: Vec<ProjectCard> = filter.read().filtered().into_iter().cloned().collect();
    let github = config.link("GitHub").map(|l| l.href.clone()).unwrap_or_default();

    rsx! {
        section { id: ANCHOR_PROJECTS, class: themed("section projects", theme()),
            div { class: "section-inner",
                div { class: "section-header",
                    span { class: "section-eyebrow", "My Work" }
                    h2 { class: "section-title",
                        "Featured "
                        span { class: "accent", "Projects" }
                    }
                    p { class: "section-lead",
                        "A showcase of recent work in web development, from full stack products to focused APIs."
                    }
                }

                div { class: "filter-bar",
                    for (label, choice) in CategoryFilter::choices().into_iter().map(|c| (c.label().to_owned(), c)) {
                        FilterButton { key: "{label}", choice, filter }
                    }
                }

                if visible.is_empty() {
                    div { class: "empty-state",
                        "No projects in \"{filter.read().active().label()}\" yet."
                    }
                } else {
                    div { class: "card-grid",
                        for (id, card) in visible.into_iter().map(|c| (c.id, c)) {
                            ProjectCardView { key: "{id}", card }
                        }
                    }
                }

                div { class: "section-header", style: "margin-top: var(--space-16);",
                    p { class: "section-lead", "More of my work lives on GitHub." }
                    div { class: "hero-actions",
                        a { href: "{github}",
                            button { class: "btn btn-secondary", "View GitHub" }
                        }
                    }
                }
            }
        }
    }
}
