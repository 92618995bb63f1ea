use dioxus::prelude::*;

use api::{
    ANCHOR_HACKATHON,
    content::{Hackathon, hackathon_stats, hackathons},
};

use crate::{common::themed, theme::use_theme};

#[derive(Clone, PartialEq, Props)]
struct TimelineEntryProps {
    hackathon: Hackathon,
}

#[component]
fn TimelineEntry(props: TimelineEntryProps) -> Element {
    let hackathon = props.hackathon;

    rsx! {
        div { class: "card timeline-entry",
            span { class: "marker", "{hackathon.icon}" }
            if hackathon.featured {
                span { class: "badge badge-featured", style: "left: auto; right: var(--space-3);",
                    "{hackathon.achievement}"
                }
            }
            div { class: "timeline-meta",
                span { "{hackathon.date}" }
                span { "{hackathon.category}" }
                span { "Team of {hackathon.team_size}" }
            }
            h3 { class: "section-title", style: "font-size: 1.5rem; margin: var(--space-2) 0;",
                "{hackathon.title}"
            }
            p { style: "color: var(--primary); font-weight: 500;", "{hackathon.subtitle}" }
            ul {
                for detail in hackathon.details.iter() {
                    li { "{detail}" }
                }
            }
            div { class: "card-tags",
                for tech in hackathon.technologies.iter() {
                    span { class: "tag", "{tech}" }
                }
            }
        }
    }
}

#[component]
pub fn HackathonJourney() -> Element {
    let theme = use_theme();

    let entries = hackathons();
    let stats = hackathon_stats(&entries);

    rsx! {
        section { id: ANCHOR_HACKATHON, class: themed("section hackathon", theme()),
            div { class: "section-inner",
                div { class: "section-header",
                    span { class: "section-eyebrow", "Competitions & Events" }
                    h2 { class: "section-title",
                        "Hackathon "
                        span { class: "accent", "Journey" }
                    }
                    p { class: "section-lead",
                        "Events where I built under pressure, worked in teams and learned fast."
                    }
                }

                div { class: "stats-grid",
                    div {
                        div { class: "stat-value", "{stats.events}" }
                        div { class: "stat-label", "Hackathons" }
                    }
                    div {
                        div { class: "stat-value", "{stats.featured}" }
                        div { class: "stat-label", "Highlights" }
                    }
                    div {
                        div { class: "stat-value", "{stats.technologies}" }
                        div { class: "stat-label", "Technologies" }
                    }
                }

                div { class: "timeline",
                    for (id, hackathon) in entries.into_iter().map(|h| (h.id, h)) {
                        TimelineEntry { key: "{id}", hackathon }
                    }
                }
            }
        }
    }
}
