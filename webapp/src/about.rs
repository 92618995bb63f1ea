use dioxus::prelude::*;

use api::{
    ANCHOR_ABOUT,
    content::{about_cards, tools},
};

use crate::{common::themed, theme::use_theme};

#[component]
pub fn About() -> Element {
    let theme = use_theme();

    rsx! {
        section { id: ANCHOR_ABOUT, class: themed("section about", theme()),
            div { class: "section-inner",
                div { class: "section-header",
                    span { class: "section-eyebrow", "Get to Know Me" }
                    h2 { class: "section-title",
                        "About "
                        span { class: "accent", "Me" }
                    }
                    p { class: "section-lead",
                        "A frontend-leaning developer with a strong foundation in modern web technologies, always eager to learn and create meaningful digital experiences."
                    }
                }

                div { class: "about-body",
                    p { class: "section-lead",
                        "I enjoy building scalable web applications and I am always looking for opportunities to grow my skills, collaborate with experienced teams and contribute to exciting projects."
                    }

                    div { class: "card-grid",
                        for card in about_cards() {
                            div { key: "{card.title}", class: "card info-card",
                                div { class: "icon", "{card.icon}" }
                                h3 { "{card.title}" }
                                ul {
                                    for item in card.items.iter() {
                                        li { "{item}" }
                                    }
                                }
                            }
                        }
                    }

                    h3 { class: "section-title", "Tools and Technologies" }
                    div { class: "tools",
                        for tool in tools() {
                            div { key: "{tool.name}", class: "tool",
                                img { src: "{tool.icon_ref}", alt: "{tool.name}" }
                                span { "{tool.name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
