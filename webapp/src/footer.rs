use chrono::{Datelike, Local};
use dioxus::prelude::*;

use api::config::SiteConfig;

use crate::{common::themed, theme::use_theme};

#[component]
pub fn Footer() -> Element {
    let theme = use_theme();
    let config = use_context::<SiteConfig>();
    let year = Local::now().year();

    rsx! {
        footer { class: themed("site-footer", theme()),
            p { "© {year} {config.owner}. All rights reserved." }
        }
    }
}
