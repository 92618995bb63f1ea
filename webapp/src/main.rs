#![allow(non_snake_case)]
use std::sync::OnceLock;

use dioxus::prelude::*;
use tracing::{error, info, warn};

use api::config::SiteConfig;

mod common;
use common::style::PORTFOLIO_STYLES;

mod theme;
use theme::use_theme_provider;

mod about;
mod contact;
mod footer;
mod hackathon;
mod hero;
mod nav;
mod projects;
mod services;

use about::About;
use contact::Contact;
use footer::Footer;
use hackathon::HackathonJourney;
use hero::Hero;
use nav::NavBar;
use projects::Projects;
use services::Services;

// embedded at build time; see SiteConfig for the fields
const SITE_CONFIG: &str = include_str!("../Portfolio.toml");

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

fn main() {
    // the log level comes from the config, so parse before the logger exists
    // and report any problem once it does
    let (config, problem) = SiteConfig::load(SITE_CONFIG);

    dioxus_logger::init(config.level()).expect("failed to init logger");

    if let Some(err) = problem {
        error!("failed to parse Portfolio.toml, using defaults: {err}");
    }
    info!("starting portfolio for {}", config.owner);

    if CONFIG.set(config).is_err() {
        warn!("site config was already set, keeping the first one");
    }

    launch(App);
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| CONFIG.get().cloned().unwrap_or_default());
    let theme = use_theme_provider();

    rsx! {
        style { "{PORTFOLIO_STYLES}" }
        div { class: common::themed("portfolio", theme()),
            NavBar {}
            Hero {}
            About {}
            Services {}
            Projects {}
            HackathonJourney {}
            Contact {}
            Footer {}
        }
    }
}
