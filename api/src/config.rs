use std::time::Duration;

use serde::{Deserialize, Serialize};

// SiteConfig
//
// read from Portfolio.toml, which the webapp embeds at build time.  every field
// has a default so that an empty file yields the stock site
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub tagline: String,
    pub log_level: String,
    pub resume_href: String,
    pub schedule_href: String,
    pub contact: ContactConfig,
    pub links: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    // when set, messages are POSTed here instead of going to the simulated sender
    pub endpoint: Option<String>,
    pub submit_delay_ms: u64,
    pub banner_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let link = |name: &str, href: &str| SocialLink {
            name: name.to_owned(),
            href: href.to_owned(),
        };

        SiteConfig {
            owner: String::from("Sumit Rathore"),
            tagline: String::from("Full Stack Web Developer based in Delhi."),
            log_level: String::from("info"),
            resume_href: String::from("resume.pdf"),
            schedule_href: String::from("https://calendly.com/yourprofile"),
            contact: ContactConfig::default(),
            links: vec![
                link("Email", "mailto:srathore132005@gmail.com"),
                link("LinkedIn", "https://www.linkedin.com/in/sumit-rathore-48b2a9278/"),
                link("GitHub", "https://github.com/Sumitrathore10"),
                link("Instagram", "https://www.instagram.com/sumit.rth/"),
                link("Location", "https://maps.app.goo.gl/fARN2VECSWUjTRr5A"),
            ],
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            endpoint: None,
            submit_delay_ms: 2000,
            banner_ms: 3000,
        }
    }
}

impl ContactConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn banner(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }
}

impl SiteConfig {
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        let config: SiteConfig = toml::from_str(contents)?;

        if let Some(endpoint) = &config.contact.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(anyhow::Error::msg(format!(
                    "contact endpoint must be an http(s) url, got {endpoint}"
                )));
            }
        }

        Ok(config)
    }

    // configuration problems should never take the page down.  the logger is
    // configured from the result, so the error is handed back to be reported
    // once it exists
    pub fn load(contents: &str) -> (Self, Option<anyhow::Error>) {
        match Self::parse(contents) {
            Ok(config) => (config, None),
            Err(err) => (SiteConfig::default(), Some(err)),
        }
    }

    // anything tracing cannot parse means INFO
    pub fn level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    pub fn link(&self, name: &str) -> Option<&SocialLink> {
        self.links.iter().find(|l| l.name == name)
    }
}
