use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use url::Url;

pub const CONFIG_FILE_NAME: &str = "showcase.toml";

const DEFAULT_API_URL: &str = "https://apis.ccbp.in/ps/projects";
const DEFAULT_LOGO_URL: &str =
    "https://assets.ccbp.in/frontend/react-js/projects-showcase/website-logo-img.png";
const DEFAULT_FAILURE_IMAGE_URL: &str =
    "https://assets.ccbp.in/frontend/react-js/projects-showcase/failure-img.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    pub api_url: Url,
    pub logo_url: Url,
    pub failure_image_url: Url,
}

/// Unvalidated settings; every layer overwrites fields here before a single
/// parse into [`ShowcaseConfig`].
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawSettings {
    api_url: String,
    logo_url: String,
    failure_image_url: String,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            logo_url: DEFAULT_LOGO_URL.into(),
            failure_image_url: DEFAULT_FAILURE_IMAGE_URL.into(),
        }
    }
}

impl ShowcaseConfig {
    /// Defaults, then `showcase.toml` in the working directory, then the
    /// process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME), |name| std::env::var(name).ok())
    }

    pub fn load_from(
        file: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let mut settings = match fs::read_to_string(file) {
            Ok(raw) => toml::from_str::<RawSettings>(&raw)
                .with_context(|| format!("failed to parse '{}'", file.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => RawSettings::default(),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read '{}'", file.display()));
            }
        };

        if let Some(v) = env("SHOWCASE_API_URL") {
            settings.api_url = v;
        }
        if let Some(v) = env("APP__API_URL") {
            settings.api_url = v;
        }
        if let Some(v) = env("APP__LOGO_URL") {
            settings.logo_url = v;
        }
        if let Some(v) = env("APP__FAILURE_IMAGE_URL") {
            settings.failure_image_url = v;
        }

        Ok(Self {
            api_url: parse_url("api_url", &settings.api_url)?,
            logo_url: parse_url("logo_url", &settings.logo_url)?,
            failure_image_url: parse_url("failure_image_url", &settings.failure_image_url)?,
        })
    }

    pub fn set_api_url(&mut self, raw: &str) -> anyhow::Result<()> {
        self.api_url = parse_url("api_url", raw)?;
        Ok(())
    }
}

fn parse_url(source: &str, raw: &str) -> anyhow::Result<Url> {
    Url::parse(raw.trim()).with_context(|| format!("{source} is not a valid url: '{raw}'"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
