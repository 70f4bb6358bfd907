use std::{net::SocketAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
pub use duration::Duration;
use mailform_models::email_address::{EmailAddress, EmailAddressWithName};
use serde::Deserialize;

mod duration;

const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Environment variables that take precedence over the config files.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("FROM_EMAIL", "email.from"),
    ("TO_EMAIL", "contact.owner"),
    ("ALLOWED_ORIGINS", "cors.allowed_origins"),
    ("SMTP_URL", "email.smtp_url"),
];

/// Load the bundled defaults, the files listed in `MAILFORM_CONFIG` and the
/// environment overrides.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os("MAILFORM_CONFIG")
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();

    load_from(&paths, |key| std::env::var(key).ok())
}

pub fn load_from(
    paths: &[impl AsRef<Path>],
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    let builder = ENV_OVERRIDES
        .iter()
        .try_fold(builder, |builder, &(var, key)| {
            let value = env(var).filter(|value| !value.is_empty());
            builder.set_override_option(key, value)
        })?;

    builder
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    /// Fixed sender of all outgoing messages.
    pub from: EmailAddressWithName,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Receives contact form notifications.
    pub owner: EmailAddress,
}

#[derive(Debug, Default, Deserialize)]
pub struct CorsConfig {
    /// Comma separated list of origins that may call the api from a browser.
    #[serde(default)]
    pub allowed_origins: String,
}
