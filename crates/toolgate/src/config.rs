//! Startup configuration
//!
//! Settings are read from an optional TOML file and overlaid with
//! environment variables using the `TOOLGATE` prefix and `__` as the section
//! separator, e.g. `TOOLGATE__AUTH__SECRET`. The signing secret and the claims
//! never appear in code.

use crate::algorithm::SigningKey;
use crate::auth::AuthLink;
use crate::catalog::CatalogSource;
use crate::claims::ClaimSet;
use crate::error::{Error, Result};
use crate::url::validate_http_url;
use config::{Config, Environment, File, FileFormat};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TOOLGATE";

/// Top-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub auth: AuthSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub page: PageSettings,
}

/// Authentication link settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Token endpoint the link points at
    pub base_url: String,
    /// Location the auth service sends the user back to
    pub return_url: String,
    /// Shared HMAC secret
    #[serde(deserialize_with = "deserialize_secret")]
    pub secret: SecretString,
    /// Claims signed into every token, in order
    #[serde(default)]
    pub claims: ClaimSet,
}

/// Catalog location
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_source")]
    pub source: String,
}

/// Page location and preference storage
#[derive(Debug, Clone, Deserialize)]
pub struct PageSettings {
    /// URL the page is served from; tab anchors are built from it
    #[serde(default = "default_page_url")]
    pub url: String,
    /// Preference file holding the theme flag
    #[serde(default = "default_preferences")]
    pub preferences: PathBuf,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            url: default_page_url(),
            preferences: default_preferences(),
        }
    }
}

fn default_catalog_source() -> String {
    "tools.json".to_string()
}

fn default_page_url() -> String {
    "http://localhost:8080/index.html".to_string()
}

fn default_preferences() -> PathBuf {
    PathBuf::from("preferences.json")
}

/// `TOOLGATE__*` overlay
///
/// Values are parsed, so numeric claims such as `TOOLGATE__AUTH__CLAIMS__EXP`
/// stay numbers in the signed payload.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn deserialize_secret<'de, D>(deserializer: D) -> std::result::Result<SecretString, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(SecretString::from(s))
}

impl Settings {
    /// Load from an optional TOML file plus `TOOLGATE__*` environment variables
    ///
    /// A given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, environment())
    }

    fn load_with(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        Self::from_config(builder.add_source(env).build())
    }

    /// Parse settings from TOML text, without environment overrides
    pub fn from_toml(toml: &str) -> Result<Self> {
        Self::from_config(
            Config::builder()
                .add_source(File::from_str(toml, FileFormat::Toml))
                .build(),
        )
    }

    fn from_config(config: std::result::Result<Config, config::ConfigError>) -> Result<Self> {
        let settings: Settings = config
            .and_then(Config::try_deserialize)
            .map_err(|e| Error::ConfigurationInvalid(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate endpoints, secret and page location
    pub fn validate(&self) -> Result<()> {
        validate_http_url(&self.auth.base_url, "auth.base_url")?;
        validate_http_url(&self.auth.return_url, "auth.return_url")?;
        if self.auth.secret.expose_secret().is_empty() {
            return Err(Error::ConfigurationInvalid(
                "auth.secret cannot be empty".into(),
            ));
        }
        self.page_url()?;
        self.catalog_source()?;
        Ok(())
    }

    pub fn catalog_source(&self) -> Result<CatalogSource> {
        CatalogSource::parse(&self.catalog.source)
    }

    pub fn page_url(&self) -> Result<::url::Url> {
        validate_http_url(&self.page.url, "page.url")
    }
}

impl AuthSettings {
    /// Import the secret and assemble the authentication link
    pub fn link(&self) -> Result<AuthLink> {
        let key = SigningKey::from_secret(&self.secret)?;
        Ok(AuthLink::new(
            self.base_url.clone(),
            self.return_url.clone(),
            self.claims.clone(),
            key,
        ))
    }
}
