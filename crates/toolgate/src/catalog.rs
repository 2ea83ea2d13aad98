//! Tool catalog document and loading
//!
//! The catalog is a JSON document of the shape
//! `{ "tabs": [ { "id", "label", "tools": [ { "title" } ] } ] }`.
//! Unknown fields are ignored.

use crate::error::{Error, Result};
use crate::limits::MAX_CATALOG_SIZE;
use crate::url::validate_http_url;
use miniserde::Deserialize;
use std::path::{Path, PathBuf};

/// Tool catalog
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Catalog {
    pub tabs: Vec<Tab>,
}

/// A tab and the tools listed under it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub tools: Vec<Tool>,
}

/// A single tool card
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tool {
    pub title: String,
}

impl Catalog {
    /// Parse a catalog document
    pub fn from_json(json: &str) -> Result<Self> {
        if json.len() > MAX_CATALOG_SIZE {
            return Err(Error::CatalogTooLarge {
                size: json.len(),
                max: MAX_CATALOG_SIZE,
            });
        }

        miniserde::json::from_str(json)
            .map_err(|_| Error::CatalogInvalidJson("expected {\"tabs\": [...]}".into()))
    }

    /// Parse a catalog document from raw bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_CATALOG_SIZE {
            return Err(Error::CatalogTooLarge {
                size: bytes.len(),
                max: MAX_CATALOG_SIZE,
            });
        }

        let body = std::str::from_utf8(bytes)
            .map_err(|e| Error::CatalogInvalidJson(format!("utf8 decode failed: {e}")))?;
        Self::from_json(body)
    }

    /// Find a tab index by id
    pub fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == tab_id)
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

/// Where the catalog document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fetched with a single GET
    Remote(::url::Url),
    /// Read from the local filesystem
    File(PathBuf),
}

impl CatalogSource {
    /// `http://` and `https://` values are remote, anything else is a path
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(Error::ConfigurationInvalid(
                "catalog source cannot be empty".into(),
            ));
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            validate_http_url(trimmed, "catalog URL").map(CatalogSource::Remote)
        } else {
            Ok(CatalogSource::File(PathBuf::from(trimmed)))
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Remote(url) => write!(f, "{url}"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch data from a URL using reqwest
async fn fetch_url(client: &reqwest::Client, url: &::url::Url) -> Result<Vec<u8>> {
    let mut response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| Error::CatalogFetch(format!("network: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::CatalogFetch(format!(
            "http: status {}",
            response.status()
        )));
    }

    if let Some(length) = response.content_length() {
        check_size(usize::try_from(length).unwrap_or(usize::MAX))?;
    }

    // Content-Length may be absent or wrong; enforce the bound while reading
    let mut bytes = Vec::new();
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| Error::CatalogFetch(format!("network: {e}")))?
    {
        check_size(bytes.len() + chunk.len())?;
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    let fetch_error = |e: std::io::Error| Error::CatalogFetch(format!("{}: {e}", path.display()));

    let metadata = tokio::fs::metadata(path).await.map_err(fetch_error)?;
    check_size(usize::try_from(metadata.len()).unwrap_or(usize::MAX))?;

    tokio::fs::read(path).await.map_err(fetch_error)
}

fn check_size(size: usize) -> Result<()> {
    if size > MAX_CATALOG_SIZE {
        return Err(Error::CatalogTooLarge {
            size,
            max: MAX_CATALOG_SIZE,
        });
    }
    Ok(())
}

/// Load and parse the catalog from its source
pub async fn load_catalog(client: &reqwest::Client, source: &CatalogSource) -> Result<Catalog> {
    let bytes = match source {
        CatalogSource::Remote(url) => fetch_url(client, url).await?,
        CatalogSource::File(path) => read_file(path).await?,
    };

    let catalog = Catalog::from_slice(&bytes)?;
    tracing::debug!(%source, tabs = catalog.tabs.len(), "catalog loaded");

    Ok(catalog)
}
