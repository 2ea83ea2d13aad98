//! Errors for toolgate

use thiserror::Error;

/// toolgate Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Key Errors
    // ============================================================================
    #[error("Signing key rejected: {0}")]
    KeyInvalid(String),

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    #[error("JSON serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Claims must serialize to a JSON object, got {found}")]
    ClaimsNotObject { found: String },

    // ============================================================================
    // Catalog Errors
    // ============================================================================
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(String),

    #[error("Catalog too large: {size} bytes (maximum: {max} bytes)")]
    CatalogTooLarge { size: usize, max: usize },

    #[error("Catalog JSON parsing failed: {0}")]
    CatalogInvalidJson(String),

    // ============================================================================
    // URL Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    UrlInvalid(String),

    #[error("URL too long: {length} characters (maximum: {max} characters)")]
    UrlTooLong { length: usize, max: usize },

    // ============================================================================
    // Page Errors
    // ============================================================================
    #[error("No tab at index {0}")]
    TabNotFound(usize),

    #[error("No tab with id '{0}'")]
    TabIdNotFound(String),

    #[error("No tool at index {tool} in tab {tab}")]
    ToolNotFound { tab: usize, tool: usize },

    #[error("Preference store error: {0}")]
    Store(String),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid configuration: {0}")]
    ConfigurationInvalid(String),
}

/// Clipboard write failures
///
/// These never escape the page controller; they are reported through a toast.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard capability is not available")]
    Unavailable,

    #[error("Clipboard write denied: {0}")]
    Denied(String),

    #[error("Copy command failed: {0}")]
    CopyFailed(String),
}

/// Result type alias for toolgate operations
pub type Result<T> = std::result::Result<T, Error>;
