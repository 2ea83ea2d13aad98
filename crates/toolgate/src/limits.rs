//! Size limit constants for input validation

/// Maximum size for a fetched or loaded catalog document (1MB)
pub(crate) const MAX_CATALOG_SIZE: usize = 1024 * 1024;

/// Maximum length for configured endpoint and page URLs (2048 characters)
pub(crate) const MAX_URL_LENGTH: usize = 2048;

/// Maximum size for the preference file (64KB)
pub(crate) const MAX_PREFERENCES_SIZE: usize = 64 * 1024;
