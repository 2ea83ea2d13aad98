//! URL construction and validation
//!
//! Builds the authentication link and tab anchors, and validates configured
//! endpoints. The link builder itself performs no validation: malformed
//! base URLs and oversized tokens are passed through unchanged.

use crate::error::{Error, Result};
use crate::limits::MAX_URL_LENGTH;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped by URI component encoding:
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a value for use as a single URI component
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Build `<base_url>?returnCurrentUrl=<encoded return_url>&access_token=<token>`
///
/// The token is appended as-is; Base64URL segments need no escaping.
pub fn build_auth_url(base_url: &str, return_url: &str, token: &str) -> String {
    format!(
        "{base_url}?returnCurrentUrl={}&access_token={token}",
        encode_uri_component(return_url)
    )
}

/// Anchor URL for a tab: page origin and path followed by `#<tab_id>`
///
/// Query string and existing fragment of the page URL are dropped.
pub fn tab_url(page: &url::Url, tab_id: &str) -> String {
    format!(
        "{}{}#{tab_id}",
        page.origin().ascii_serialization(),
        page.path()
    )
}

/// Validate a configured http(s) URL
pub fn validate_http_url(value: &str, name: &str) -> Result<url::Url> {
    if value.trim().is_empty() {
        return Err(Error::UrlInvalid(format!("{name} cannot be empty")));
    }

    if value.len() > MAX_URL_LENGTH {
        return Err(Error::UrlTooLong {
            length: value.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let parsed = value
        .parse::<url::Url>()
        .map_err(|e| Error::UrlInvalid(format!("invalid {name}: {e}")))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::UrlInvalid(format!(
            "{name} must use http or https scheme"
        )));
    }

    if parsed.host_str().is_none() {
        return Err(Error::UrlInvalid(format!("{name} must have a valid host")));
    }

    Ok(parsed)
}
