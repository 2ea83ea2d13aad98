//! A tool catalog page backed by signed authentication links.
//!
//! Each click on a tool card signs the configured claims into an HS256 JWT,
//! builds an authentication URL around it and copies the active tab's anchor
//! URL to the clipboard.

mod error;

// Internal modules
pub(crate) mod algorithm;
pub(crate) mod auth;
pub(crate) mod catalog;
pub(crate) mod claims;
pub(crate) mod clipboard;
pub(crate) mod config;
pub(crate) mod encoder;
pub(crate) mod header;
pub(crate) mod page;
pub(crate) mod theme;
pub(crate) mod toast;
pub(crate) mod url;
pub(crate) mod utils;
pub(crate) mod view;

// Public Interface
pub use algorithm::{AlgorithmType, SigningKey};
pub use auth::AuthLink;
pub use catalog::{Catalog, CatalogSource, Tab, Tool, load_catalog};
pub use claims::{ClaimSet, Claims};
pub use clipboard::{Clipboard, CopyMethod, CopyRecord, MemoryClipboard};
pub use self::config::{AuthSettings, CatalogSettings, ENV_PREFIX, PageSettings, Settings};
pub use encoder::{TokenEncoder, encode};
pub use error::{ClipboardError, Error, Result};
pub use page::{ClickOutcome, CopyOutcome, Page};
pub use theme::{FileStore, MemoryStore, PreferenceStore, THEME_KEY, Theme, ThemeIcon};
pub use toast::{COPY_FAILED, COPY_SUCCEEDED, TOAST_FADE, TOAST_VISIBLE, Toast, ToastPhase};
pub use self::url::{build_auth_url, encode_uri_component, tab_url};
pub use view::{PageView, TabButton, TabPanel, ToastView};

pub use claims::StandardClaims;
pub use toolgate_derive::claims;

pub(crate) mod limits;
