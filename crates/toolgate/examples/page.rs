//! Run with
//!
//! ```not_rust
//! cargo run --example page [path/to/toolgate.toml]
//! ```
//!
//! Without a path the bundled `demos/toolgate.toml` is used.

use std::path::PathBuf;

use toolgate::{FileStore, MemoryClipboard, Page, Settings, load_catalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> toolgate::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,toolgate=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            // Bundled settings use paths relative to the crate root
            std::env::set_current_dir(env!("CARGO_MANIFEST_DIR")).unwrap();
            PathBuf::from("demos/toolgate.toml")
        }
    };

    let settings = Settings::load(Some(&path))?;
    let catalog = load_catalog(&reqwest::Client::new(), &settings.catalog_source()?).await?;

    let mut page = Page::load(
        catalog,
        settings.page_url()?,
        settings.auth.link()?,
        FileStore::open(&settings.page.preferences)?,
        MemoryClipboard::new(),
    )?;

    println!("{}", page.view());

    if page.active_tab().is_some_and(|tab| !tab.tools.is_empty()) {
        let outcome = page.click_tool(0, 0)?;
        println!("auth url: {}", outcome.auth_url);
        println!("copy: {:?}", outcome.copy);
    }

    let theme = page.toggle_theme()?;
    tracing::info!(%theme, path = %settings.page.preferences.display(), "theme saved");

    Ok(())
}
