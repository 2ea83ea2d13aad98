//! Page controller
//!
//! Owns all UI state (catalog, active tab, theme, last toast) and the
//! environment it talks to (preference store, clipboard). The rendered view
//! is derived from this state on demand, so switching tabs never duplicates
//! click handling.

use crate::auth::AuthLink;
use crate::catalog::{Catalog, Tab};
use crate::clipboard::{Clipboard, CopyMethod};
use crate::error::{ClipboardError, Error, Result};
use crate::theme::{PreferenceStore, THEME_KEY, Theme};
use crate::toast::{COPY_FAILED, COPY_SUCCEEDED, Toast, ToastPhase};
use crate::url::tab_url;
use crate::view::{PageView, TabButton, TabPanel, ToastView};
use std::time::Instant;

/// Result of a tool-card click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Authentication URL signed for this click; logged, not copied
    pub auth_url: String,
    pub copy: CopyOutcome,
}

/// What happened to the tab URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The card's tab was not active
    Skipped,
    Copied { url: String, method: CopyMethod },
    Failed { url: String, error: ClipboardError },
}

/// Page controller
pub struct Page<S, C> {
    catalog: Catalog,
    active_tab: usize,
    theme: Theme,
    location: ::url::Url,
    auth: AuthLink,
    store: S,
    clipboard: C,
    toast: Option<Toast>,
}

impl<S, C> Page<S, C>
where
    S: PreferenceStore,
    C: Clipboard,
{
    /// Build the controller and restore the saved theme
    ///
    /// The first tab starts active.
    pub fn load(
        catalog: Catalog,
        location: ::url::Url,
        auth: AuthLink,
        mut store: S,
        clipboard: C,
    ) -> Result<Self> {
        let theme = Theme::restore(&mut store)?;
        tracing::debug!(tabs = catalog.tabs.len(), %theme, "page loaded");

        Ok(Self {
            catalog,
            active_tab: 0,
            theme,
            location,
            auth,
            store,
            clipboard,
            toast: None,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Active tab, `None` for an empty catalog
    pub fn active_tab(&self) -> Option<&Tab> {
        self.catalog.tabs.get(self.active_tab)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_tab().map(|_| self.active_tab)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Activate a tab by position
    pub fn select_tab(&mut self, index: usize) -> Result<()> {
        if index >= self.catalog.tabs.len() {
            return Err(Error::TabNotFound(index));
        }

        self.active_tab = index;
        tracing::debug!(tab = %self.catalog.tabs[index].id, "tab selected");
        Ok(())
    }

    /// Activate a tab by id
    pub fn select_tab_by_id(&mut self, tab_id: &str) -> Result<()> {
        let index = self
            .catalog
            .position(tab_id)
            .ok_or_else(|| Error::TabIdNotFound(tab_id.into()))?;
        self.select_tab(index)
    }

    /// URL of a tab anchor on this page
    pub fn tab_url(&self, index: usize) -> Result<String> {
        let tab = self
            .catalog
            .tabs
            .get(index)
            .ok_or(Error::TabNotFound(index))?;
        Ok(tab_url(&self.location, &tab.id))
    }

    /// Handle a click on tool `tool` under tab `tab`
    ///
    /// Always signs an authentication URL first; a signing failure is
    /// returned as an error and nothing is copied. The tab's anchor URL is
    /// then copied, but only when the tab is active.
    pub fn click_tool(&mut self, tab: usize, tool: usize) -> Result<ClickOutcome> {
        let target = self
            .catalog
            .tabs
            .get(tab)
            .ok_or(Error::TabNotFound(tab))?;
        if tool >= target.tools.len() {
            return Err(Error::ToolNotFound { tab, tool });
        }

        let auth_url = self.auth.generate()?;
        tracing::debug!(%auth_url, tool = %target.tools[tool].title, "authentication URL generated");

        if tab != self.active_tab {
            return Ok(ClickOutcome {
                auth_url,
                copy: CopyOutcome::Skipped,
            });
        }

        let url = tab_url(&self.location, &target.id);
        let copy = self.copy(url);

        Ok(ClickOutcome { auth_url, copy })
    }

    /// Copy via the modern clipboard when present, otherwise the legacy path
    fn copy(&mut self, url: String) -> CopyOutcome {
        let (method, result) = if self.clipboard.has_modern_api() {
            (CopyMethod::Modern, self.clipboard.write_text(&url))
        } else {
            (CopyMethod::Legacy, self.clipboard.legacy_copy(&url))
        };

        match result {
            Ok(()) => {
                self.toast = Some(Toast::new(COPY_SUCCEEDED));
                CopyOutcome::Copied { url, method }
            }
            Err(error) => {
                tracing::warn!(%error, ?method, "clipboard write failed");
                self.toast = Some(Toast::new(COPY_FAILED));
                CopyOutcome::Failed { url, error }
            }
        }
    }

    /// Flip the theme and persist it
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.theme.toggled();
        self.store.set(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        Ok(theme)
    }

    /// Derive the view from current state
    pub fn view(&self) -> PageView {
        self.view_at(Instant::now())
    }

    /// Derive the view as of `now`; a toast past its fade is left out
    pub fn view_at(&self, now: Instant) -> PageView {
        let tabs = self
            .catalog
            .tabs
            .iter()
            .enumerate()
            .map(|(idx, tab)| TabButton {
                id: tab.id.clone(),
                label: tab.label.clone(),
                active: idx == self.active_tab,
            })
            .collect();

        let panels = self
            .catalog
            .tabs
            .iter()
            .enumerate()
            .map(|(idx, tab)| TabPanel {
                dom_id: format!("tab-{}", tab.id),
                active: idx == self.active_tab,
                cards: tab.tools.iter().map(|tool| tool.title.clone()).collect(),
            })
            .collect();

        let toast = self.toast.as_ref().and_then(|toast| match toast.phase(now) {
            ToastPhase::Hidden => None,
            phase => Some(ToastView {
                message: toast.message.clone(),
                phase,
            }),
        });

        PageView {
            tabs,
            panels,
            theme: self.theme,
            icon: self.theme.icon(),
            toast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::SigningKey;
    use crate::catalog::Tool;
    use crate::claims::ClaimSet;
    use crate::clipboard::MemoryClipboard;
    use crate::theme::MemoryStore;

    fn catalog() -> Catalog {
        Catalog {
            tabs: vec![
                Tab {
                    id: "dev".into(),
                    label: "Development".into(),
                    tools: vec![Tool {
                        title: "Bids".into(),
                    }],
                },
                Tab {
                    id: "ops".into(),
                    label: "Operations".into(),
                    tools: vec![
                        Tool {
                            title: "Users".into(),
                        },
                        Tool {
                            title: "Audit".into(),
                        },
                    ],
                },
            ],
        }
    }

    fn auth() -> AuthLink {
        AuthLink::new(
            "https://auth.example.com/api/auth/token",
            "https://auth.example.com/users",
            ClaimSet::new().with_subject("user-1"),
            SigningKey::hs256("secret").unwrap(),
        )
    }

    fn page(clipboard: MemoryClipboard) -> Page<MemoryStore, MemoryClipboard> {
        Page::load(
            catalog(),
            "http://localhost:8080/index.html".parse().unwrap(),
            auth(),
            MemoryStore::new(),
            clipboard,
        )
        .unwrap()
    }

    #[test]
    fn test_first_tab_active() {
        let page = page(MemoryClipboard::new());
        assert_eq!(page.active_index(), Some(0));
        assert_eq!(page.active_tab().unwrap().id, "dev");
        assert_eq!(page.theme(), Theme::Dark);
    }

    #[test]
    fn test_select_tab_out_of_range() {
        let mut page = page(MemoryClipboard::new());
        assert!(matches!(page.select_tab(2), Err(Error::TabNotFound(2))));
        assert!(matches!(
            page.select_tab_by_id("nope"),
            Err(Error::TabIdNotFound(_))
        ));
        assert_eq!(page.active_index(), Some(0));
    }

    #[test]
    fn test_click_copies_tab_url() {
        let mut page = page(MemoryClipboard::new());
        let outcome = page.click_tool(0, 0).unwrap();

        assert!(outcome.auth_url.contains("&access_token="));
        assert_eq!(
            outcome.copy,
            CopyOutcome::Copied {
                url: "http://localhost:8080/index.html#dev".into(),
                method: CopyMethod::Modern,
            }
        );
        assert_eq!(page.toast().unwrap().message, COPY_SUCCEEDED);
    }

    #[test]
    fn test_view_carries_toast_until_hidden() {
        let mut page = page(MemoryClipboard::new());
        assert_eq!(page.view().toast, None);

        page.click_tool(0, 0).unwrap();
        let shown_at = page.toast().unwrap().shown_at;

        let view = page.view_at(shown_at);
        let toast = view.toast.as_ref().unwrap();
        assert_eq!(toast.message, COPY_SUCCEEDED);
        assert_eq!(toast.phase, ToastPhase::Visible);
        assert!(view.to_string().contains(COPY_SUCCEEDED));

        let fading = page.view_at(shown_at + std::time::Duration::from_millis(2700));
        assert_eq!(fading.toast.unwrap().phase, ToastPhase::Fading);

        let hidden = page.view_at(shown_at + std::time::Duration::from_secs(3));
        assert_eq!(hidden.toast, None);
        assert!(!hidden.to_string().contains(COPY_SUCCEEDED));
    }

    #[test]
    fn test_click_unknown_tool() {
        let mut page = page(MemoryClipboard::new());
        assert!(matches!(
            page.click_tool(0, 5),
            Err(Error::ToolNotFound { tab: 0, tool: 5 })
        ));
        assert!(matches!(page.click_tool(9, 0), Err(Error::TabNotFound(9))));
        assert!(page.clipboard().writes().is_empty());
    }

    #[test]
    fn test_tab_url() {
        let page = page(MemoryClipboard::new());
        assert_eq!(
            page.tab_url(1).unwrap(),
            "http://localhost:8080/index.html#ops"
        );
        assert!(page.tab_url(2).is_err());
    }

    #[test]
    fn test_empty_catalog() {
        let mut page = Page::load(
            Catalog::default(),
            "http://localhost:8080/".parse().unwrap(),
            auth(),
            MemoryStore::new(),
            MemoryClipboard::new(),
        )
        .unwrap();

        assert_eq!(page.active_index(), None);
        assert!(page.view().tabs.is_empty());
        assert!(page.click_tool(0, 0).is_err());
    }
}
