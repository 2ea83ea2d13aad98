//! View model and HTML markup for the page
use crate::theme::{Theme, ThemeIcon};
use crate::toast::ToastPhase;
use std::fmt::{self, Write};

/// Rendered page state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub tabs: Vec<TabButton>,
    pub panels: Vec<TabPanel>,
    pub theme: Theme,
    pub icon: ThemeIcon,
    /// Toast still on screen, `None` once hidden
    pub toast: Option<ToastView>,
}

/// Tab navigation button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub id: String,
    pub label: String,
    pub active: bool,
}

/// Tab content panel with its tool cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanel {
    pub dom_id: String,
    pub active: bool,
    pub cards: Vec<String>,
}

/// On-screen toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub message: String,
    pub phase: ToastPhase,
}

impl PageView {
    /// The single active button, if any
    pub fn active_tab(&self) -> Option<&TabButton> {
        self.tabs.iter().find(|tab| tab.active)
    }

    /// The single active panel, if any
    pub fn active_panel(&self) -> Option<&TabPanel> {
        self.panels.iter().find(|panel| panel.active)
    }

    /// Markup for the `#tabs` container
    pub fn tabs_html(&self) -> String {
        let mut out = String::new();
        for tab in &self.tabs {
            let _ = write!(
                out,
                r#"<button class="{}" data-tab="{}" type="button">{}</button>"#,
                class_list("tab", tab.active),
                Escaped(&tab.id),
                Escaped(&tab.label)
            );
        }
        out
    }

    /// Markup for the `#tab-contents` container
    pub fn contents_html(&self) -> String {
        let mut out = String::new();
        for panel in &self.panels {
            let _ = write!(
                out,
                r#"<div class="{}" id="{}"><div class="tools-list">"#,
                class_list("tab-content", panel.active),
                Escaped(&panel.dom_id)
            );
            for card in &panel.cards {
                let _ = write!(
                    out,
                    r#"<div class="tool-card"><h2>{}</h2></div>"#,
                    Escaped(card)
                );
            }
            out.push_str("</div></div>");
        }
        out
    }

    /// Markup for the `#toast` element
    pub fn toast_html(&self) -> String {
        match &self.toast {
            Some(toast) => {
                let class = match toast.phase {
                    ToastPhase::Fading => "toast fading",
                    _ => "toast visible",
                };
                format!(
                    r#"<div class="{class}" id="toast">{}</div>"#,
                    Escaped(&toast.message)
                )
            }
            None => r#"<div class="toast" id="toast"></div>"#.to_string(),
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body_class = match self.theme {
            Theme::Dark => r#" class="dark""#,
            Theme::Light => "",
        };

        write!(
            f,
            r#"<body{body_class}><button id="themeToggle" type="button"><span id="themeIcon">{}</span></button><nav id="tabs">{}</nav><main id="tab-contents">{}</main>{}</body>"#,
            self.icon.svg(),
            self.tabs_html(),
            self.contents_html(),
            self.toast_html()
        )
    }
}

fn class_list(base: &str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

/// HTML text/attribute escaping
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
