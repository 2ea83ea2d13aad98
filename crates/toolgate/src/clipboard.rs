//! Clipboard access
//!
//! Two write paths exist: the modern clipboard capability and a legacy
//! selection-based copy. Callers only take the legacy path when the modern
//! capability is absent altogether.

use crate::error::ClipboardError;

/// How a value reached the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Modern,
    Legacy,
}

pub trait Clipboard {
    /// Whether the modern clipboard capability exists
    fn has_modern_api(&self) -> bool;

    /// Write through the modern clipboard capability
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Select-and-copy fallback
    fn legacy_copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A recorded clipboard write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRecord {
    pub text: String,
    pub method: CopyMethod,
}

/// In-memory clipboard
///
/// Records successful writes. Can be configured to lack the modern API or to
/// fail either path.
#[derive(Debug, Clone)]
pub struct MemoryClipboard {
    modern: bool,
    fail_modern: Option<ClipboardError>,
    fail_legacy: Option<ClipboardError>,
    writes: Vec<CopyRecord>,
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self {
            modern: true,
            fail_modern: None,
            fail_legacy: None,
            writes: Vec::new(),
        }
    }
}

impl MemoryClipboard {
    /// Clipboard with the modern capability
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard without the modern capability
    pub fn legacy_only() -> Self {
        Self {
            modern: false,
            ..Self::default()
        }
    }

    /// Make modern writes fail
    pub fn failing_modern(mut self, error: ClipboardError) -> Self {
        self.fail_modern = Some(error);
        self
    }

    /// Make legacy copies fail
    pub fn failing_legacy(mut self, error: ClipboardError) -> Self {
        self.fail_legacy = Some(error);
        self
    }

    /// Successful writes, oldest first
    pub fn writes(&self) -> &[CopyRecord] {
        &self.writes
    }

    /// Most recently copied text
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(|record| record.text.as_str())
    }
}

impl Clipboard for MemoryClipboard {
    fn has_modern_api(&self) -> bool {
        self.modern
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.modern {
            return Err(ClipboardError::Unavailable);
        }
        if let Some(error) = &self.fail_modern {
            return Err(error.clone());
        }

        self.writes.push(CopyRecord {
            text: text.into(),
            method: CopyMethod::Modern,
        });
        Ok(())
    }

    fn legacy_copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(error) = &self.fail_legacy {
            return Err(error.clone());
        }

        self.writes.push(CopyRecord {
            text: text.into(),
            method: CopyMethod::Legacy,
        });
        Ok(())
    }
}
