//! Transient notifications

use std::time::{Duration, Instant};

/// How long a toast stays fully visible
pub const TOAST_VISIBLE: Duration = Duration::from_millis(2500);

/// Fade-out after the visible window
pub const TOAST_FADE: Duration = Duration::from_millis(500);

pub const COPY_SUCCEEDED: &str = "Tab URL copied to clipboard!";
pub const COPY_FAILED: &str = "Failed to copy URL.";

/// Toast display phase at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Fading,
    Hidden,
}

/// A transient on-screen notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(message, Instant::now())
    }

    pub fn at(message: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            message: message.into(),
            shown_at,
        }
    }

    pub fn phase(&self, now: Instant) -> ToastPhase {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed < TOAST_VISIBLE {
            ToastPhase::Visible
        } else if elapsed < TOAST_VISIBLE + TOAST_FADE {
            ToastPhase::Fading
        } else {
            ToastPhase::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_phases() {
        let start = Instant::now();
        let toast = Toast::at(COPY_SUCCEEDED, start);

        assert_eq!(toast.phase(start), ToastPhase::Visible);
        assert_eq!(
            toast.phase(start + Duration::from_millis(2499)),
            ToastPhase::Visible
        );
        assert_eq!(
            toast.phase(start + Duration::from_millis(2500)),
            ToastPhase::Fading
        );
        assert_eq!(
            toast.phase(start + Duration::from_millis(3000)),
            ToastPhase::Hidden
        );
    }
}
