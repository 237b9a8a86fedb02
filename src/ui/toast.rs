//! Transient toast notifications.
//!
//! Non-blocking messages in the top-right corner; persistence failures land
//! here so the editing session is never interrupted.

use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::ui::theme;

/// Maximum number of visible toasts.
const MAX_VISIBLE_TOASTS: usize = 3;

/// Default toast duration.
const DEFAULT_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn color(&self) -> Color {
        match self {
            ToastKind::Success => theme::STATUS_OK,
            ToastKind::Error => theme::STATUS_ERROR,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
    pub created_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration: DEFAULT_DURATION,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Queue of active toasts, oldest first.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Drop expired toasts; called from the tick handler.
    pub fn prune(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// The most recent toasts, up to the display cap.
    pub fn visible(&self) -> &[Toast] {
        let start = self.toasts.len().saturating_sub(MAX_VISIBLE_TOASTS);
        &self.toasts[start..]
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
