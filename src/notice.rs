//! Single-slot status message with an expiry.

use std::time::Duration;
use tokio::time::Instant;

pub const DEFAULT_NOTICE_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Style class of the status region.
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub expires_at: Instant,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Class attribute for the status region given what is visible.
pub fn region_class(notice: Option<&Notice>) -> &'static str {
    match notice {
        Some(n) => n.kind.class(),
        None => "hidden",
    }
}

/// Holds at most one visible notice. Every `show` bumps the generation, so an
/// expiry armed for an older notice cannot hide a newer one.
#[derive(Debug)]
pub struct NoticeSlot {
    current: Option<Notice>,
    generation: u64,
    timeout: Duration,
}

impl Default for NoticeSlot {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TIMEOUT)
    }
}

impl NoticeSlot {
    pub fn new(timeout: Duration) -> Self {
        Self {
            current: None,
            generation: 0,
            timeout,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn show(&mut self, text: impl Into<String>, kind: NoticeKind, now: Instant) -> u64 {
        self.generation += 1;
        self.current = Some(Notice {
            text: text.into(),
            kind,
            expires_at: now + self.timeout,
        });
        self.generation
    }

    /// Hides the notice shown as `generation`. Returns whether anything changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// Hides the notice if its expiry is at or before `now`.
    pub fn expire_due(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(n) if n.expires_at <= now => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
