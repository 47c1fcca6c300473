//! Status banners shown above forms.
//!
//! Success banners expire on their own; error banners stay until dismissed
//! or replaced by the next attempt.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    expires_at: Option<Instant>,
}

impl Banner {
    pub fn success<S: Into<String>>(message: S, now: Instant, ttl: Duration) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
            expires_at: Some(now + ttl),
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
            expires_at: None,
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => now < deadline,
            None => true,
        }
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }
}
