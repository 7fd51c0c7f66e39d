//! Short-lived notifications shown over the card.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use shared::protocol::Notification;

const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ToastQueue {
    lifetime: Duration,
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            toasts: VecDeque::new(),
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        if self.toasts.len() == MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notification,
            expires_at: now + self.lifetime,
        });
    }

    /// Drops expired toasts and returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before - self.toasts.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts.iter().map(|toast| toast.expires_at).min()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
