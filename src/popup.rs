//! Short-lived score popups.
//!
//! Popups run on wall-clock deadlines, not on simulation ticks: the host
//! passes `Instant`s in and calls [`PopupBoard::expire_due`] whenever it
//! likes, in any phase. Removal is idempotent, so a late expiry after the
//! board was cleared (e.g. on restart) is a harmless no-op.

use std::time::{Duration, Instant};

use crate::compute::PopupRequest;
use crate::config::Tint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PopupId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScorePopup {
    pub id: PopupId,
    pub text: String,
    pub tint: Tint,
    pub x: i32,
    pub y: i32,
    pub expires_at: Instant,
}

#[derive(Clone, Debug)]
pub struct PopupBoard {
    popups: Vec<ScorePopup>,
    lifetime: Duration,
    next_id: u64,
}

impl PopupBoard {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            popups: Vec::new(),
            lifetime,
            next_id: 0,
        }
    }

    /// Show a popup until `now + lifetime`.
    pub fn spawn(&mut self, text: impl Into<String>, tint: Tint, x: i32, y: i32, now: Instant) -> PopupId {
        let id = PopupId(self.next_id);
        self.next_id += 1;
        self.popups.push(ScorePopup {
            id,
            text: text.into(),
            tint,
            x,
            y,
            expires_at: now + self.lifetime,
        });
        id
    }

    pub fn spawn_request(&mut self, request: PopupRequest, now: Instant) -> PopupId {
        self.spawn(request.text, request.tint, request.x, request.y, now)
    }

    /// Remove one popup. Returns `false` when it is already gone.
    pub fn remove(&mut self, id: PopupId) -> bool {
        let before = self.popups.len();
        self.popups.retain(|p| p.id != id);
        self.popups.len() != before
    }

    /// Drop every popup whose deadline is at or before `now`; returns how many.
    pub fn expire_due(&mut self, now: Instant) -> usize {
        let before = self.popups.len();
        self.popups.retain(|p| p.expires_at > now);
        before - self.popups.len()
    }

    /// Earliest pending deadline, for hosts that sleep until the next event.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.popups.iter().map(|p| p.expires_at).min()
    }

    pub fn clear(&mut self) {
        self.popups.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScorePopup> {
        self.popups.iter()
    }

    pub fn len(&self) -> usize {
        self.popups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.popups.is_empty()
    }
}
