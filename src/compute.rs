//! Pure game-logic functions.
//!
//! [`advance`] is the per-tick simulation step: it moves every star, resolves
//! catches and floor exits, and applies the score change. It never touches
//! the clock or the RNG; spawning and timing belong to `game`.

use crate::config::{GameConfig, Tint};
use crate::entities::{Catcher, FallingObject, GameSession, ObjectId, ResultTier};
use crate::store::EntityStore;

// ── Step results ──────────────────────────────────────────────────────────────

/// A popup the caller should hand to the popup board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupRequest {
    pub text: String,
    pub tint: Tint,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Caught,
    Exited,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub score_delta: i32,
    pub popups: Vec<PopupRequest>,
    pub caught: Vec<ObjectId>,
    pub exited: Vec<ObjectId>,
    /// Caught then exited ids, each exactly once.
    pub removed: Vec<ObjectId>,
}

// ── Rules ─────────────────────────────────────────────────────────────────────

/// Decide what happens to an object at its current position. Catching is
/// tested first, so an object that is both caught and past the floor counts
/// as caught.
pub fn resolve(object: &FallingObject, catcher: &Catcher, config: &GameConfig) -> Option<Resolution> {
    let half = config.half_object();
    if object.y() + half >= catcher.y() && catcher.spans(object.x()) {
        Some(Resolution::Caught)
    } else if object.y() - half > config.field_height {
        Some(Resolution::Exited)
    } else {
        None
    }
}

/// Result tier for a final score.
pub fn select_tier(score: i32, config: &GameConfig) -> ResultTier {
    let tiers = &config.tiers;
    if score >= tiers.top_min {
        ResultTier::Top
    } else if score >= tiers.second_min {
        ResultTier::Second
    } else if score >= tiers.third_min {
        ResultTier::Third
    } else {
        ResultTier::Lowest
    }
}

// ── Per-tick step ─────────────────────────────────────────────────────────────

/// Advance the simulation by one tick.
///
/// 1. every object falls by its own speed;
/// 2. catches and floor exits are decided against the new positions;
/// 3. resolved objects are removed in one pass once the scan is over.
pub fn advance(
    store: &mut EntityStore,
    catcher: &Catcher,
    session: &mut GameSession,
    config: &GameConfig,
) -> StepOutcome {
    for object in store.iter_mut() {
        object.fall();
    }

    let mut outcome = StepOutcome::default();
    for object in store.iter() {
        match resolve(object, catcher, config) {
            Some(Resolution::Caught) => {
                let delta = object.category().score_delta(config);
                outcome.score_delta += delta;
                outcome.popups.push(catch_popup(object, delta, config));
                outcome.caught.push(object.id());
                log::debug!(
                    "caught {:?} {:?} at ({}, {}): {:+}",
                    object.id(),
                    object.category(),
                    object.x(),
                    object.y(),
                    delta
                );
            }
            Some(Resolution::Exited) => {
                outcome.exited.push(object.id());
                log::debug!("{:?} left the field at x={}", object.id(), object.x());
            }
            None => {}
        }
    }

    outcome.removed = outcome
        .caught
        .iter()
        .chain(outcome.exited.iter())
        .copied()
        .collect();
    store.remove_ids(&outcome.removed);

    session.score += outcome.score_delta;
    outcome
}

fn catch_popup(object: &FallingObject, delta: i32, config: &GameConfig) -> PopupRequest {
    PopupRequest {
        text: GameConfig::delta_text(delta),
        tint: object.category().popup_tint(),
        x: object.x(),
        y: object.y() - config.popup_lift,
    }
}
