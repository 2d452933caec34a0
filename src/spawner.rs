//! Per-tick spawn roll.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Category, Spawn};

/// Roll once for a new star. Returns the descriptor only; inserting it into
/// the store is the caller's job.
///
/// Draw order is fixed (spawn roll, x, category, speed) so a seeded RNG
/// replays the same round.
pub fn maybe_spawn(rng: &mut impl Rng, config: &GameConfig) -> Option<Spawn> {
    if rng.gen::<f64>() >= config.spawn_probability {
        return None;
    }

    let half = config.half_object();
    let x = rng.gen_range(half..=(config.field_width - half).max(half));
    let category = if rng.gen::<f64>() < config.favorable_probability {
        Category::Favorable
    } else {
        Category::Unfavorable
    };
    let speed = rng.gen_range(config.fall_speed_min..=config.fall_speed_max);

    log::trace!("spawn {category:?} at x={x} speed={speed}");
    Some(Spawn {
        x,
        y: 0,
        category,
        speed,
    })
}
