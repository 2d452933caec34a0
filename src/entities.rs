//! All game entity types. Pure data with the few accessors that keep their
//! invariants; the rules that move them live in `compute` and `game`.

use crate::config::{GameConfig, Tint};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Yellow star, adds score when caught.
    Favorable,
    /// Red star, subtracts score when caught.
    Unfavorable,
}

impl Category {
    pub fn tint(self) -> Tint {
        match self {
            Category::Favorable => Tint::Yellow,
            Category::Unfavorable => Tint::Red,
        }
    }

    /// Score change applied when an object of this category is caught.
    pub fn score_delta(self, config: &GameConfig) -> i32 {
        match self {
            Category::Favorable => config.favorable_delta,
            Category::Unfavorable => config.unfavorable_delta,
        }
    }

    /// Popup colour for a catch of this category.
    pub fn popup_tint(self) -> Tint {
        match self {
            Category::Favorable => Tint::Green,
            Category::Unfavorable => Tint::Red,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

// ── Falling objects ───────────────────────────────────────────────────────────

/// Cosmetic highlight centred on a favorable object. It has no position of its
/// own, so it always moves and disappears together with its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sparkle {
    pub size: i32,
}

/// Descriptor produced by the spawner; the store turns it into a
/// [`FallingObject`] with an identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spawn {
    pub x: i32,
    pub y: i32,
    pub category: Category,
    pub speed: i32,
}

/// A live star. Category, speed and x are fixed at creation; only y changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallingObject {
    id: ObjectId,
    x: i32,
    y: i32,
    category: Category,
    speed: i32,
    sparkle: Option<Sparkle>,
}

impl FallingObject {
    pub(crate) fn new(id: ObjectId, spawn: Spawn, sparkle_size: i32) -> Self {
        let sparkle = match spawn.category {
            Category::Favorable => Some(Sparkle { size: sparkle_size }),
            Category::Unfavorable => None,
        };
        Self {
            id,
            x: spawn.x,
            y: spawn.y,
            category: spawn.category,
            speed: spawn.speed,
            sparkle,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn sparkle(&self) -> Option<Sparkle> {
        self.sparkle
    }

    /// Move down by this object's own speed (sparkle included).
    pub(crate) fn fall(&mut self) {
        self.y += self.speed;
    }
}

// ── Catcher ───────────────────────────────────────────────────────────────────

/// The player's basket. Only `x` moves, and only through [`Catcher::follow_pointer`]
/// or [`Catcher::set_x`], both of which clamp into the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catcher {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    max_x: i32,
}

impl Catcher {
    /// Catcher centred horizontally at its fixed height.
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            x: config.catcher_max_x() / 2,
            y: config.catcher_y(),
            width: config.catcher_width,
            height: config.catcher_height,
            max_x: config.catcher_max_x(),
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x.clamp(0, self.max_x);
    }

    /// Centre the catcher under the pointer's field-space x.
    pub fn follow_pointer(&mut self, pointer_x: i32) {
        self.set_x(pointer_x - self.width / 2);
    }

    /// Whether `x` lies within the catcher's horizontal span (edges included).
    pub fn spans(&self, x: i32) -> bool {
        self.x <= x && x <= self.x + self.width
    }
}

// ── Session & phases ──────────────────────────────────────────────────────────

/// Score and clock of one round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameSession {
    /// Has no floor; can go negative.
    pub score: i32,
    /// Ticks simulated so far in this round.
    pub elapsed: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds shown on the HUD: remaining ticks floor-divided by the
    /// configured ticks-per-second, not true wall time.
    pub fn time_left(&self, config: &GameConfig) -> u32 {
        config.total_ticks.saturating_sub(self.elapsed) / config.ticks_per_display_second
    }

    pub fn is_finished(&self, config: &GameConfig) -> bool {
        self.elapsed >= config.total_ticks
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTier {
    Top,
    Second,
    Third,
    Lowest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Title,
    Playing,
    GameOver { final_score: i32, tier: ResultTier },
}
