//! Game tuning: every constant the simulation reads lives in [`GameConfig`].
//!
//! Defaults reproduce the reference game (600x500 field, 30 ms ticks,
//! 300-tick rounds). A JSON file can override any subset of fields.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

// ── Colours ───────────────────────────────────────────────────────────────────

/// Named colours used by the game. The render adapter decides how each one
/// maps onto its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Navy,
    Yellow,
    Red,
    White,
    Green,
    Gold,
    Lime,
    Cyan,
    Orange,
    Brown,
    Black,
}

// ── Result tiers ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierMessage {
    pub text: String,
    pub tint: Tint,
}

impl TierMessage {
    fn new(text: &str, tint: Tint) -> Self {
        Self {
            text: text.to_string(),
            tint,
        }
    }
}

/// Score thresholds (inclusive lower bounds) and the message shown for each
/// tier on the game-over screen. Anything below `third_min` is the lowest tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierConfig {
    pub top_min: i32,
    pub second_min: i32,
    pub third_min: i32,
    pub top: TierMessage,
    pub second: TierMessage,
    pub third: TierMessage,
    pub lowest: TierMessage,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            top_min: 100,
            second_min: 50,
            third_min: 0,
            top: TierMessage::new("Excellent! You're a star catcher!", Tint::Gold),
            second: TierMessage::new("Great job! Keep practicing!", Tint::Lime),
            third: TierMessage::new("Good effort! Try again!", Tint::Cyan),
            lowest: TierMessage::new("Watch out for those red stars!", Tint::Orange),
        }
    }
}

// ── Main config ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: i32,
    pub field_height: i32,
    pub background: Tint,

    // === Catcher ===
    pub catcher_width: i32,
    pub catcher_height: i32,
    /// Distance from the field bottom to the catcher's top edge.
    pub catcher_floor_gap: i32,

    // === Falling objects ===
    pub object_size: i32,
    /// Diameter of the white sparkle drawn on favorable objects.
    pub sparkle_size: i32,
    pub fall_speed_min: i32,
    pub fall_speed_max: i32,

    // === Clock ===
    pub tick_interval_ms: u64,
    pub total_ticks: u32,
    /// Divisor turning remaining ticks into the "seconds" shown on the HUD.
    pub ticks_per_display_second: u32,

    // === Spawning ===
    pub spawn_probability: f64,
    pub favorable_probability: f64,

    // === Scoring ===
    pub favorable_delta: i32,
    pub unfavorable_delta: i32,
    pub tiers: TierConfig,

    // === Popups ===
    pub popup_duration_ms: u64,
    /// How far above the caught object the popup text appears.
    pub popup_lift: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 600,
            field_height: 500,
            background: Tint::Navy,

            catcher_width: 80,
            catcher_height: 20,
            catcher_floor_gap: 40,

            object_size: 15,
            sparkle_size: 4,
            fall_speed_min: 3,
            fall_speed_max: 7,

            tick_interval_ms: 30,
            total_ticks: 300,
            ticks_per_display_second: 10,

            spawn_probability: 1.0 / 20.0,
            favorable_probability: 0.75,

            favorable_delta: 10,
            unfavorable_delta: -5,
            tiers: TierConfig::default(),

            popup_duration_ms: 300,
            popup_lift: 20,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file. Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("loading config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing config")
    }

    /// Reject configurations the simulation cannot run sensibly.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.field_width > 0 && self.field_height > 0,
            "field must have a positive size, got {}x{}",
            self.field_width,
            self.field_height
        );
        ensure!(
            self.catcher_width > 0 && self.catcher_height > 0,
            "catcher must have a positive size"
        );
        ensure!(
            self.catcher_width <= self.field_width,
            "catcher width {} exceeds field width {}",
            self.catcher_width,
            self.field_width
        );
        ensure!(
            (0..self.field_height).contains(&self.catcher_floor_gap),
            "catcher_floor_gap {} must lie inside the field height {}",
            self.catcher_floor_gap,
            self.field_height
        );
        ensure!(
            self.object_size > 0 && self.object_size <= self.field_width,
            "object_size {} must be positive and fit the field",
            self.object_size
        );
        ensure!(self.sparkle_size >= 0, "sparkle_size must not be negative");
        ensure!(
            self.fall_speed_min > 0 && self.fall_speed_min <= self.fall_speed_max,
            "fall speed range {}..={} is empty or not positive",
            self.fall_speed_min,
            self.fall_speed_max
        );
        ensure!(self.tick_interval_ms > 0, "tick_interval_ms must be positive");
        ensure!(self.total_ticks > 0, "total_ticks must be positive");
        ensure!(
            self.ticks_per_display_second > 0,
            "ticks_per_display_second must be positive"
        );
        ensure!(
            (0.0..=1.0).contains(&self.spawn_probability),
            "spawn_probability {} outside [0, 1]",
            self.spawn_probability
        );
        ensure!(
            (0.0..=1.0).contains(&self.favorable_probability),
            "favorable_probability {} outside [0, 1]",
            self.favorable_probability
        );
        ensure!(
            self.tiers.top_min >= self.tiers.second_min
                && self.tiers.second_min >= self.tiers.third_min,
            "tier thresholds must be descending"
        );
        Ok(())
    }

    /// Top edge of the catcher, fixed for the whole game.
    pub fn catcher_y(&self) -> i32 {
        self.field_height - self.catcher_floor_gap
    }

    /// Rightmost legal catcher x.
    pub fn catcher_max_x(&self) -> i32 {
        self.field_width - self.catcher_width
    }

    pub fn half_object(&self) -> i32 {
        self.object_size / 2
    }

    /// Text shown when an object of the given delta is caught, e.g. "+10" / "-5".
    pub fn delta_text(delta: i32) -> String {
        if delta >= 0 {
            format!("+{delta}")
        } else {
            format!("{delta}")
        }
    }
}
