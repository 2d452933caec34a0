//! Screen flow and round bookkeeping.
//!
//! [`Game`] owns every piece of mutable state (store, catcher, session,
//! popups, RNG) and exposes the three things a host can do: forward input,
//! call [`Game::tick`] once per interval while playing, and expire popups
//! against the wall clock. Signals that do not apply to the current phase
//! are ignored.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::compute::{advance, select_tier, StepOutcome};
use crate::config::{GameConfig, TierMessage, Tint};
use crate::entities::{Catcher, FallingObject, GameSession, ObjectId, Phase, ResultTier};
use crate::popup::PopupBoard;
use crate::snapshot::{ObjectView, PlayView, PopupView, Rect, RenderSnapshot, Scene, TextLine};
use crate::spawner::maybe_spawn;
use crate::store::EntityStore;

/// What one `Playing` tick did, captured before any game-over teardown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Ticks elapsed in the round, this one included.
    pub tick: u32,
    pub spawned_id: Option<ObjectId>,
    /// The spawned object after this tick's motion; `None` if nothing spawned
    /// or it was resolved within the same tick.
    pub spawned: Option<FallingObject>,
    pub step: StepOutcome,
    /// Objects still live after pruning.
    pub live_objects: usize,
    pub score: i32,
    pub time_left: u32,
    /// The round ended with this tick.
    pub finished: bool,
}

pub struct Game<R> {
    config: GameConfig,
    rng: R,
    phase: Phase,
    store: EntityStore,
    catcher: Catcher,
    session: GameSession,
    popups: PopupBoard,
}

impl<R: Rng> Game<R> {
    /// A game sitting on the title screen. Rejects configs that fail
    /// [`GameConfig::validate`], since the simulation assumes them sound.
    pub fn new(config: GameConfig, rng: R) -> anyhow::Result<Self> {
        config.validate()?;
        let store = EntityStore::new(config.sparkle_size);
        let catcher = Catcher::centered(&config);
        let popups = PopupBoard::new(Duration::from_millis(config.popup_duration_ms));
        Ok(Self {
            config,
            rng,
            phase: Phase::Title,
            store,
            catcher,
            session: GameSession::new(),
            popups,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn score(&self) -> i32 {
        self.session.score
    }

    pub fn time_left(&self) -> u32 {
        self.session.time_left(&self.config)
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn catcher(&self) -> &Catcher {
        &self.catcher
    }

    pub fn popups(&self) -> &PopupBoard {
        &self.popups
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.tick_interval_ms)
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    /// Click / confirm. Title starts a round, game over returns to the title;
    /// ignored while playing. Returns whether the phase changed.
    pub fn activate(&mut self) -> bool {
        match self.phase {
            Phase::Title => {
                self.start_round();
                true
            }
            Phase::GameOver { .. } => {
                log::info!("Back to title");
                self.phase = Phase::Title;
                true
            }
            Phase::Playing => false,
        }
    }

    /// Pointer moved to field-space `x`. Only honoured while playing; the
    /// latest value simply overwrites the previous one.
    pub fn pointer_moved(&mut self, x: i32) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.catcher.follow_pointer(x);
        true
    }

    // ── Clock ─────────────────────────────────────────────────────────────────

    /// One simulation tick. Returns `None` outside `Playing`, so a host that
    /// keeps calling after the round ended does nothing.
    pub fn tick(&mut self, now: Instant) -> Option<TickReport> {
        if !self.is_playing() {
            return None;
        }

        let spawned_id =
            maybe_spawn(&mut self.rng, &self.config).map(|spawn| self.store.insert(spawn));
        let step = advance(&mut self.store, &self.catcher, &mut self.session, &self.config);
        for request in step.popups.iter().cloned() {
            self.popups.spawn_request(request, now);
        }
        self.session.elapsed += 1;

        let finished = self.session.is_finished(&self.config);
        let report = TickReport {
            tick: self.session.elapsed,
            spawned_id,
            spawned: spawned_id.and_then(|id| self.store.get(id).cloned()),
            step,
            live_objects: self.store.len(),
            score: self.session.score,
            time_left: self.time_left(),
            finished,
        };

        if finished {
            self.finish_round();
        }
        Some(report)
    }

    /// Drop popups whose lifetime has elapsed. Runs in any phase.
    pub fn expire_popups(&mut self, now: Instant) -> usize {
        self.popups.expire_due(now)
    }

    // ── Transitions ───────────────────────────────────────────────────────────

    fn start_round(&mut self) {
        self.session = GameSession::new();
        self.store.clear();
        self.popups.clear();
        self.phase = Phase::Playing;
        log::info!(
            "Round started: {} ticks at {} ms",
            self.config.total_ticks,
            self.config.tick_interval_ms
        );
    }

    fn finish_round(&mut self) {
        let dropped = self.store.clear();
        let final_score = self.session.score;
        let tier = select_tier(final_score, &self.config);
        self.phase = Phase::GameOver { final_score, tier };
        log::info!("Game over: score {final_score}, tier {tier:?}, {dropped} stars left unscored");
    }

    /// Message for a result tier.
    pub fn tier_message(&self, tier: ResultTier) -> &TierMessage {
        let tiers = &self.config.tiers;
        match tier {
            ResultTier::Top => &tiers.top,
            ResultTier::Second => &tiers.second,
            ResultTier::Third => &tiers.third,
            ResultTier::Lowest => &tiers.lowest,
        }
    }

    // ── Render state ──────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> RenderSnapshot {
        let scene = match self.phase {
            Phase::Title => Scene::Title {
                lines: self.title_lines(),
            },
            Phase::Playing => Scene::Playing(self.play_view()),
            Phase::GameOver { final_score, tier } => Scene::GameOver {
                lines: self.game_over_lines(final_score, tier),
            },
        };
        let popups = self
            .popups
            .iter()
            .map(|p| PopupView {
                text: p.text.clone(),
                tint: p.tint,
                x: p.x,
                y: p.y,
            })
            .collect();

        RenderSnapshot {
            field_width: self.config.field_width,
            field_height: self.config.field_height,
            background: self.config.background,
            scene,
            popups,
        }
    }

    fn centre_line(&self, text: impl Into<String>, tint: Tint, y: i32, size: u8) -> TextLine {
        TextLine {
            text: text.into(),
            tint,
            x: self.config.field_width / 2,
            y,
            size,
        }
    }

    fn title_lines(&self) -> Vec<TextLine> {
        let good = GameConfig::delta_text(self.config.favorable_delta);
        let bad = GameConfig::delta_text(self.config.unfavorable_delta);
        vec![
            self.centre_line("Catch the Falling Stars!", Tint::Yellow, 150, 32),
            self.centre_line("Move your mouse to control the basket", Tint::White, 200, 16),
            self.centre_line(format!("Catch yellow stars ({good} points)"), Tint::Yellow, 230, 14),
            self.centre_line(format!("Avoid red stars ({bad} points)"), Tint::Red, 250, 14),
            self.centre_line("Click to start!", Tint::White, 300, 20),
        ]
    }

    fn game_over_lines(&self, final_score: i32, tier: ResultTier) -> Vec<TextLine> {
        let message = self.tier_message(tier);
        vec![
            self.centre_line("Game Over!", Tint::White, 150, 36),
            self.centre_line(format!("Final Score: {final_score}"), Tint::Yellow, 200, 24),
            self.centre_line(message.text.clone(), message.tint, 250, 18),
            self.centre_line("Click to play again!", Tint::White, 320, 16),
        ]
    }

    fn play_view(&self) -> PlayView {
        let objects = self
            .store
            .iter()
            .map(|o| ObjectView {
                id: o.id(),
                x: o.x(),
                y: o.y(),
                size: self.config.object_size,
                tint: o.category().tint(),
                sparkle: o.sparkle().map(|s| s.size),
            })
            .collect();

        PlayView {
            catcher: Rect {
                x: self.catcher.x(),
                y: self.catcher.y(),
                width: self.catcher.width(),
                height: self.catcher.height(),
            },
            catcher_tint: Tint::Brown,
            objects,
            score: TextLine {
                text: format!("Score: {}", self.session.score),
                tint: Tint::White,
                x: 50,
                y: 30,
                size: 18,
            },
            time: TextLine {
                text: format!("Time: {}s", self.time_left()),
                tint: Tint::White,
                x: self.config.field_width - 80,
                y: 30,
                size: 18,
            },
        }
    }
}
