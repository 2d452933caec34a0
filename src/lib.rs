//! Catch the Falling Stars: a terminal arcade game.
//!
//! The library holds the whole game core (spawning, motion, catching, scoring,
//! screen transitions and score popups) plus a thin crossterm adapter. The
//! binary in `main.rs` only wires the terminal, the clock and the input thread
//! to [`game::Game`].

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod game;
pub mod input;
pub mod popup;
pub mod snapshot;
pub mod spawner;
pub mod store;

pub use config::{GameConfig, Tint};
pub use game::{Game, TickReport};
pub use snapshot::RenderSnapshot;
