//! Render-state handed to the display adapter once per frame.
//!
//! Everything is in field units. The adapter owns no game logic: it only
//! turns a snapshot into draw calls.

use crate::config::Tint;
use crate::entities::ObjectId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A line of centred text. `size` is the reference point size, which
/// adapters may use to pick emphasis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub tint: Tint,
    pub x: i32,
    pub y: i32,
    pub size: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectView {
    pub id: ObjectId,
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub tint: Tint,
    /// Sparkle diameter, drawn white and centred on the object.
    pub sparkle: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayView {
    pub catcher: Rect,
    pub catcher_tint: Tint,
    pub objects: Vec<ObjectView>,
    pub score: TextLine,
    pub time: TextLine,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scene {
    Title { lines: Vec<TextLine> },
    Playing(PlayView),
    GameOver { lines: Vec<TextLine> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupView {
    pub text: String,
    pub tint: Tint,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub field_width: i32,
    pub field_height: i32,
    pub background: Tint,
    pub scene: Scene,
    /// Popups outlive phase changes, so they sit beside the scene.
    pub popups: Vec<PopupView>,
}

impl RenderSnapshot {
    pub fn play_view(&self) -> Option<&PlayView> {
        match &self.scene {
            Scene::Playing(view) => Some(view),
            _ => None,
        }
    }

    /// Every text line in the scene, in draw order.
    pub fn text_lines(&self) -> Vec<&TextLine> {
        match &self.scene {
            Scene::Title { lines } | Scene::GameOver { lines } => lines.iter().collect(),
            Scene::Playing(view) => vec![&view.score, &view.time],
        }
    }
}
