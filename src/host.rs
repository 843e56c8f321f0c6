//! Seams between the overlay core and whatever engine hosts it. An adapter
//! implements these against the real client; the headless scene replay
//! implements them in memory.

use crate::entity::EntitySnapshot;
use crate::text::TextLine;
use glam::{DQuat, DVec3, Mat4};
use serde::{Deserialize, Serialize};

/// Scaled GUI size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: DVec3,
    #[serde(default = "identity_rotation")]
    pub rotation: DQuat,
}

fn identity_rotation() -> DQuat {
    DQuat::IDENTITY
}

impl Camera {
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            rotation: DQuat::IDENTITY,
        }
    }
}

pub trait HostWorld {
    /// `None` while no local player exists (menus, loading).
    fn player_position(&self) -> Option<DVec3>;
    fn visible_entities(&self) -> &[EntitySnapshot];
    /// Living entity under the crosshair, if any.
    fn crosshair_target(&self) -> Option<&EntitySnapshot>;
    /// Entity the player is riding, if any.
    fn vehicle(&self) -> Option<&EntitySnapshot>;
    fn debug_hud_visible(&self) -> bool;
    fn viewport(&self) -> Viewport;
    fn text_background_opacity(&self, default: f32) -> f32 {
        default
    }
}

pub trait TextMetrics {
    fn font_height(&self) -> i32;
    fn text_width(&self, line: &TextLine) -> i32;
}

/// Placement of the embedded entity preview inside the HUD panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntityPreview {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub size: i32,
    pub scale: f32,
    pub mouse_x: f32,
    pub mouse_y: f32,
}

pub trait HudSurface: TextMetrics {
    fn draw_text_with_shadow(&mut self, line: &TextLine, x: i32, y: i32, color: u32);
    fn draw_entity_preview(&mut self, entity: &EntitySnapshot, preview: &EntityPreview);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPass {
    Shadow,
    Foreground,
}

/// One text draw in label space, transformed by `matrix`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillboardText {
    pub entity_id: u32,
    pub line: TextLine,
    pub x: f32,
    pub y: f32,
    pub color: u32,
    pub background: u32,
    pub light: u32,
    pub pass: TextPass,
    pub matrix: Mat4,
}

pub trait WorldSurface: TextMetrics {
    fn draw_text(&mut self, text: &BillboardText);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefaultKey {
    Unbound,
    Code(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyBindingSpec {
    pub translation_key: &'static str,
    pub category: &'static str,
    pub default_key: DefaultKey,
}

pub trait KeyBinding {
    /// Consumes one pending press.
    fn was_pressed(&mut self) -> bool;
}

pub trait KeyBindings {
    fn register(&mut self, spec: &KeyBindingSpec) -> Box<dyn KeyBinding>;
}

pub trait Translator {
    fn translate(&self, key: &str) -> String;
}

/// English labels for the keys this crate uses; unknown keys echo back.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishTranslator;

impl Translator for EnglishTranslator {
    fn translate(&self, key: &str) -> String {
        let label = match key {
            "gui.act.invView.horse" => "Toggle horse 3D overlay",
            "key.categories.horsedebug" => "HorseDebug",
            "gui.act.invView.horse.jump" => "Jump",
            "gui.act.invView.horse.speed" => "Speed",
            "gui.act.invView.horse.health" => "Health",
            "gui.act.invView.horse.variant" => "Variant",
            "gui.act.invView.cat.variant.unknown" => "Unknown",
            _ => return english_variant(key).unwrap_or_else(|| key.to_string()),
        };
        label.to_string()
    }
}

/// `gui.act.invView.horse.variant.dark_brown` style keys: title-case the tail.
fn english_variant(key: &str) -> Option<String> {
    let tail = key
        .strip_prefix("gui.act.invView.horse.variant.marking.")
        .or_else(|| key.strip_prefix("gui.act.invView.horse.variant."))
        .or_else(|| key.strip_prefix("gui.act.invView.cat.variant."))?;
    let words: Vec<String> = tail
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    Some(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_labels() {
        let t = EnglishTranslator;
        assert_eq!(t.translate("gui.act.invView.horse.jump"), "Jump");
        assert_eq!(t.translate("gui.act.invView.horse.variant.darkbrown"), "Darkbrown");
        assert_eq!(t.translate("gui.act.invView.horse.variant.marking.white_dots"), "White Dots");
        assert_eq!(t.translate("gui.act.invView.cat.variant.all_black"), "All Black");
        assert_eq!(t.translate("no.such.key"), "no.such.key");
    }
}
