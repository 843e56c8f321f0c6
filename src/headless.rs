//! In-memory host: replays a JSON scene snapshot through the same handlers a
//! real client adapter drives. Used by the CLI and the integration tests.

use crate::entity::EntitySnapshot;
use crate::error::HdResult;
use crate::host::{
    BillboardText, Camera, EntityPreview, HostWorld, HudSurface, KeyBinding, KeyBindingSpec,
    KeyBindings, TextMetrics, Viewport, WorldSurface,
};
use crate::text::TextLine;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

fn default_viewport() -> Viewport {
    Viewport {
        width: 427,
        height: 240,
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub player: Option<DVec3>,
    #[serde(default)]
    pub camera: Option<Camera>,
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_true")]
    pub debug_hud: bool,
    #[serde(default)]
    pub background_opacity: Option<f32>,
    /// Id of the entity under the crosshair.
    #[serde(default)]
    pub crosshair: Option<u32>,
    /// Id of the entity the player rides.
    #[serde(default)]
    pub vehicle: Option<u32>,
    #[serde(default)]
    pub entities: Vec<EntitySnapshot>,
}

impl Scene {
    pub fn new(player: Option<DVec3>, entities: Vec<EntitySnapshot>) -> Self {
        Self {
            player,
            camera: None,
            viewport: default_viewport(),
            debug_hud: true,
            background_opacity: None,
            crosshair: None,
            vehicle: None,
            entities,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HdResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> HdResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn entity(&self, id: u32) -> Option<&EntitySnapshot> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Camera from the scene, else one at the player's position.
    pub fn camera(&self) -> Camera {
        self.camera
            .unwrap_or_else(|| Camera::at(self.player.unwrap_or(DVec3::ZERO)))
    }
}

impl HostWorld for Scene {
    fn player_position(&self) -> Option<DVec3> {
        self.player
    }

    fn visible_entities(&self) -> &[EntitySnapshot] {
        &self.entities
    }

    fn crosshair_target(&self) -> Option<&EntitySnapshot> {
        self.crosshair.and_then(|id| self.entity(id))
    }

    fn vehicle(&self) -> Option<&EntitySnapshot> {
        self.vehicle.and_then(|id| self.entity(id))
    }

    fn debug_hud_visible(&self) -> bool {
        self.debug_hud
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn text_background_opacity(&self, default: f32) -> f32 {
        self.background_opacity.unwrap_or(default)
    }
}

/// Fixed-advance font: every char is `char_width` wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMetrics {
    pub font_height: i32,
    pub char_width: i32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            font_height: 9,
            char_width: 6,
        }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn font_height(&self) -> i32 {
        self.font_height
    }

    fn text_width(&self, line: &TextLine) -> i32 {
        line.plain().chars().count() as i32 * self.char_width
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HudDraw {
    Text {
        line: TextLine,
        x: i32,
        y: i32,
        color: u32,
    },
    Preview {
        entity_id: u32,
        preview: EntityPreview,
    },
}

#[derive(Debug, Default, Clone)]
pub struct RecordingHud {
    pub metrics: MonospaceMetrics,
    pub draws: Vec<HudDraw>,
}

impl TextMetrics for RecordingHud {
    fn font_height(&self) -> i32 {
        self.metrics.font_height()
    }

    fn text_width(&self, line: &TextLine) -> i32 {
        self.metrics.text_width(line)
    }
}

impl HudSurface for RecordingHud {
    fn draw_text_with_shadow(&mut self, line: &TextLine, x: i32, y: i32, color: u32) {
        self.draws.push(HudDraw::Text {
            line: line.clone(),
            x,
            y,
            color,
        });
    }

    fn draw_entity_preview(&mut self, entity: &EntitySnapshot, preview: &EntityPreview) {
        self.draws.push(HudDraw::Preview {
            entity_id: entity.id,
            preview: *preview,
        });
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingWorld {
    pub metrics: MonospaceMetrics,
    pub draws: Vec<BillboardText>,
}

impl RecordingWorld {
    pub fn for_entity(&self, id: u32) -> impl Iterator<Item = &BillboardText> {
        self.draws.iter().filter(move |d| d.entity_id == id)
    }
}

impl TextMetrics for RecordingWorld {
    fn font_height(&self) -> i32 {
        self.metrics.font_height()
    }

    fn text_width(&self, line: &TextLine) -> i32 {
        self.metrics.text_width(line)
    }
}

impl WorldSurface for RecordingWorld {
    fn draw_text(&mut self, text: &BillboardText) {
        self.draws.push(text.clone());
    }
}

/// Key whose presses are queued from outside through a shared counter.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKey {
    pending: Rc<Cell<u32>>,
}

impl ScriptedKey {
    pub fn press(&self) {
        self.pending.set(self.pending.get() + 1);
    }
}

impl KeyBinding for ScriptedKey {
    fn was_pressed(&mut self) -> bool {
        let n = self.pending.get();
        if n == 0 {
            return false;
        }
        self.pending.set(n - 1);
        true
    }
}

/// Hands out one shared [`ScriptedKey`] per registration and remembers specs.
#[derive(Debug, Default)]
pub struct ScriptedBindings {
    pub registered: Vec<KeyBindingSpec>,
    pub key: ScriptedKey,
}

impl KeyBindings for ScriptedBindings {
    fn register(&mut self, spec: &KeyBindingSpec) -> Box<dyn KeyBinding> {
        self.registered.push(spec.clone());
        Box::new(self.key.clone())
    }
}
