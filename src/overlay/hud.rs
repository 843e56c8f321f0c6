use crate::entity::EntitySnapshot;
use crate::host::{EntityPreview, HostWorld, HudSurface, TextMetrics, Translator, Viewport};
use crate::overlay::describe::entity_data;
use crate::text::TextLine;
use serde::Serialize;

const PANEL_PADDING: i32 = 5;
const PREVIEW_WIDTH: i32 = 100;
const PREVIEW_MIN_HEIGHT: i32 = 100;
const TEXT_COLOR: u32 = 0xFFFF_FFFF;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelLayout {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Top-left of each text line.
    pub line_positions: Vec<(i32, i32)>,
    pub preview: Option<EntityPreview>,
}

/// Which entity the HUD panel describes: the ridden horse-like mount first,
/// then the living entity under the crosshair.
pub fn select_target<W: HostWorld + ?Sized>(world: &W) -> Option<&EntitySnapshot> {
    if let Some(vehicle) = world.vehicle() {
        if vehicle.kind.is_horse_like() {
            return Some(vehicle);
        }
    }
    world.crosshair_target()
}

/// Sizes and places the panel anchored at (`anchor_x`, `anchor_y`), flipping
/// back on any axis that would leave the viewport. `None` for no lines.
pub fn layout_panel<M: TextMetrics + ?Sized>(
    metrics: &M,
    viewport: Viewport,
    anchor_x: i32,
    anchor_y: i32,
    lines: &[TextLine],
    preview_of: Option<&EntitySnapshot>,
) -> Option<PanelLayout> {
    if lines.is_empty() {
        return None;
    }
    let line_step = metrics.font_height() + 1;

    let mut width = 0;
    let mut height = 0;
    for line in lines {
        height += line_step;
        width = width.max(metrics.text_width(line) + 10);
    }
    if preview_of.is_some() {
        width += PREVIEW_WIDTH;
        height = height.max(PREVIEW_MIN_HEIGHT);
    }

    let mut x = anchor_x + PANEL_PADDING;
    let mut y = anchor_y + PANEL_PADDING;
    if x + width > viewport.width {
        x -= width + 10;
    }
    if y + height > viewport.height {
        y -= height + 10;
    }

    let line_positions = (0..lines.len() as i32)
        .map(|i| (x + PANEL_PADDING, y + PANEL_PADDING + i * line_step))
        .collect();

    let preview = preview_of.map(|entity| {
        let corner = entity.bounding_box().corner_length();
        let size = if corner > 0.0 {
            (120.0 / corner) as i32
        } else {
            0
        };
        let x1 = x + width - 55;
        let y1 = y + height + 105;
        EntityPreview {
            x1,
            y1,
            x2: x1 + width,
            y2: y1 + height,
            size,
            scale: 0.0,
            mouse_x: 50.0,
            mouse_y: 50.0,
        }
    });

    Some(PanelLayout {
        x,
        y,
        width,
        height,
        line_positions,
        preview,
    })
}

pub fn draw_panel<S: HudSurface + ?Sized>(
    surface: &mut S,
    layout: &PanelLayout,
    lines: &[TextLine],
    entity: Option<&EntitySnapshot>,
) {
    for (line, &(x, y)) in lines.iter().zip(&layout.line_positions) {
        surface.draw_text_with_shadow(line, x, y, TEXT_COLOR);
    }
    if let (Some(preview), Some(entity)) = (&layout.preview, entity) {
        surface.draw_entity_preview(entity, preview);
    }
}

/// Full HUD pass. Draws only while the debug HUD is open. Returns the layout
/// that was drawn, if any.
pub fn render_overlay<W, S>(world: &W, surface: &mut S, t: &dyn Translator) -> Option<PanelLayout>
where
    W: HostWorld + ?Sized,
    S: HudSurface + ?Sized,
{
    if !world.debug_hud_visible() {
        return None;
    }
    let target = select_target(world)?;
    let lines = entity_data(target, t);
    let viewport = world.viewport();
    let layout = layout_panel(
        &*surface,
        viewport,
        viewport.width,
        viewport.height,
        &lines,
        Some(target),
    )?;
    draw_panel(surface, &layout, &lines, Some(target));
    Some(layout)
}
