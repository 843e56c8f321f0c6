use crate::host::{BillboardText, Camera, HostWorld, TextMetrics, TextPass, WorldSurface};
use crate::scan::{BestFlags, GroupEntry, GroupScan};
use crate::stats::{STAT_HEALTH, STAT_JUMP, STAT_SPEED};
use crate::text::{Rgb, Span, TextLine, UTF8_HEART, UTF8_STAR};
use glam::{Mat4, Quat, Vec3};
use tracing::debug;

pub const LABEL_SCALE: f32 = 0.025;
pub const DEFAULT_BACKGROUND_OPACITY: f32 = 0.25;
pub const SHADOW_COLOR: u32 = 0x22FF_FFFF;
pub const FOREGROUND_COLOR: u32 = 0xFFFF_FFFF;
pub const FULL_BRIGHT: u32 = 15_728_880;

/// Jump, health, speed and, for the best composite score, a star.
pub fn label_lines(entry: &GroupEntry<'_>, flags: BestFlags) -> Vec<TextLine> {
    let stats = &entry.stats;
    let mut lines = vec![
        STAT_JUMP.formatted_text_with(stats.jump, " b", flags.jump),
        STAT_HEALTH
            .formatted_text_with(stats.health, " ", flags.health)
            .push(Span::new(UTF8_HEART, Rgb::RED)),
        STAT_SPEED.formatted_text_with(stats.speed, " m/s", flags.speed),
    ];
    if flags.score {
        lines.push(TextLine::colored(UTF8_STAR, Rgb::YELLOW));
    }
    lines
}

/// Model matrix for a label above the entity of `entry`, relative to the
/// camera. Height comes from the entity, Y from its topmost rider.
pub fn label_matrix(entry: &GroupEntry<'_>, camera: &Camera) -> Mat4 {
    let entity = entry.entity;
    let text_height = entity.height + 0.5;
    let text_y = entity.topmost_rider().position.y;
    let offset = Vec3::new(
        (entity.position.x - camera.position.x) as f32,
        (text_y - camera.position.y + text_height) as f32,
        (entity.position.z - camera.position.z) as f32,
    );
    let q = camera.rotation;
    let rotation = Quat::from_xyzw(q.x as f32, q.y as f32, q.z as f32, q.w as f32);
    Mat4::from_translation(offset)
        * Mat4::from_quat(rotation)
        * Mat4::from_scale(Vec3::new(-LABEL_SCALE, -LABEL_SCALE, LABEL_SCALE))
}

/// Shadow and foreground draws for one entity's label, bottom line first.
pub fn layout_label<M: TextMetrics + ?Sized>(
    metrics: &M,
    entry: &GroupEntry<'_>,
    flags: BestFlags,
    camera: &Camera,
    opacity: f32,
) -> Vec<BillboardText> {
    let matrix = label_matrix(entry, camera);
    let font_height = metrics.font_height();
    let background = ((opacity * 255.0) as u32) << 24;
    let mut y = if entry.entity.has_custom_name {
        -(font_height + 4)
    } else {
        0
    };

    let mut draws = Vec::new();
    for line in label_lines(entry, flags) {
        let x = -(metrics.text_width(&line) / 2) as f32;
        for (pass, color, bg) in [
            (TextPass::Shadow, SHADOW_COLOR, background),
            (TextPass::Foreground, FOREGROUND_COLOR, 0),
        ] {
            draws.push(BillboardText {
                entity_id: entry.entity.id,
                line: line.clone(),
                x,
                y: y as f32,
                color,
                background: bg,
                light: FULL_BRIGHT,
                pass,
                matrix,
            });
        }
        y -= font_height + 2;
    }
    draws
}

/// Full world pass over the frame's entities. Returns how many entities got
/// a label.
pub fn render_world<W, S>(world: &W, camera: &Camera, surface: &mut S) -> usize
where
    W: HostWorld + ?Sized,
    S: WorldSurface + ?Sized,
{
    let Some(player) = world.player_position() else {
        return 0;
    };
    let scan = GroupScan::scan(player, world.visible_entities());
    if scan.is_empty() {
        return 0;
    }
    let opacity = world.text_background_opacity(DEFAULT_BACKGROUND_OPACITY);
    for (entry, flags) in scan.flagged() {
        for draw in layout_label(&*surface, entry, flags, camera, opacity) {
            surface.draw_text(&draw);
        }
    }
    debug!(target: "HorseDebug", "labelled {} entities", scan.len());
    scan.len()
}
