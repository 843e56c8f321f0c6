use crate::entity::{Attribute, EntityKind, EntitySnapshot, HorseColor, HorseMarking};
use crate::host::Translator;
use crate::stats::{significant_numbers, STAT_HEALTH, STAT_JUMP, STAT_SPEED};
use crate::text::{Rgb, Span, TextLine};

pub fn horse_color_description(color_id: u32) -> String {
    HorseColor::from_repr(color_id)
        .map(|c| c.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn horse_marking_description(marking_id: u32) -> String {
    HorseMarking::from_repr(marking_id)
        .map(|m| m.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn horse_color_name(t: &dyn Translator, color_id: u32, marking_id: u32) -> String {
    format!(
        "{} / {}",
        t.translate(&format!(
            "gui.act.invView.horse.variant.{}",
            horse_color_description(color_id)
        )),
        t.translate(&format!(
            "gui.act.invView.horse.variant.marking.{}",
            horse_marking_description(marking_id)
        ))
    )
}

/// Packed variant id as the HUD has always shown it: `(color + marking) << 8`.
pub fn horse_variant_id(color_id: u32, marking_id: u32) -> u32 {
    (color_id + marking_id) << 8
}

pub fn cat_variant_name(t: &dyn Translator, variant: Option<&str>) -> String {
    match variant {
        None => t.translate("gui.act.invView.cat.variant.unknown"),
        Some(id) => {
            let path = id.rsplit(':').next().unwrap_or(id);
            t.translate(&format!("gui.act.invView.cat.variant.{}", path))
        }
    }
}

fn labelled(t: &dyn Translator, key: &str, value: TextLine) -> TextLine {
    TextLine::colored(format!("{}: ", t.translate(key)), Rgb::WHITE).append(value)
}

/// Info lines for the HUD panel of `entity`.
pub fn entity_data(entity: &EntitySnapshot, t: &dyn Translator) -> Vec<TextLine> {
    let mut lines = vec![
        TextLine::colored(entity.display_name.clone(), Rgb::AQUA),
        TextLine::colored(entity.type_id.clone(), Rgb::GRAY),
    ];
    let variant_key = "gui.act.invView.horse.variant";

    match &entity.kind {
        EntityKind::Cat { variant } => {
            let id = variant.as_deref().unwrap_or("unknown");
            let name = cat_variant_name(t, variant.as_deref());
            lines.push(labelled(
                t,
                variant_key,
                TextLine::colored(format!("{} ({})", name, id), Rgb::WHITE),
            ));
        }
        EntityKind::Sheep { color } => {
            lines.push(labelled(
                t,
                variant_key,
                TextLine::colored(format!("{} ({})", color, color.id()), Rgb::WHITE),
            ));
        }
        EntityKind::Horse { color, marking } => {
            lines.push(labelled(
                t,
                variant_key,
                TextLine::colored(
                    format!(
                        "{} ({})",
                        horse_color_name(t, *color, *marking),
                        horse_variant_id(*color, *marking)
                    ),
                    Rgb::WHITE,
                ),
            ));
        }
        EntityKind::HorseLike | EntityKind::Other => {}
    }

    if entity.kind.is_horse_like() {
        let jump = entity.attribute(Attribute::JumpStrength);
        let speed = entity.attribute(Attribute::MovementSpeed);
        let health = entity.attribute(Attribute::MaxHealth);

        lines.push(labelled(
            t,
            "gui.act.invView.horse.jump",
            STAT_JUMP.formatted_text(jump),
        ));
        lines.push(labelled(
            t,
            "gui.act.invView.horse.speed",
            STAT_SPEED.formatted_text(speed).push(Span::new(
                format!(" m/s ({} iu)", significant_numbers(speed)),
                Rgb::WHITE,
            )),
        ));
        lines.push(labelled(
            t,
            "gui.act.invView.horse.health",
            STAT_HEALTH
                .formatted_text(health)
                .push(Span::new(" HP", Rgb::WHITE)),
        ));
    }
    lines
}
