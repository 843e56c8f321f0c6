use glam::DVec3;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, FromRepr};

/// Host attributes this crate reads, with the engine-defined defaults used
/// when an entity has no instance of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Attribute {
    JumpStrength,
    MovementSpeed,
    MaxHealth,
}

impl Attribute {
    pub fn default_value(self) -> f64 {
        match self {
            Attribute::JumpStrength => 0.7,
            Attribute::MovementSpeed => 0.7,
            Attribute::MaxHealth => 20.0,
        }
    }
}

/// Attribute base values as reported by the host. `None` means the entity
/// has no instance of that attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default)]
    pub jump_strength: Option<f64>,
    #[serde(default)]
    pub movement_speed: Option<f64>,
    #[serde(default)]
    pub max_health: Option<f64>,
}

impl Attributes {
    pub fn new(jump_strength: f64, movement_speed: f64, max_health: f64) -> Self {
        Self {
            jump_strength: Some(jump_strength),
            movement_speed: Some(movement_speed),
            max_health: Some(max_health),
        }
    }

    /// Value of `attribute`, floored at 0 (NaN reads as 0). Group maxima
    /// start at 0, so every value must be non-negative to compete.
    pub fn get(&self, attribute: Attribute) -> f64 {
        let value = match attribute {
            Attribute::JumpStrength => self.jump_strength,
            Attribute::MovementSpeed => self.movement_speed,
            Attribute::MaxHealth => self.max_health,
        };
        value.unwrap_or_else(|| attribute.default_value()).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromRepr)]
#[repr(u32)]
#[strum(serialize_all = "snake_case")]
pub enum HorseColor {
    White = 0,
    Creamy = 1,
    Chestnut = 2,
    Brown = 3,
    Black = 4,
    Gray = 5,
    #[strum(serialize = "darkbrown")]
    DarkBrown = 6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromRepr)]
#[repr(u32)]
#[strum(serialize_all = "snake_case")]
pub enum HorseMarking {
    None = 0,
    White = 1,
    WhiteField = 2,
    WhiteDots = 3,
    BlackDots = 4,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromRepr, Serialize, Deserialize,
)]
#[repr(u32)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DyeColor {
    White = 0,
    Orange = 1,
    Magenta = 2,
    LightBlue = 3,
    Yellow = 4,
    Lime = 5,
    Pink = 6,
    Gray = 7,
    LightGray = 8,
    Cyan = 9,
    Purple = 10,
    Blue = 11,
    Brown = 12,
    Green = 13,
    Red = 14,
    Black = 15,
}

impl DyeColor {
    pub fn id(self) -> u32 {
        self as u32
    }
}

/// Kind-specific data the HUD panel describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityKind {
    /// Horse with raw variant ids; unknown ids are shown as "unknown".
    Horse { color: u32, marking: u32 },
    /// Donkeys, mules, llamas, camels, skeleton and zombie horses.
    HorseLike,
    /// `variant` is the registry id (`minecraft:tabby`), absent if unregistered.
    Cat {
        #[serde(default)]
        variant: Option<String>,
    },
    Sheep { color: DyeColor },
    Other,
}

impl EntityKind {
    pub fn is_horse_like(&self) -> bool {
        matches!(self, EntityKind::Horse { .. } | EntityKind::HorseLike)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Box of `width` x `height` x `width` standing on `feet`.
    pub fn standing(feet: DVec3, width: f64, height: f64) -> Self {
        let half = width / 2.0;
        Self {
            min: DVec3::new(feet.x - half, feet.y, feet.z - half),
            max: DVec3::new(feet.x + half, feet.y + height, feet.z + half),
        }
    }

    /// Length of the diagonal between the two corners.
    pub fn corner_length(&self) -> f64 {
        self.min.distance(self.max)
    }
}

fn default_width() -> f64 {
    0.6
}

/// Per-frame view of one living entity. Never stored across frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub id: u32,
    /// Namespaced type identifier, e.g. `minecraft:horse`.
    pub type_id: String,
    pub display_name: String,
    #[serde(default)]
    pub has_custom_name: bool,
    #[serde(flatten)]
    pub kind: EntityKind,
    pub position: DVec3,
    pub height: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default)]
    pub attributes: Attributes,
    /// Riders, first one on top of the stack.
    #[serde(default)]
    pub passengers: Vec<EntitySnapshot>,
}

impl EntitySnapshot {
    pub fn new(id: u32, type_id: impl Into<String>, kind: EntityKind, position: DVec3) -> Self {
        let type_id = type_id.into();
        let display_name = type_id
            .rsplit(':')
            .next()
            .unwrap_or(type_id.as_str())
            .to_string();
        Self {
            id,
            type_id,
            display_name,
            has_custom_name: false,
            kind,
            position,
            height: 1.6,
            width: default_width(),
            attributes: Attributes::default(),
            passengers: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_custom_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self.has_custom_name = true;
        self
    }

    pub fn with_passenger(mut self, passenger: EntitySnapshot) -> Self {
        self.passengers.push(passenger);
        self
    }

    pub fn attribute(&self, attribute: Attribute) -> f64 {
        self.attributes.get(attribute)
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::standing(self.position, self.width, self.height)
    }

    /// Follows the first passenger of each rider up to the top of the stack.
    pub fn topmost_rider(&self) -> &EntitySnapshot {
        let mut top = self;
        while let Some(next) = top.passengers.first() {
            top = next;
        }
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attributes_use_defaults() {
        let e = EntitySnapshot::new(1, "minecraft:cat", EntityKind::Cat { variant: None }, DVec3::ZERO);
        assert_eq!(e.attribute(Attribute::JumpStrength), 0.7);
        assert_eq!(e.attribute(Attribute::MovementSpeed), 0.7);
        assert_eq!(e.attribute(Attribute::MaxHealth), 20.0);
        assert_eq!(e.display_name, "cat");
    }

    #[test]
    fn negative_and_nan_attributes_floor_at_zero() {
        let a = Attributes::new(-0.5, f64::NAN, 12.0);
        assert_eq!(a.get(Attribute::JumpStrength), 0.0);
        assert_eq!(a.get(Attribute::MovementSpeed), 0.0);
        assert_eq!(a.get(Attribute::MaxHealth), 12.0);
    }

    #[test]
    fn rider_stack_follows_first_passenger() {
        let top = EntitySnapshot::new(3, "minecraft:player", EntityKind::Other, DVec3::new(0.0, 5.0, 0.0));
        let mid = EntitySnapshot::new(2, "minecraft:zombie", EntityKind::Other, DVec3::new(0.0, 3.0, 0.0))
            .with_passenger(top);
        let horse = EntitySnapshot::new(1, "minecraft:horse", EntityKind::HorseLike, DVec3::ZERO)
            .with_passenger(mid);
        assert_eq!(horse.topmost_rider().id, 3);
    }

    #[test]
    fn horse_color_names() {
        assert_eq!(HorseColor::DarkBrown.to_string(), "darkbrown");
        assert_eq!(HorseMarking::WhiteField.to_string(), "white_field");
        assert_eq!(HorseColor::from_repr(4), Some(HorseColor::Black));
        assert_eq!(HorseColor::from_repr(9), None);
    }
}
