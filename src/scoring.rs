use crate::entity::{Attribute, EntitySnapshot};
use crate::stats::{StatValue, STAT_HEALTH, STAT_JUMP, STAT_SPEED};
use serde::Serialize;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    Jump,
    Health,
    Speed,
}

impl StatKind {
    pub fn stat(self) -> &'static StatValue {
        match self {
            StatKind::Jump => &STAT_JUMP,
            StatKind::Health => &STAT_HEALTH,
            StatKind::Speed => &STAT_SPEED,
        }
    }

    pub fn attribute(self) -> Attribute {
        match self {
            StatKind::Jump => Attribute::JumpStrength,
            StatKind::Health => Attribute::MaxHealth,
            StatKind::Speed => Attribute::MovementSpeed,
        }
    }
}

/// Sum of the three normalized values of jump/health/speed, in [0,3].
pub fn score(jump: f64, health: f64, speed: f64) -> f64 {
    STAT_JUMP.normalized(jump) + STAT_HEALTH.normalized(health) + STAT_SPEED.normalized(speed)
}

/// Raw attributes of one entity plus its composite score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct EntityStats {
    pub jump: f64,
    pub health: f64,
    pub speed: f64,
    pub score: f64,
}

impl EntityStats {
    pub fn new(jump: f64, health: f64, speed: f64) -> Self {
        Self {
            jump,
            health,
            speed,
            score: score(jump, health, speed),
        }
    }

    pub fn of(entity: &EntitySnapshot) -> Self {
        Self::new(
            entity.attribute(Attribute::JumpStrength),
            entity.attribute(Attribute::MaxHealth),
            entity.attribute(Attribute::MovementSpeed),
        )
    }

    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Jump => self.jump,
            StatKind::Health => self.health,
            StatKind::Speed => self.speed,
        }
    }
}
