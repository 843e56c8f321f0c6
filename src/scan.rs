use crate::entity::EntitySnapshot;
use crate::scoring::{EntityStats, StatKind};
use glam::DVec3;
use serde::Serialize;
use tracing::trace;

/// 64 blocks, squared.
pub const MAX_SQUARED_DISTANCE: f64 = 4096.0;

pub fn within_cutoff(squared_distance: f64) -> bool {
    squared_distance < MAX_SQUARED_DISTANCE
}

pub fn in_range(player: DVec3, position: DVec3) -> bool {
    within_cutoff(player.distance_squared(position))
}

/// Running maxima over one frame's group. Start at 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct GroupBest {
    pub jump: f64,
    pub health: f64,
    pub speed: f64,
    pub score: f64,
}

impl GroupBest {
    pub fn observe(&mut self, stats: &EntityStats) {
        if stats.jump > self.jump {
            self.jump = stats.jump;
        }
        if stats.health > self.health {
            self.health = stats.health;
        }
        if stats.speed > self.speed {
            self.speed = stats.speed;
        }
        if stats.score > self.score {
            self.score = stats.score;
        }
    }

    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Jump => self.jump,
            StatKind::Health => self.health,
            StatKind::Speed => self.speed,
        }
    }

    /// Ties count as best.
    pub fn flags(&self, stats: &EntityStats) -> BestFlags {
        BestFlags {
            jump: stats.jump >= self.jump,
            health: stats.health >= self.health,
            speed: stats.speed >= self.speed,
            score: stats.score >= self.score,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestFlags {
    pub jump: bool,
    pub health: bool,
    pub speed: bool,
    pub score: bool,
}

impl BestFlags {
    pub fn get(&self, kind: StatKind) -> bool {
        match kind {
            StatKind::Jump => self.jump,
            StatKind::Health => self.health,
            StatKind::Speed => self.speed,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GroupEntry<'a> {
    pub entity: &'a EntitySnapshot,
    pub squared_distance: f64,
    pub stats: EntityStats,
}

/// One frame's best-in-group pass. Stats are read once per entity and
/// cached for the rendering pass.
#[derive(Debug, Clone, Default)]
pub struct GroupScan<'a> {
    entries: Vec<GroupEntry<'a>>,
    best: GroupBest,
}

impl<'a> GroupScan<'a> {
    /// Horse-like entities within the cutoff of `player`.
    pub fn scan<I>(player: DVec3, entities: I) -> Self
    where
        I: IntoIterator<Item = &'a EntitySnapshot>,
    {
        Self::scan_filtered(player, entities, |e| e.kind.is_horse_like())
    }

    pub fn scan_filtered<I, F>(player: DVec3, entities: I, mut accept: F) -> Self
    where
        I: IntoIterator<Item = &'a EntitySnapshot>,
        F: FnMut(&EntitySnapshot) -> bool,
    {
        let mut scan = GroupScan::default();
        for entity in entities {
            if !accept(entity) {
                continue;
            }
            let squared_distance = player.distance_squared(entity.position);
            if !within_cutoff(squared_distance) {
                continue;
            }
            let stats = EntityStats::of(entity);
            trace!(target: "HorseDebug", "entity {} in group: {:?}", entity.id, stats);
            scan.best.observe(&stats);
            scan.entries.push(GroupEntry {
                entity,
                squared_distance,
                stats,
            });
        }
        scan
    }

    pub fn best(&self) -> GroupBest {
        self.best
    }

    pub fn entries(&self) -> &[GroupEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn flagged(&self) -> impl Iterator<Item = (&GroupEntry<'a>, BestFlags)> + '_ {
        let best = self.best;
        self.entries.iter().map(move |e| (e, best.flags(&e.stats)))
    }
}
