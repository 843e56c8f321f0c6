pub mod builder;
pub mod format;
pub mod value;

pub use self::builder::StatValueBuilder;
pub use self::format::significant_numbers;
pub use self::value::{Band, CurveFn, DisplayStrategy, StatValue};

use std::sync::LazyLock;

pub static STAT_HEALTH: LazyLock<StatValue> = LazyLock::new(|| {
    StatValue::from_parts(15.0, vec![8.0, 9.0], 1.0, DisplayStrategy::Linear(0.5))
});

pub static STAT_JUMP: LazyLock<StatValue> = LazyLock::new(|| {
    StatValue::from_parts(
        0.4000000059604645,
        vec![0.2, 0.2, 0.2],
        1.0,
        DisplayStrategy::Curve(jump_curve),
    )
});

pub static STAT_SPEED: LazyLock<StatValue> = LazyLock::new(|| {
    StatValue::from_parts(
        0.44999998807907104,
        vec![0.3, 0.3, 0.3],
        0.25,
        DisplayStrategy::Linear(43.0),
    )
});

/// Cubic fit from jump strength to jump height in blocks.
pub fn jump_curve(d: f64) -> f64 {
    -0.2 * d.powi(3) + 3.7 * d.powi(2) + 2.1 * d - 0.4
}

// Flat thresholds kept for callers that predate StatValue.

#[deprecated(note = "use STAT_HEALTH.bad_value()")]
pub fn bad_hp() -> f64 {
    STAT_HEALTH.bad_value()
}

#[deprecated(note = "use STAT_JUMP.bad_value()")]
pub fn bad_jump() -> f64 {
    STAT_JUMP.bad_value()
}

#[deprecated(note = "use STAT_SPEED.bad_value()")]
pub fn bad_speed() -> f64 {
    STAT_SPEED.bad_value()
}

#[deprecated(note = "use STAT_HEALTH.excellent_value()")]
pub fn excellent_hp() -> f64 {
    STAT_HEALTH.excellent_value()
}

#[deprecated(note = "use STAT_JUMP.excellent_value()")]
pub fn excellent_jump() -> f64 {
    STAT_JUMP.excellent_value()
}

#[deprecated(note = "use STAT_SPEED.excellent_value()")]
pub fn excellent_speed() -> f64 {
    STAT_SPEED.excellent_value()
}
