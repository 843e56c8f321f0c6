use super::builder::StatValueBuilder;
use super::format::significant_numbers;
use crate::text::{Rgb, Span, TextLine};
use std::fmt;

/// Custom mapping from normalized fraction to shown magnitude.
pub type CurveFn = fn(f64) -> f64;

/// How a normalized fraction becomes the number shown to the player.
#[derive(Clone, Copy)]
pub enum DisplayStrategy {
    Linear(f64),
    Curve(CurveFn),
}

impl DisplayStrategy {
    pub fn apply(&self, normalized: f64) -> f64 {
        match self {
            DisplayStrategy::Linear(k) => normalized * k,
            DisplayStrategy::Curve(f) => f(normalized),
        }
    }
}

impl fmt::Debug for DisplayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayStrategy::Linear(k) => f.debug_tuple("Linear").field(k).finish(),
            DisplayStrategy::Curve(_) => f.write_str("Curve(..)"),
        }
    }
}

/// Quality band a raw value falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Bad,
    Intermediate,
    Excellent,
}

/// Piecewise-linear quality scale for one attribute.
#[derive(Debug, Clone)]
pub struct StatValue {
    base: f64,
    max: f64,
    scale: f64,
    display: DisplayStrategy,
}

impl StatValue {
    pub fn builder() -> StatValueBuilder {
        StatValueBuilder::new()
    }

    /// Unchecked constructor. The builder is the validating path.
    pub(crate) fn from_parts(base: f64, adds: Vec<f64>, scale: f64, display: DisplayStrategy) -> Self {
        let max = base + adds.iter().sum::<f64>();
        Self {
            base,
            max,
            scale,
            display,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn display(&self) -> DisplayStrategy {
        self.display
    }

    pub fn bad_value(&self) -> f64 {
        self.base
    }

    pub fn excellent_value(&self) -> f64 {
        self.max
    }

    /// Raw value rescaled onto [0,1] between `base` and `base + Σadd`.
    pub fn normalized(&self, raw: f64) -> f64 {
        let range = self.max - self.base;
        if range <= 0.0 || raw.is_nan() || raw <= self.base {
            return 0.0;
        }
        if raw >= self.max {
            return 1.0;
        }
        ((raw - self.base) / range).clamp(0.0, 1.0)
    }

    pub fn band(&self, raw: f64) -> Band {
        match self.normalized(raw) {
            n if n <= 0.0 => Band::Bad,
            n if n >= 1.0 => Band::Excellent,
            _ => Band::Intermediate,
        }
    }

    pub fn display_value(&self, raw: f64) -> f64 {
        self.display.apply(self.normalized(raw))
    }

    pub fn color(&self, raw: f64) -> Rgb {
        match self.band(raw) {
            Band::Excellent => Rgb::GOLD,
            _ => Rgb::RED.lerp(Rgb::GREEN, self.normalized(raw)),
        }
    }

    pub fn formatted_text(&self, raw: f64) -> TextLine {
        self.formatted_text_with(raw, "", false)
    }

    /// `highlight` marks the value as best in its group (bold).
    pub fn formatted_text_with(&self, raw: f64, suffix: &str, highlight: bool) -> TextLine {
        let value = Span::new(significant_numbers(self.display_value(raw)), self.color(raw)).bold(highlight);
        let line = TextLine::new().push(value);
        if suffix.is_empty() {
            line
        } else {
            line.push(Span::new(suffix, Rgb::WHITE).bold(highlight))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health() -> StatValue {
        StatValue::from_parts(15.0, vec![8.0, 9.0], 1.0, DisplayStrategy::Linear(0.5))
    }

    #[test]
    fn normalized_bounds() {
        let s = health();
        assert_eq!(s.normalized(15.0), 0.0);
        assert_eq!(s.normalized(-3.0), 0.0);
        assert_eq!(s.normalized(32.0), 1.0);
        assert_eq!(s.normalized(40.0), 1.0);
        assert!((s.normalized(23.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_adds_is_degenerate() {
        let s = StatValue::from_parts(3.0, vec![], 1.0, DisplayStrategy::Linear(1.0));
        assert_eq!(s.normalized(2.0), 0.0);
        assert_eq!(s.normalized(3.0), 0.0);
        assert_eq!(s.normalized(100.0), 0.0);
        assert_eq!(s.excellent_value(), 3.0);
    }

    #[test]
    fn bands_and_colors() {
        let s = health();
        assert_eq!(s.band(10.0), Band::Bad);
        assert_eq!(s.band(20.0), Band::Intermediate);
        assert_eq!(s.band(32.0), Band::Excellent);
        assert_eq!(s.color(15.0), Rgb::RED);
        assert_eq!(s.color(32.0), Rgb::GOLD);
    }

    #[test]
    fn highlight_sets_bold() {
        let s = health();
        assert!(s.formatted_text_with(20.0, " HP", true).has_bold());
        assert!(!s.formatted_text_with(20.0, " HP", false).has_bold());
        assert_eq!(s.formatted_text(32.0).plain(), "0.500");
    }
}
