use super::value::{CurveFn, DisplayStrategy, StatValue};
use crate::error::{HdResult, HorseDebugError};

/// Fluent builder for [`StatValue`]. Exactly one of `show_scale` or
/// `show_func` must be supplied before `build`.
#[derive(Debug, Default, Clone)]
pub struct StatValueBuilder {
    base: f64,
    adds: Vec<f64>,
    scale: Option<f64>,
    show_scale: Option<f64>,
    show_func: Option<CurveFn>,
}

impl StatValueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    pub fn add(mut self, increment: f64) -> Self {
        self.adds.push(increment);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn show_scale(mut self, show_scale: f64) -> Self {
        self.show_scale = Some(show_scale);
        self
    }

    pub fn show_func(mut self, show_func: CurveFn) -> Self {
        self.show_func = Some(show_func);
        self
    }

    pub fn build(self) -> HdResult<StatValue> {
        let display = match (self.show_scale, self.show_func) {
            (Some(k), None) => {
                if !k.is_finite() {
                    return Err(HorseDebugError::Validation(format!(
                        "show_scale must be finite, got {}",
                        k
                    )));
                }
                DisplayStrategy::Linear(k)
            }
            (None, Some(f)) => DisplayStrategy::Curve(f),
            (Some(_), Some(_)) => {
                return Err(HorseDebugError::Validation(
                    "show_scale and show_func are mutually exclusive".to_string(),
                ))
            }
            (None, None) => {
                return Err(HorseDebugError::Validation(
                    "a display strategy (show_scale or show_func) is required".to_string(),
                ))
            }
        };

        if !self.base.is_finite() {
            return Err(HorseDebugError::Validation(format!(
                "base must be finite, got {}",
                self.base
            )));
        }
        if let Some(bad) = self.adds.iter().find(|a| !a.is_finite()) {
            return Err(HorseDebugError::Validation(format!(
                "add increments must be finite, got {}",
                bad
            )));
        }
        let total: f64 = self.adds.iter().sum();
        if total < 0.0 {
            return Err(HorseDebugError::Validation(format!(
                "sum of add increments must not be negative, got {}",
                total
            )));
        }
        let scale = self.scale.unwrap_or(1.0);
        if !scale.is_finite() {
            return Err(HorseDebugError::Validation(format!(
                "scale must be finite, got {}",
                scale
            )));
        }

        Ok(StatValue::from_parts(self.base, self.adds, scale, display))
    }
}
