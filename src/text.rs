use serde::{Deserialize, Serialize};
use std::fmt;

pub const UTF8_STAR: &str = "\u{2B50}";
pub const UTF8_HEART: &str = "\u{2764}";

/// 24-bit text color (0xRRGGBB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFFFFFF);
    pub const GRAY: Rgb = Rgb(0xAAAAAA);
    pub const AQUA: Rgb = Rgb(0x55FFFF);
    pub const RED: Rgb = Rgb(0xFF5555);
    pub const GREEN: Rgb = Rgb(0x55FF55);
    pub const GOLD: Rgb = Rgb(0xFFAA00);
    pub const YELLOW: Rgb = Rgb(0xFFFF55);

    pub fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Channel-wise linear blend, `t` clamped to [0,1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::from_channels(
            mix(self.r(), other.r()),
            mix(self.g(), other.g()),
            mix(self.b(), other.b()),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub color: Rgb,
    #[serde(default)]
    pub bold: bool,
}

impl Span {
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

/// One rendered line of overlay text, made of colored spans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub spans: Vec<Span>,
}

impl TextLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colored(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            spans: vec![Span::new(text, color)],
        }
    }

    pub fn push(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    pub fn append(mut self, other: TextLine) -> Self {
        self.spans.extend(other.spans);
        self
    }

    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn has_bold(&self) -> bool {
        self.spans.iter().any(|s| s.bold)
    }
}

impl fmt::Display for TextLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(Rgb::RED.lerp(Rgb::GREEN, 0.0), Rgb::RED);
        assert_eq!(Rgb::RED.lerp(Rgb::GREEN, 1.0), Rgb::GREEN);
        assert_eq!(Rgb::RED.lerp(Rgb::GREEN, 7.0), Rgb::GREEN);
        assert_eq!(Rgb::RED.lerp(Rgb::GREEN, f64::NAN), Rgb::RED);
    }

    #[test]
    fn plain_joins_spans() {
        let line = TextLine::colored("1.02", Rgb::GREEN).push(Span::new(" b", Rgb::WHITE));
        assert_eq!(line.plain(), "1.02 b");
        assert!(!line.has_bold());
    }
}
