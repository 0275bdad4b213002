use serde::{Deserialize, Serialize};

/// Window-space position of the companion, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

/// A periodic reminder: fixed text delivered after every full interval.
///
/// Constructed once at startup from config and owned by the scheduler for
/// the life of the process. `interval_ms` must be greater than zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub text: String,
    pub interval_ms: u64,
}

impl Reminder {
    pub fn new(text: impl Into<String>, interval_ms: u64) -> Self {
        Self {
            text: text.into(),
            interval_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b, a: 255 })
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }

    pub fn from_rgba_string(s: &str) -> Option<Self> {
        let s = s.trim();
        let inner = s.strip_prefix("rgba(")?.strip_suffix(')')?;
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 4 {
            return None;
        }
        let r = parts[0].trim().parse::<u8>().ok()?;
        let g = parts[1].trim().parse::<u8>().ok()?;
        let b = parts[2].trim().parse::<u8>().ok()?;
        let a = parts[3].trim().parse::<u8>().ok()?;
        Some(Self { r, g, b, a })
    }

    /// Parse either `#rrggbb[aa]` or `rgba(r,g,b,a)` notation.
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim_start().starts_with("rgba(") {
            Self::from_rgba_string(s)
        } else {
            Self::from_hex(s)
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Immutable styling for the speech panel, resolved from config once at
/// startup and handed to the display surface by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeechStyle {
    pub text: Color,
    pub panel: Color,
    pub border: Color,
    pub font_size: u32,
    pub border_radius: u32,
    pub padding: u32,
    pub border_width: u32,
}

impl Default for SpeechStyle {
    fn default() -> Self {
        Self {
            text: Color::from_rgba(255, 255, 255, 255),
            panel: Color::from_rgba(0, 0, 0, 180),
            border: Color::from_rgba(255, 255, 255, 255),
            font_size: 15,
            border_radius: 15,
            padding: 10,
            border_width: 2,
        }
    }
}
