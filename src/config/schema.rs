use serde::{Deserialize, Serialize};

use crate::media::{Breakpoints, Length, MediaExpressions, Unit, UnitIntervals};

pub const DEFAULT_STATIC_BREAKPOINT: &str = "desktop";
pub const DEFAULT_STATIC_EXPRESSIONS: [&str; 3] = ["screen", "portrait", "landscape"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Breakpoints,
    #[serde(default = "default_media_expressions")]
    pub media_expressions: MediaExpressions,
    #[serde(default = "default_unit_intervals")]
    pub unit_intervals: UnitIntervals,
    #[serde(default)]
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breakpoints: default_breakpoints(),
            media_expressions: default_media_expressions(),
            unit_intervals: default_unit_intervals(),
            settings: Settings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// whether the target evaluates media queries; false switches to the
    /// static fallback
    #[serde(default = "default_true")]
    pub media_support: bool,
    /// breakpoint standing in for the viewport in static mode
    #[serde(default = "default_static_breakpoint")]
    pub static_breakpoint: String,
    /// static expressions that count as matching in static mode
    #[serde(default = "default_static_expressions")]
    pub static_expressions: Vec<String>,
    /// abort on unresolvable conditions instead of warning and dropping them
    #[serde(default = "default_true")]
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            media_support: true,
            static_breakpoint: default_static_breakpoint(),
            static_expressions: default_static_expressions(),
            strict: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_static_breakpoint() -> String {
    DEFAULT_STATIC_BREAKPOINT.to_string()
}

fn default_static_expressions() -> Vec<String> {
    DEFAULT_STATIC_EXPRESSIONS
        .iter()
        .map(|name| name.to_string())
        .collect()
}

pub fn default_breakpoints() -> Breakpoints {
    [("phone", 320.0), ("tablet", 768.0), ("desktop", 1024.0)]
        .into_iter()
        .map(|(name, value)| (name.to_string(), Length::new(value, Unit::Px)))
        .collect()
}

pub fn default_media_expressions() -> MediaExpressions {
    [
        ("screen", "screen"),
        ("print", "print"),
        ("handheld", "handheld"),
        ("landscape", "(orientation: landscape)"),
        ("portrait", "(orientation: portrait)"),
        (
            "retina2x",
            "(-webkit-min-device-pixel-ratio: 2), (min-resolution: 192dpi), (min-resolution: 2dppx)",
        ),
        (
            "retina3x",
            "(-webkit-min-device-pixel-ratio: 3), (min-resolution: 350dpi), (min-resolution: 3dppx)",
        ),
    ]
    .into_iter()
    .map(|(name, literal)| (name.to_string(), literal.to_string()))
    .collect()
}

pub fn default_unit_intervals() -> UnitIntervals {
    [
        (Unit::Px, 1.0),
        (Unit::Em, 0.01),
        (Unit::Rem, 0.1),
        (Unit::Unitless, 0.0),
    ]
    .into_iter()
    .collect()
}
