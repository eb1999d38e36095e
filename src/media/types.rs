//! core types for media expressions

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// dimension used when a condition names none (`>phone` == `width>phone`)
pub const DEFAULT_DIMENSION: &str = "width";

/// digits kept after the decimal point when printing lengths
const PRECISION: f64 = 1e10;

/// units a numeric literal may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// no suffix at all (`0`, `2`)
    Unitless,
    Px,
    Cm,
    Mm,
    Percent,
    Ch,
    Pc,
    In,
    Em,
    Rem,
    Pt,
    Ex,
    Vw,
    Vh,
    Vmin,
    Vmax,
}

impl Unit {
    /// every recognized unit, unitless first
    pub const ALL: [Unit; 16] = [
        Unit::Unitless,
        Unit::Px,
        Unit::Cm,
        Unit::Mm,
        Unit::Percent,
        Unit::Ch,
        Unit::Pc,
        Unit::In,
        Unit::Em,
        Unit::Rem,
        Unit::Pt,
        Unit::Ex,
        Unit::Vw,
        Unit::Vh,
        Unit::Vmin,
        Unit::Vmax,
    ];

    /// parse a unit from its CSS suffix (empty string = unitless)
    pub fn parse(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == suffix)
    }

    /// the CSS suffix for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Unitless => "",
            Unit::Px => "px",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::Percent => "%",
            Unit::Ch => "ch",
            Unit::Pc => "pc",
            Unit::In => "in",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Pt => "pt",
            Unit::Ex => "ex",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
        }
    }

    /// canonical "one unit" value that parsed magnitudes are multiplied by
    pub fn one(self) -> Length {
        Length::new(1.0, self)
    }

    /// size of one unit in px, for absolute units only
    pub fn px_factor(self) -> Option<f64> {
        match self {
            Unit::Px => Some(1.0),
            Unit::In => Some(96.0),
            Unit::Cm => Some(96.0 / 2.54),
            Unit::Mm => Some(96.0 / 25.4),
            Unit::Pt => Some(96.0 / 72.0),
            Unit::Pc => Some(16.0),
            _ => None,
        }
    }

    /// human-readable name for messages (the unitless suffix is empty)
    pub fn describe(&self) -> &'static str {
        match self {
            Unit::Unitless => "(unitless)",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let suffix = String::deserialize(deserializer)?;
        Unit::parse(&suffix)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid unit `{}`", suffix)))
    }
}

/// a number tagged with a unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn unitless(value: f64) -> Self {
        Self::new(value, Unit::Unitless)
    }

    /// multiply the magnitude, keeping the unit
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.value * factor, self.unit)
    }

    /// add `delta` (expressed in this length's unit)
    pub fn offset(self, delta: f64) -> Self {
        Self::new(self.value + delta, self.unit)
    }

    pub fn negated(self) -> Self {
        Self::new(-self.value, self.unit)
    }

    /// compare two lengths if their units allow it
    ///
    /// same units and unitless operands compare by value; absolute units
    /// compare after conversion to px. anything else (em vs px, vw vs %)
    /// has no static answer and yields `None`.
    pub fn compare(&self, other: &Length) -> Option<Ordering> {
        let (lhs, rhs) = if self.unit == other.unit
            || self.unit == Unit::Unitless
            || other.unit == Unit::Unitless
        {
            (self.value, other.value)
        } else {
            (
                self.value * self.unit.px_factor()?,
                other.value * other.unit.px_factor()?,
            )
        };
        lhs.partial_cmp(&rhs)
    }
}

/// format a number the way it should appear in a query (`361`, `40.01`)
pub fn format_number(value: f64) -> String {
    let rounded = (value * PRECISION).round() / PRECISION;
    if rounded == 0.0 {
        // also folds -0 into 0
        return "0".to_string();
    }
    format!("{}", rounded)
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit)
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        super::literal::parse_value(&raw).map_err(serde::de::Error::custom)
    }
}

/// comparison operators, in detection priority order
///
/// multi-character operators come before their one-character prefixes so
/// that `>=` is never read as `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `>=`
    Gte,
    /// `>`
    Gt,
    /// `<=`
    Lte,
    /// `<`
    Lt,
    /// `≥`
    GteSymbol,
    /// `≤`
    LteSymbol,
}

impl Operator {
    pub const CANDIDATES: [Operator; 6] = [
        Operator::Gte,
        Operator::Gt,
        Operator::Lte,
        Operator::Lt,
        Operator::GteSymbol,
        Operator::LteSymbol,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Gte => ">=",
            Operator::Gt => ">",
            Operator::Lte => "<=",
            Operator::Lt => "<",
            Operator::GteSymbol => "≥",
            Operator::LteSymbol => "≤",
        }
    }

    /// media features only speak min-/max-, so upper bounds map to max
    pub fn prefix(&self) -> Prefix {
        match self {
            Operator::Lt | Operator::Lte | Operator::LteSymbol => Prefix::Max,
            Operator::Gt | Operator::Gte | Operator::GteSymbol => Prefix::Min,
        }
    }

    /// direction in which the unit interval moves an exclusive bound
    ///
    /// `Some(1.0)` for `>`, `Some(-1.0)` for `<`, `None` for inclusive operators
    pub fn exclusive_direction(&self) -> Option<f64> {
        match self {
            Operator::Gt => Some(1.0),
            Operator::Lt => Some(-1.0),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// media feature prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefix {
    Min,
    Max,
}

impl Prefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Min => "min",
            Prefix::Max => "max",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// a dynamic condition after resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpression {
    pub dimension: String,
    pub prefix: Prefix,
    pub value: Length,
}

impl ParsedExpression {
    pub fn new(dimension: impl Into<String>, prefix: Prefix, value: Length) -> Self {
        Self {
            dimension: dimension.into(),
            prefix,
            value,
        }
    }
}

impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{}: {})", self.prefix, self.dimension, self.value)
    }
}
