//! Variable kind schema
//!
//! Kinds describe what a variable's literal is (a color, a length, ...) and
//! optionally how an editor may bound it. Pure data; the registry never
//! validates literals against their kind.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Inclusive numeric bounds for an editable variable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Structured bounds for ratio variables (independent width/height ranges).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatioBounds {
    pub width: Bounds,
    pub height: Bounds,
}

/// The fixed set of variable kinds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum VariableKind {
    /// Free-form text literal.
    String,
    /// Color literal.
    Color,
    /// Duration literal, bounds in milliseconds.
    Time(Option<Bounds>),
    /// Angle literal.
    Angle(Option<Bounds>),
    /// Length literal.
    Length(Option<Bounds>),
    /// Plain number literal.
    Number(Option<Bounds>),
    /// Aspect ratio literal.
    Ratio(Option<RatioBounds>),
}

impl VariableKind {
    /// Stable kind id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Color => "color",
            Self::Time(_) => "time",
            Self::Angle(_) => "angle",
            Self::Length(_) => "length",
            Self::Number(_) => "number",
            Self::Ratio(_) => "ratio",
        }
    }
}

impl Display for VariableKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
