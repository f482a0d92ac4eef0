//! Option modes forwarded to engines
//!
//! These enumerations describe the non-theme presentation settings an
//! options layer can push at engines (scrollbar size, preferred input
//! device, animation budget). The variable core never interprets them; it
//! only carries them through the [`ThemeEngine`](crate::ThemeEngine)
//! capability set.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Scrollbar sizing modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollbarMode {
    Thin,
    Medium,
    Wide,
}

impl ScrollbarMode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::Medium => "medium",
            Self::Wide => "wide",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Thin => "Thin",
            Self::Medium => "Medium",
            Self::Wide => "Wide",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Thin => "Thin modern scrollbar",
            Self::Medium => "Normal scrollbar",
            Self::Wide => "Large touch friendly scrollbar",
        }
    }

    pub fn all() -> &'static [ScrollbarMode] {
        const MODES: [ScrollbarMode; 3] = [
            ScrollbarMode::Thin,
            ScrollbarMode::Medium,
            ScrollbarMode::Wide,
        ];
        &MODES
    }
}

impl Display for ScrollbarMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Preferred input device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputMode {
    Mouse,
    Pen,
    Touch,
}

impl InputMode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Mouse => "mouse",
            Self::Pen => "pen",
            Self::Touch => "touch",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Mouse => "Mouse",
            Self::Pen => "Pen",
            Self::Touch => "Touch",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Mouse => "Mouse input",
            Self::Pen => "Pen input",
            Self::Touch => "Touch input",
        }
    }

    pub fn all() -> &'static [InputMode] {
        const MODES: [InputMode; 3] = [InputMode::Mouse, InputMode::Pen, InputMode::Touch];
        &MODES
    }
}

impl Display for InputMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How much of the UI's animation budget to spend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationLevel {
    All,
    Most,
    Some,
    None,
}

impl AnimationLevel {
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Most => "most",
            Self::Some => "some",
            Self::None => "none",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Most => "Most",
            Self::Some => "Some",
            Self::None => "None",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::All => "All animations",
            Self::Most => "All but the heaviest animations",
            Self::Some => "Only the lightest animations",
            Self::None => "No animations",
        }
    }

    pub fn all() -> &'static [AnimationLevel] {
        const LEVELS: [AnimationLevel; 4] = [
            AnimationLevel::All,
            AnimationLevel::Most,
            AnimationLevel::Some,
            AnimationLevel::None,
        ];
        &LEVELS
    }
}

impl Display for AnimationLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
