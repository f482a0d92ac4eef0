//! Rendering back-end ("engine") capability set
//!
//! Engines consume variable and option changes to keep a live surface in
//! sync. They are discovered only through explicit registration on a
//! [`ThemeRuntime`](crate::ThemeRuntime), never structurally.

use crate::error::EngineError;
use crate::group::ThemeValues;
use crate::options::{AnimationLevel, InputMode, ScrollbarMode};

/// Opaque handle to a registered engine.
///
/// Handles stay valid across unrelated unregistrations; removal is by
/// handle identity, never by list index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EngineId(pub(crate) u64);

/// Capability set every rendering back-end implements.
///
/// The variable core itself only calls [`apply_single_property`]; the rest
/// of the surface belongs to the options layer. Option methods default to
/// no-ops so minimal engines stay small.
///
/// [`apply_single_property`]: ThemeEngine::apply_single_property
pub trait ThemeEngine: Send + Sync {
    /// Apply one newly created variable, with its full per-theme value map.
    fn apply_single_property(&self, key: &str, values: &ThemeValues) -> Result<(), EngineError>;

    /// Switch the active theme variant.
    fn apply_theme(&self, theme: &str) -> Result<(), EngineError>;

    /// Apply a UI scale factor (1.0 = 100%).
    fn apply_scale(&self, _factor: f64) {}

    fn apply_scrollbar(&self, _mode: ScrollbarMode) {}

    fn apply_input(&self, _mode: InputMode) {}

    fn apply_animation(&self, _level: AnimationLevel) {}
}
