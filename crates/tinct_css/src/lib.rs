//! Tinct CSS Engine
//!
//! An in-memory CSS custom-property sheet implementing the
//! [`ThemeEngine`] capability set. Variables pushed incrementally by the
//! registry are stored with their full per-theme value maps; switching the
//! active variant re-resolves the whole sheet. [`CssVariableSheet::render`]
//! produces a deterministic `:root { ... }` block for embedding or
//! snapshotting.

use std::sync::RwLock;

use indexmap::IndexMap;
use tracing::debug;

use tinct_theme::{
    AnimationLevel, EngineError, InputMode, ScrollbarMode, ThemeEngine, ThemeValues, LIGHT,
};

/// In-memory custom-property sheet.
///
/// Keeps every variable's per-theme values plus the active variant, so a
/// variant switch needs no replay from the registry.
pub struct CssVariableSheet {
    properties: RwLock<IndexMap<String, ThemeValues>>,
    active: RwLock<String>,
}

impl CssVariableSheet {
    /// Sheet starting on the built-in light variant.
    pub fn new() -> Self {
        Self::with_active(LIGHT)
    }

    /// Sheet starting on a caller-chosen variant.
    pub fn with_active(theme: impl Into<String>) -> Self {
        Self {
            properties: RwLock::new(IndexMap::new()),
            active: RwLock::new(theme.into()),
        }
    }

    /// The currently active variant id.
    pub fn active(&self) -> String {
        self.active.read().unwrap().clone()
    }

    /// Number of stored custom properties.
    pub fn len(&self) -> usize {
        self.properties.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.read().unwrap().is_empty()
    }

    /// Key/value snapshot resolved for the active variant, in property
    /// insertion order. Properties without a literal for the active
    /// variant are skipped.
    pub fn resolved(&self) -> IndexMap<String, String> {
        let active = self.active();
        let properties = self.properties.read().unwrap();
        let mut out = IndexMap::with_capacity(properties.len());
        for (key, values) in properties.iter() {
            match values.get(&active) {
                Some(value) => {
                    out.insert(key.clone(), value.clone());
                }
                None => debug!("`{key}` has no literal for `{active}`, skipping"),
            }
        }
        out
    }

    /// Render the resolved sheet as a `:root` rule.
    pub fn render(&self) -> String {
        let resolved = self.resolved();
        let mut out = String::from(":root {\n");
        for (key, value) in &resolved {
            out.push_str("  ");
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out.push('}');
        out
    }
}

impl Default for CssVariableSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeEngine for CssVariableSheet {
    fn apply_single_property(&self, key: &str, values: &ThemeValues) -> Result<(), EngineError> {
        self.properties
            .write()
            .unwrap()
            .insert(key.to_string(), values.clone());
        Ok(())
    }

    fn apply_theme(&self, theme: &str) -> Result<(), EngineError> {
        debug!("CssVariableSheet::apply_theme: {theme}");
        *self.active.write().unwrap() = theme.to_string();
        Ok(())
    }

    fn apply_scale(&self, factor: f64) {
        debug!("CssVariableSheet::apply_scale: {factor}");
    }

    fn apply_scrollbar(&self, mode: ScrollbarMode) {
        debug!("CssVariableSheet::apply_scrollbar: {mode}");
    }

    fn apply_input(&self, mode: InputMode) {
        debug!("CssVariableSheet::apply_input: {mode}");
    }

    fn apply_animation(&self, level: AnimationLevel) {
        debug!("CssVariableSheet::apply_animation: {level}");
    }
}
