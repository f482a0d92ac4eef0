//! Style surface abstraction
//!
//! A style surface is any string-keyed, string-valued property target a
//! theme pass writes into (a stylesheet, a property bag, a test map).

use indexmap::IndexMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Mutable key/value target for custom properties.
pub trait StyleSurface {
    fn set_property(&mut self, key: &str, value: &str);
}

impl<S: BuildHasher> StyleSurface for HashMap<String, String, S> {
    fn set_property(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

impl<S: BuildHasher> StyleSurface for IndexMap<String, String, S> {
    fn set_property(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}
