//! Theme variant catalog
//!
//! The catalog is the ordered list of theme variants a runtime knows about.
//! The variable core only reads it: every variable must supply one literal
//! per catalogued variant at creation time. The options layer owns any
//! mutation beyond the built-in defaults.

use indexmap::IndexMap;

/// Built-in variant id for the light theme.
pub const LIGHT: &str = "light";
/// Built-in variant id for the dark theme.
pub const DARK: &str = "dark";

/// Display metadata attached to a theme variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantMeta {
    name: String,
    description: String,
    icon: Option<String>,
}

impl VariantMeta {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

/// Ordered catalog of theme variants.
///
/// Insertion order is the enumeration order surfaced to option pickers.
#[derive(Clone, Debug)]
pub struct VariantCatalog {
    entries: IndexMap<String, VariantMeta>,
}

impl VariantCatalog {
    /// Catalog with no variants. Useful for tests and non-standard hosts.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register a variant. Returns false (and keeps the existing entry)
    /// when the id is already catalogued.
    pub fn register(&mut self, id: impl Into<String>, meta: VariantMeta) -> bool {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, meta);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn meta(&self, id: &str) -> Option<&VariantMeta> {
        self.entries.get(id)
    }

    /// Variant ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for VariantCatalog {
    /// The built-in light/dark pair.
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.register(
            LIGHT,
            VariantMeta::new("Light", "Theme optimized for daylight").with_icon("light_mode"),
        );
        catalog.register(
            DARK,
            VariantMeta::new("Dark", "Theme optimized for night time").with_icon("dark_mode"),
        );
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_catalog_is_light_then_dark() {
        let catalog = VariantCatalog::default();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, vec![LIGHT, DARK]);
        assert_eq!(catalog.meta(LIGHT).unwrap().name(), "Light");
        assert_eq!(catalog.meta(DARK).unwrap().icon(), Some("dark_mode"));
    }

    #[test]
    fn register_keeps_first_entry_on_duplicate() {
        let mut catalog = VariantCatalog::default();
        assert!(!catalog.register(LIGHT, VariantMeta::new("Other", "")));
        assert_eq!(catalog.meta(LIGHT).unwrap().name(), "Light");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn registered_variants_keep_insertion_order() {
        let mut catalog = VariantCatalog::default();
        assert!(catalog.register("oled", VariantMeta::new("OLED", "True black")));
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, vec![LIGHT, DARK, "oled"]);
    }
}
