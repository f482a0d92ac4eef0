//! Theme runtime
//!
//! [`ThemeRuntime`] bundles the process-wide shared state of the variable
//! system: the namespace root map, the group arena, the ordered engine
//! list, and the variant catalog. It is an explicit state object so tests
//! can spin up isolated instances; apps that want ambient access wrap one
//! in [`crate::state`].
//!
//! All methods take `&self`; interior `RwLock`s provide the mutual
//! exclusion required when the runtime is shared across threads.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::engine::{EngineId, ThemeEngine};
use crate::error::{ApplyIssue, ApplyReport, ThemeError};
use crate::group::{GroupArena, GroupId, GroupNode, ThemeValues};
use crate::kind::VariableKind;
use crate::surface::StyleSurface;
use crate::variant::{VariantCatalog, VariantMeta};

/// Shared state of the theme-variable system.
pub struct ThemeRuntime {
    groups: RwLock<GroupArena>,
    roots: RwLock<IndexMap<String, GroupId>>,
    engines: RwLock<Vec<(EngineId, Arc<dyn ThemeEngine>)>>,
    next_engine: RwLock<u64>,
    variants: RwLock<VariantCatalog>,
}

impl ThemeRuntime {
    /// Runtime with the built-in light/dark variant catalog.
    pub fn new() -> Self {
        Self::with_catalog(VariantCatalog::default())
    }

    /// Runtime with a caller-supplied variant catalog.
    pub fn with_catalog(variants: VariantCatalog) -> Self {
        Self {
            groups: RwLock::new(GroupArena::new()),
            roots: RwLock::new(IndexMap::new()),
            engines: RwLock::new(Vec::new()),
            next_engine: RwLock::new(0),
            variants: RwLock::new(variants),
        }
    }

    // ========== Variant Catalog ==========

    /// Snapshot of the variant catalog.
    pub fn variants(&self) -> VariantCatalog {
        self.variants.read().unwrap().clone()
    }

    /// Register an additional theme variant (options layer hook).
    ///
    /// Variables created before this call do not cover the new variant;
    /// applying the new variant reports them as missing.
    pub fn register_variant(&self, id: impl Into<String>, meta: VariantMeta) -> bool {
        self.variants.write().unwrap().register(id, meta)
    }

    // ========== Namespace Roots ==========

    /// Initialize the variable root for a package namespace.
    ///
    /// Each namespace initializes its tree exactly once and keeps it for
    /// the life of the runtime.
    pub fn init_root(
        &self,
        namespace: &str,
        name: &str,
        description: &str,
    ) -> Result<GroupId, ThemeError> {
        let mut roots = self.roots.write().unwrap();
        if roots.contains_key(namespace) {
            return Err(ThemeError::DuplicateNamespace(namespace.to_string()));
        }

        let id = self
            .groups
            .write()
            .unwrap()
            .insert_root(namespace, name, description);
        roots.insert(namespace.to_string(), id);
        debug!("ThemeRuntime::init_root: {namespace}");
        Ok(id)
    }

    /// Look up a namespace root.
    pub fn root(&self, namespace: &str) -> Option<GroupId> {
        self.roots.read().unwrap().get(namespace).copied()
    }

    // ========== Tree Construction ==========

    /// Create a variable subgroup under `parent`.
    pub fn make_sub_group(
        &self,
        parent: GroupId,
        local_id: &str,
        name: &str,
        description: &str,
    ) -> Result<GroupId, ThemeError> {
        self.groups
            .write()
            .unwrap()
            .insert_child(parent, local_id, name, description)
    }

    /// Create a variable on `group` and fan it out to every registered
    /// engine, in registration order, exactly once.
    ///
    /// `values` must cover exactly the catalogued theme variants; partial
    /// coverage aborts the call without inserting anything. Returns the
    /// variable's fully-qualified key.
    pub fn make_variable(
        &self,
        group: GroupId,
        local_id: &str,
        name: &str,
        description: &str,
        values: ThemeValues,
        kind: VariableKind,
    ) -> Result<String, ThemeError> {
        self.check_coverage(group, local_id, &values)?;

        let key = self.groups.write().unwrap().insert_variable(
            group,
            local_id,
            name,
            description,
            kind,
            values.clone(),
        )?;

        self.broadcast_variable(&key, &values);
        Ok(key)
    }

    fn check_coverage(
        &self,
        group: GroupId,
        local_id: &str,
        values: &ThemeValues,
    ) -> Result<(), ThemeError> {
        let variants = self.variants.read().unwrap();
        let missing: Vec<String> = variants
            .ids()
            .filter(|id| !values.contains_key(*id))
            .map(str::to_string)
            .collect();
        let extra: Vec<String> = values
            .keys()
            .filter(|id| !variants.contains(id))
            .cloned()
            .collect();
        drop(variants);

        if missing.is_empty() && extra.is_empty() {
            return Ok(());
        }
        let key = self
            .groups
            .read()
            .unwrap()
            .get(group)
            .map(|node| node.qualified_key(local_id))?;
        Err(ThemeError::IncompleteThemeCoverage {
            key,
            missing,
            extra,
        })
    }

    /// Run `f` with the group node behind `id`.
    pub fn with_group<T>(
        &self,
        id: GroupId,
        f: impl FnOnce(&GroupNode) -> T,
    ) -> Result<T, ThemeError> {
        let groups = self.groups.read().unwrap();
        Ok(f(groups.get(id)?))
    }

    // ========== Engine Fan-out ==========

    /// Register a rendering back-end. Notification order is registration
    /// order. Already-created variables are not replayed; call
    /// [`replay_engine`](Self::replay_engine) for that.
    pub fn register_engine(&self, engine: Arc<dyn ThemeEngine>) -> EngineId {
        let mut next = self.next_engine.write().unwrap();
        let id = EngineId(*next);
        *next += 1;
        drop(next);

        self.engines.write().unwrap().push((id, engine));
        debug!("ThemeRuntime::register_engine: {id:?}");
        id
    }

    /// Register an engine and immediately replay every existing variable
    /// to it, closing the late-registration gap.
    pub fn register_engine_with_replay(&self, engine: Arc<dyn ThemeEngine>) -> EngineId {
        let id = self.register_engine(engine);
        self.replay_engine(id);
        id
    }

    /// Remove an engine by handle. Returns false if the handle is unknown.
    pub fn unregister_engine(&self, id: EngineId) -> bool {
        let mut engines = self.engines.write().unwrap();
        let before = engines.len();
        engines.retain(|(eid, _)| *eid != id);
        before != engines.len()
    }

    /// Catch-up pass: push every existing variable of every namespace to
    /// one engine, each exactly once, in deterministic traversal order
    /// (namespace registration order, then depth-first per tree).
    /// Returns false if the handle is unknown.
    pub fn replay_engine(&self, id: EngineId) -> bool {
        let engine = {
            let engines = self.engines.read().unwrap();
            engines
                .iter()
                .find(|(eid, _)| *eid == id)
                .map(|(_, e)| Arc::clone(e))
        };
        let Some(engine) = engine else {
            return false;
        };

        let snapshot = self.variable_snapshot();
        debug!(
            "ThemeRuntime::replay_engine: {id:?}, {} variables",
            snapshot.len()
        );
        for (key, values) in &snapshot {
            if let Err(err) = engine.apply_single_property(key, values) {
                warn!("engine {id:?} failed replay of `{key}`: {err}");
            }
        }
        true
    }

    /// Push one variable to every registered engine, tolerating and
    /// logging per-engine failures so one bad back-end cannot block the
    /// rest.
    fn broadcast_variable(&self, key: &str, values: &ThemeValues) {
        let engines: Vec<(EngineId, Arc<dyn ThemeEngine>)> =
            self.engines.read().unwrap().clone();
        for (id, engine) in engines {
            if let Err(err) = engine.apply_single_property(key, values) {
                warn!("engine {id:?} failed to apply `{key}`: {err}");
            }
        }
    }

    /// Notify every engine that the active theme variant changed.
    ///
    /// Engine failures are collected, never propagated mid-loop.
    pub fn notify_theme_changed(&self, theme: &str) -> Result<ApplyReport, ThemeError> {
        if !self.variants.read().unwrap().contains(theme) {
            return Err(ThemeError::UnknownTheme(theme.to_string()));
        }

        let engines: Vec<(EngineId, Arc<dyn ThemeEngine>)> =
            self.engines.read().unwrap().clone();
        let mut report = ApplyReport::default();
        for (id, engine) in engines {
            if let Err(err) = engine.apply_theme(theme) {
                warn!("engine {id:?} failed theme change to `{theme}`: {err}");
                report.push(ApplyIssue::Engine {
                    engine: id,
                    detail: err.detail().to_string(),
                });
            }
        }
        Ok(report)
    }

    /// Every variable of every namespace in deterministic traversal order.
    fn variable_snapshot(&self) -> Vec<(String, ThemeValues)> {
        let roots: Vec<GroupId> = self.roots.read().unwrap().values().copied().collect();
        let groups = self.groups.read().unwrap();
        let mut out = Vec::new();
        for root in roots {
            groups.for_each_variable(root, &mut |key, variable| {
                out.push((key.to_string(), variable.values().clone()));
            });
        }
        out
    }

    // ========== Theme Application Driver ==========

    /// Apply one theme variant onto a style surface, walking the whole
    /// tree of `namespace` depth-first.
    ///
    /// The pass is best-effort: individual gaps are collected into the
    /// returned report instead of aborting, so the surface stays as
    /// consistent as possible. Re-running with the same arguments is
    /// idempotent.
    pub fn apply_theme(
        &self,
        namespace: &str,
        surface: &mut dyn StyleSurface,
        theme: &str,
    ) -> Result<ApplyReport, ThemeError> {
        let root = self
            .root(namespace)
            .ok_or_else(|| ThemeError::UnknownNamespace(namespace.to_string()))?;
        if !self.variants.read().unwrap().contains(theme) {
            return Err(ThemeError::UnknownTheme(theme.to_string()));
        }

        let mut report = ApplyReport::default();
        self.groups
            .read()
            .unwrap()
            .apply_from(root, surface, theme, &mut report);
        if !report.is_clean() {
            warn!(
                "theme `{theme}` applied to `{namespace}` with {} issue(s)",
                report.len()
            );
        }
        Ok(report)
    }
}

impl Default for ThemeRuntime {
    fn default() -> Self {
        Self::new()
    }
}
