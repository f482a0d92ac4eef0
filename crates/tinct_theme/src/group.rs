//! Variable group tree
//!
//! Groups form an arena-owned tree. Each group contributes one path segment
//! to the fully-qualified keys of the variables it owns, and keeps its
//! children and variables in insertion order so traversal stays
//! deterministic. Nodes are only reachable through opaque [`GroupId`]
//! handles; there is no way to construct a node outside the arena or to
//! attach a group to a second parent.

use indexmap::IndexMap;
use slotmap::{new_key_type, SlotMap};

use crate::error::{ApplyIssue, ApplyReport, ThemeError};
use crate::kind::VariableKind;
use crate::surface::StyleSurface;

new_key_type! {
    /// Opaque handle to a group in a runtime's tree arena.
    pub struct GroupId;
}

/// Per-theme literal values, keyed by variant id. Insertion order follows
/// the caller's declaration order.
pub type ThemeValues = IndexMap<String, String>;

/// One registered design variable.
#[derive(Clone, Debug)]
pub struct Variable {
    name: String,
    description: String,
    kind: VariableKind,
    values: ThemeValues,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    /// Literal value for one theme variant.
    pub fn value(&self, theme: &str) -> Option<&str> {
        self.values.get(theme).map(|s| s.as_str())
    }

    /// The full per-theme value map.
    pub fn values(&self) -> &ThemeValues {
        &self.values
    }
}

/// A named node in the variable tree.
#[derive(Debug)]
pub struct GroupNode {
    path: Vec<String>,
    name: String,
    description: String,
    variables: IndexMap<String, Variable>,
    children: IndexMap<String, GroupId>,
}

impl GroupNode {
    fn new(path: Vec<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path,
            name: name.into(),
            description: description.into(),
            variables: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Path segments from the namespace root down to this group.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Derive the fully-qualified key for a local variable id:
    /// `--<joined-path>/<local_id>`.
    pub fn qualified_key(&self, local_id: &str) -> String {
        format!("--{}/{}", self.path.join("/"), local_id)
    }

    /// Variables owned directly by this group, keyed by fully-qualified
    /// key, in creation order.
    pub fn variables(&self) -> &IndexMap<String, Variable> {
        &self.variables
    }

    /// Child group ids by local id, in creation order.
    pub fn children(&self) -> &IndexMap<String, GroupId> {
        &self.children
    }
}

/// Arena owning every group of every namespace in a runtime.
///
/// Groups are never removed; a namespace tree lives for the life of the
/// arena.
#[derive(Debug, Default)]
pub(crate) struct GroupArena {
    nodes: SlotMap<GroupId, GroupNode>,
}

impl GroupArena {
    pub(crate) fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Create a namespace root. The namespace is the first path segment.
    pub(crate) fn insert_root(
        &mut self,
        namespace: &str,
        name: &str,
        description: &str,
    ) -> GroupId {
        self.nodes
            .insert(GroupNode::new(vec![namespace.to_string()], name, description))
    }

    pub(crate) fn get(&self, id: GroupId) -> Result<&GroupNode, ThemeError> {
        self.nodes.get(id).ok_or(ThemeError::UnknownGroup)
    }

    /// Create a child group under `parent`.
    pub(crate) fn insert_child(
        &mut self,
        parent: GroupId,
        local_id: &str,
        name: &str,
        description: &str,
    ) -> Result<GroupId, ThemeError> {
        let parent_node = self.nodes.get(parent).ok_or(ThemeError::UnknownGroup)?;
        if parent_node.children.contains_key(local_id) {
            return Err(ThemeError::DuplicateChildId(local_id.to_string()));
        }

        let mut path = parent_node.path.clone();
        path.push(local_id.to_string());
        let child = self.nodes.insert(GroupNode::new(path, name, description));

        // Re-borrow: the arena insert above invalidated the shared borrow.
        self.nodes[parent]
            .children
            .insert(local_id.to_string(), child);
        Ok(child)
    }

    /// Store a variable on `group`, returning its fully-qualified key.
    ///
    /// Theme coverage is the runtime's concern; the arena only enforces key
    /// uniqueness within the group.
    pub(crate) fn insert_variable(
        &mut self,
        group: GroupId,
        local_id: &str,
        name: &str,
        description: &str,
        kind: VariableKind,
        values: ThemeValues,
    ) -> Result<String, ThemeError> {
        let node = self.nodes.get_mut(group).ok_or(ThemeError::UnknownGroup)?;
        let key = node.qualified_key(local_id);
        if node.variables.contains_key(&key) {
            return Err(ThemeError::DuplicateVariableId(local_id.to_string()));
        }

        node.variables.insert(
            key.clone(),
            Variable {
                name: name.to_string(),
                description: description.to_string(),
                kind,
                values,
            },
        );
        Ok(key)
    }

    /// Depth-first theme application: write this group's own variables,
    /// then descend into children in creation order. Gaps are collected,
    /// never fatal.
    pub(crate) fn apply_from(
        &self,
        id: GroupId,
        surface: &mut dyn StyleSurface,
        theme: &str,
        report: &mut ApplyReport,
    ) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };

        for (key, variable) in &node.variables {
            match variable.value(theme) {
                Some(value) => surface.set_property(key, value),
                None => report.push(ApplyIssue::MissingThemeValue {
                    key: key.clone(),
                    theme: theme.to_string(),
                }),
            }
        }
        for child in node.children.values() {
            self.apply_from(*child, surface, theme, report);
        }
    }

    /// Visit every variable reachable from `id` in traversal order (own
    /// variables first, then children).
    pub(crate) fn for_each_variable(
        &self,
        id: GroupId,
        f: &mut dyn FnMut(&str, &Variable),
    ) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };

        for (key, variable) in &node.variables {
            f(key, variable);
        }
        for child in node.children.values() {
            self.for_each_variable(*child, f);
        }
    }
}
