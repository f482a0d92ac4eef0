use thiserror::Error;

use crate::engine::EngineId;

/// Errors raised while building or querying the variable tree.
///
/// Construction-time violations (duplicates, incomplete coverage) abort the
/// single offending call and leave the tree untouched.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("namespace `{0}` already has a variable root")]
    DuplicateNamespace(String),

    #[error("sub group `{0}` already registered")]
    DuplicateChildId(String),

    #[error("variable `{0}` already registered")]
    DuplicateVariableId(String),

    #[error("variable `{key}` must cover every theme variant (missing: {missing:?}, unknown: {extra:?})")]
    IncompleteThemeCoverage {
        key: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },

    #[error("unknown namespace `{0}`")]
    UnknownNamespace(String),

    #[error("stale or foreign group handle")]
    UnknownGroup,

    #[error("unknown theme variant `{0}`")]
    UnknownTheme(String),
}

/// Failure reported by a rendering back-end while applying a change.
#[derive(Debug, Clone, Error)]
#[error("engine apply failure: {0}")]
pub struct EngineError(String);

impl EngineError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }

    pub fn detail(&self) -> &str {
        &self.0
    }
}

/// One diagnostic collected during a best-effort pass.
///
/// A theming pass should stay visually consistent, so a single stale
/// variable or misbehaving engine never aborts the traversal; it is
/// recorded here instead.
#[derive(Debug, Clone)]
pub enum ApplyIssue {
    /// A variable had no literal for the requested theme variant.
    MissingThemeValue { key: String, theme: String },
    /// An engine rejected an applied change.
    Engine { engine: EngineId, detail: String },
}

/// Batch of diagnostics returned alongside a best-effort-applied surface.
#[derive(Debug, Clone, Default)]
pub struct ApplyReport {
    issues: Vec<ApplyIssue>,
}

impl ApplyReport {
    pub(crate) fn push(&mut self, issue: ApplyIssue) {
        self.issues.push(issue);
    }

    /// True when the pass completed without a single diagnostic.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ApplyIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
