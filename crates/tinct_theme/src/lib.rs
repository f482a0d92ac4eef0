//! Tinct Theme Variable Registry
//!
//! A hierarchical registry of typed design variables with per-theme values
//! and incremental fan-out to rendering back-ends.
//!
//! # Overview
//!
//! The registry provides:
//! - **Variable groups**: a tree of named groups, each owning variables and
//!   child groups, contributing path segments to fully-qualified keys
//! - **Theme variants**: an ordered catalog (light/dark by default); every
//!   variable carries one literal per catalogued variant
//! - **Engine fan-out**: newly created variables are pushed to every
//!   registered back-end so it can apply them without a full re-render
//! - **Theme application**: a depth-first pass writing every variable's
//!   value for one variant onto a style surface
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_theme::{ThemeRuntime, VariableKind, ThemeValues};
//!
//! let runtime = ThemeRuntime::new();
//! let root = runtime.init_root("ui", "UI", "Core UI variables").unwrap();
//!
//! let values: ThemeValues = [
//!     ("light".to_string(), "#222222".to_string()),
//!     ("dark".to_string(), "#eeeeee".to_string()),
//! ]
//! .into_iter()
//! .collect();
//! runtime
//!     .make_variable(root, "accent", "Accent", "Accent color", values, VariableKind::Color)
//!     .unwrap();
//!
//! let mut surface = std::collections::HashMap::<String, String>::new();
//! let report = runtime.apply_theme("ui", &mut surface, "dark").unwrap();
//! assert!(report.is_clean());
//! assert_eq!(surface["--ui/accent"], "#eeeeee");
//! ```
//!
//! # Error policy
//!
//! Construction errors (duplicate ids, incomplete theme coverage) fail the
//! offending call immediately and insert nothing. Application passes are
//! best-effort: per-node issues are collected into an
//! [`ApplyReport`] returned alongside the written surface.

pub mod engine;
pub mod error;
pub mod group;
pub mod kind;
pub mod options;
pub mod runtime;
pub mod state;
pub mod surface;
pub mod variant;

// Re-export commonly used types
pub use engine::{EngineId, ThemeEngine};
pub use error::{ApplyIssue, ApplyReport, EngineError, ThemeError};
pub use group::{GroupId, GroupNode, ThemeValues, Variable};
pub use kind::{Bounds, RatioBounds, VariableKind};
pub use options::{AnimationLevel, InputMode, ScrollbarMode};
pub use runtime::ThemeRuntime;
pub use surface::StyleSurface;
pub use variant::{VariantCatalog, VariantMeta, DARK, LIGHT};
