//! Global runtime singleton
//!
//! Apps that want ambient access to one process-wide [`ThemeRuntime`] can
//! initialize it here once at startup. Library code and tests should
//! prefer passing a runtime explicitly.

use std::sync::OnceLock;

use crate::runtime::ThemeRuntime;
use crate::variant::VariantCatalog;

static RUNTIME: OnceLock<ThemeRuntime> = OnceLock::new();

/// Initialize the global runtime with the built-in light/dark catalog.
///
/// Safe to call multiple times; the first call wins.
pub fn init_default() {
    let _ = RUNTIME.set(ThemeRuntime::new());
}

/// Initialize the global runtime with a caller-supplied variant catalog.
///
/// Safe to call multiple times; the first call wins.
pub fn init(variants: VariantCatalog) {
    let _ = RUNTIME.set(ThemeRuntime::with_catalog(variants));
}

/// Get the global runtime.
pub fn get() -> &'static ThemeRuntime {
    RUNTIME
        .get()
        .expect("theme runtime not initialized. Call state::init() at app startup.")
}

/// Get the global runtime if it has been initialized.
pub fn try_get() -> Option<&'static ThemeRuntime> {
    RUNTIME.get()
}
