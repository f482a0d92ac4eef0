use std::sync::{Arc, Mutex};

use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use tinct_theme::{
    EngineError, ThemeEngine, ThemeError, ThemeRuntime, ThemeValues, VariableKind,
};

fn values(pairs: &[(&str, &str)]) -> ThemeValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn light_dark(light: &str, dark: &str) -> ThemeValues {
    values(&[("light", light), ("dark", dark)])
}

/// Records every single-property push it receives.
#[derive(Default)]
struct RecordingEngine {
    seen: Mutex<Vec<(String, ThemeValues)>>,
    themes: Mutex<Vec<String>>,
}

impl RecordingEngine {
    fn keys(&self) -> Vec<String> {
        self.seen.lock().unwrap().iter().map(|(k, _)| k.clone()).collect()
    }
}

impl ThemeEngine for RecordingEngine {
    fn apply_single_property(&self, key: &str, values: &ThemeValues) -> Result<(), EngineError> {
        self.seen
            .lock()
            .unwrap()
            .push((key.to_string(), values.clone()));
        Ok(())
    }

    fn apply_theme(&self, theme: &str) -> Result<(), EngineError> {
        self.themes.lock().unwrap().push(theme.to_string());
        Ok(())
    }
}

/// Rejects everything it is asked to apply.
struct FailingEngine;

impl ThemeEngine for FailingEngine {
    fn apply_single_property(&self, _key: &str, _values: &ThemeValues) -> Result<(), EngineError> {
        Err(EngineError::new("backend offline"))
    }

    fn apply_theme(&self, _theme: &str) -> Result<(), EngineError> {
        Err(EngineError::new("backend offline"))
    }
}

#[test]
fn fully_qualified_keys_follow_the_ancestor_path() {
    let runtime = ThemeRuntime::new();
    let root = runtime.init_root("ui", "UI", "").unwrap();
    let panel = runtime.make_sub_group(root, "panel", "Panel", "").unwrap();

    let key = runtime
        .make_variable(root, "accent", "Accent", "", light_dark("#222", "#eee"), VariableKind::Color)
        .unwrap();
    assert_eq!(key, "--ui/accent");

    let key = runtime
        .make_variable(panel, "bg", "Background", "", light_dark("#fff", "#111"), VariableKind::Color)
        .unwrap();
    assert_eq!(key, "--ui/panel/bg");
}

#[test]
fn duplicate_namespace_fails_and_keeps_first_root() {
    let runtime = ThemeRuntime::new();
    let first = runtime.init_root("ui", "UI", "").unwrap();

    let err = runtime.init_root("ui", "UI again", "").unwrap_err();
    assert!(matches!(err, ThemeError::DuplicateNamespace(ns) if ns == "ui"));

    // The first root is unaffected and still reachable.
    assert_eq!(runtime.root("ui"), Some(first));
    runtime
        .with_group(first, |node| assert_eq!(node.name(), "UI"))
        .unwrap();
}

#[test]
fn incomplete_theme_coverage_inserts_nothing() {
    let runtime = ThemeRuntime::new();
    let root = runtime.init_root("ui", "UI", "").unwrap();

    let err = runtime
        .make_variable(root, "accent", "Accent", "", values(&[("light", "#222")]), VariableKind::Color)
        .unwrap_err();
    match err {
        ThemeError::IncompleteThemeCoverage { key, missing, extra } => {
            assert_eq!(key, "--ui/accent");
            assert_eq!(missing, vec!["dark".to_string()]);
            assert!(extra.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // A value for a theme the catalog does not know is rejected too.
    let err = runtime
        .make_variable(
            root,
            "accent",
            "Accent",
            "",
            values(&[("light", "#222"), ("dark", "#eee"), ("sepia", "#332")]),
            VariableKind::Color,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ThemeError::IncompleteThemeCoverage { extra, .. } if extra == vec!["sepia".to_string()]
    ));

    runtime
        .with_group(root, |node| assert!(node.variables().is_empty()))
        .unwrap();
}

#[test]
fn fan_out_reaches_every_engine_in_registration_order() {
    let runtime = ThemeRuntime::new();
    let root = runtime.init_root("ui", "UI", "").unwrap();

    let first = Arc::new(RecordingEngine::default());
    let second = Arc::new(RecordingEngine::default());
    runtime.register_engine(first.clone());
    runtime.register_engine(second.clone());

    let vals = light_dark("#222", "#eee");
    runtime
        .make_variable(root, "accent", "Accent", "", vals.clone(), VariableKind::Color)
        .unwrap();

    for engine in [&first, &second] {
        let seen = engine.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "--ui/accent");
        assert_eq!(seen[0].1, vals);
    }
}

/// Appends its tag to a shared log on every push.
struct TaggedEngine {
    tag: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl ThemeEngine for TaggedEngine {
    fn apply_single_property(&self, _key: &str, _values: &ThemeValues) -> Result<(), EngineError> {
        self.log.lock().unwrap().push(self.tag);
        Ok(())
    }

    fn apply_theme(&self, _theme: &str) -> Result<(), EngineError> {
        Ok(())
    }
}

#[test]
fn fan_out_order_is_registration_order() {
    let runtime = ThemeRuntime::new();
    let root = runtime.init_root("ui", "UI", "").unwrap();

    let log = Arc::new(Mutex::new(Vec::new()));
    for tag in ["a", "b", "c"] {
        runtime.register_engine(Arc::new(TaggedEngine {
            tag,
            log: log.clone(),
        }));
    }

    runtime
        .make_variable(root, "accent", "Accent", "", light_dark("#222", "#eee"), VariableKind::Color)
        .unwrap();
    assert_eq!(log.lock().unwrap().as_slice(), ["a", "b", "c"]);
}

#[test]
fn failing_engine_does_not_block_later_engines() {
    let runtime = ThemeRuntime::new();
    let root = runtime.init_root("ui", "UI", "").unwrap();

    runtime.register_engine(Arc::new(FailingEngine));
    let recorder = Arc::new(RecordingEngine::default());
    runtime.register_engine(recorder.clone());

    runtime
        .make_variable(root, "accent", "Accent", "", light_dark("#222", "#eee"), VariableKind::Color)
        .unwrap();
    assert_eq!(recorder.keys(), vec!["--ui/accent".to_string()]);
}

#[test]
fn unregistered_engine_stops_receiving_variables() {
    let runtime = ThemeRuntime::new();
    let root = runtime.init_root("ui", "UI", "").unwrap();

    let recorder = Arc::new(RecordingEngine::default());
    let id = runtime.register_engine(recorder.clone());
    runtime
        .make_variable(root, "accent", "Accent", "", light_dark("#222", "#eee"), VariableKind::Color)
        .unwrap();

    assert!(runtime.unregister_engine(id));
    assert!(!runtime.unregister_engine(id));

    runtime
        .make_variable(root, "border", "Border", "", light_dark("#ccc", "#333"), VariableKind::Color)
        .unwrap();
    assert_eq!(recorder.keys(), vec!["--ui/accent".to_string()]);
}

#[test]
fn late_engine_needs_explicit_catch_up() {
    let runtime = ThemeRuntime::new();
    let root = runtime.init_root("ui", "UI", "").unwrap();
    let panel = runtime.make_sub_group(root, "panel", "Panel", "").unwrap();
    runtime
        .make_variable(root, "accent", "Accent", "", light_dark("#222", "#eee"), VariableKind::Color)
        .unwrap();
    runtime
        .make_variable(panel, "bg", "Background", "", light_dark("#fff", "#111"), VariableKind::Color)
        .unwrap();

    let late = Arc::new(RecordingEngine::default());
    let id = runtime.register_engine(late.clone());
    assert!(late.keys().is_empty());

    // Catch-up replays every existing variable exactly once, in traversal
    // order.
    assert!(runtime.replay_engine(id));
    assert_eq!(
        late.keys(),
        vec!["--ui/accent".to_string(), "--ui/panel/bg".to_string()]
    );

    // New variables arrive incrementally afterwards, with no duplicates.
    runtime
        .make_variable(root, "border", "Border", "", light_dark("#ccc", "#333"), VariableKind::Color)
        .unwrap();
    assert_eq!(late.seen.lock().unwrap().len(), 3);
}

#[test]
fn register_with_replay_is_the_one_call_variant() {
    let runtime = ThemeRuntime::new();
    let root = runtime.init_root("ui", "UI", "").unwrap();
    runtime
        .make_variable(root, "accent", "Accent", "", light_dark("#222", "#eee"), VariableKind::Color)
        .unwrap();

    let late = Arc::new(RecordingEngine::default());
    runtime.register_engine_with_replay(late.clone());
    assert_eq!(late.keys(), vec!["--ui/accent".to_string()]);
}

#[test]
fn apply_theme_writes_every_variable_and_is_idempotent() {
    let runtime = ThemeRuntime::new();
    let root = runtime.init_root("ui", "UI", "").unwrap();
    let panel = runtime.make_sub_group(root, "panel", "Panel", "").unwrap();
    runtime
        .make_variable(root, "accent", "Accent", "", light_dark("#222", "#eee"), VariableKind::Color)
        .unwrap();
    runtime
        .make_variable(panel, "bg", "Background", "", light_dark("#fff", "#111"), VariableKind::Color)
        .unwrap();

    let mut surface: IndexMap<String, String> = IndexMap::new();
    let report = runtime.apply_theme("ui", &mut surface, "light").unwrap();
    assert!(report.is_clean());
    assert_eq!(surface.get("--ui/accent").map(String::as_str), Some("#222"));
    assert_eq!(surface.get("--ui/panel/bg").map(String::as_str), Some("#fff"));

    let first_pass = surface.clone();
    runtime.apply_theme("ui", &mut surface, "light").unwrap();
    assert_eq!(surface, first_pass);

    // Switching the variant rewrites every key.
    runtime.apply_theme("ui", &mut surface, "dark").unwrap();
    assert_eq!(surface.get("--ui/accent").map(String::as_str), Some("#eee"));
    assert_eq!(surface.get("--ui/panel/bg").map(String::as_str), Some("#111"));
}

#[test]
fn apply_theme_rejects_unknown_namespace_and_theme() {
    let runtime = ThemeRuntime::new();
    runtime.init_root("ui", "UI", "").unwrap();

    let mut surface: IndexMap<String, String> = IndexMap::new();
    let err = runtime.apply_theme("nope", &mut surface, "light").unwrap_err();
    assert!(matches!(err, ThemeError::UnknownNamespace(ns) if ns == "nope"));

    let err = runtime.apply_theme("ui", &mut surface, "sepia").unwrap_err();
    assert!(matches!(err, ThemeError::UnknownTheme(t) if t == "sepia"));
    assert!(surface.is_empty());
}

#[test]
fn theme_change_notification_collects_engine_failures() {
    let runtime = ThemeRuntime::new();
    runtime.register_engine(Arc::new(FailingEngine));
    let recorder = Arc::new(RecordingEngine::default());
    runtime.register_engine(recorder.clone());

    let report = runtime.notify_theme_changed("dark").unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(recorder.themes.lock().unwrap().as_slice(), ["dark"]);

    let err = runtime.notify_theme_changed("sepia").unwrap_err();
    assert!(matches!(err, ThemeError::UnknownTheme(_)));
}

#[test]
fn variants_added_after_variables_leave_them_incomplete() {
    let runtime = ThemeRuntime::new();
    let root = runtime.init_root("ui", "UI", "").unwrap();
    runtime
        .make_variable(root, "accent", "Accent", "", light_dark("#222", "#eee"), VariableKind::Color)
        .unwrap();

    assert!(runtime.register_variant("oled", tinct_theme::VariantMeta::new("OLED", "True black")));

    // The old variable has no literal for the new variant; the pass
    // reports it but still completes.
    let mut surface: IndexMap<String, String> = IndexMap::new();
    let report = runtime.apply_theme("ui", &mut surface, "oled").unwrap();
    assert_eq!(report.len(), 1);
    assert!(surface.is_empty());

    // New variables must now cover all three variants.
    let err = runtime
        .make_variable(root, "border", "Border", "", light_dark("#ccc", "#333"), VariableKind::Color)
        .unwrap_err();
    assert!(matches!(
        err,
        ThemeError::IncompleteThemeCoverage { missing, .. } if missing == vec!["oled".to_string()]
    ));
}
