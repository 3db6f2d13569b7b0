//! Record-replay round-trip integration test.
//!
//! Proves that the record/replay system works end-to-end:
//! 1. Run a gesture script against in-memory ports wrapped in recorders.
//! 2. Replay the per-port cassettes with `ServiceContext::replaying_from()`.
//! 3. Assert the replayed run reports the same steps and final state.

use std::path::{Path, PathBuf};

use rwweb::cassette::config::CassetteConfig;
use rwweb::config::Settings;
use rwweb::context::ServiceContext;
use rwweb::ports::{Document, Item, ItemId, Link};
use rwweb::script::{Script, ScriptRunner};

const SCRIPT: &str = r#"
name: round trip
steps:
  - init
  - tap: { item: "doc:welcomeMessage" }
  - navigate: { item: empty, input: "rwweb.org/history" }
  - type: { item: empty, value: "rw" }
  - drop: { x: 200, y: 700, html: "<p>dropped</p>" }
  - drag_out: { item: "text:<p>dropped</p>", direction: left }
"#;

type Snapshot = (Vec<Document>, Vec<Link>, Vec<Item>, Option<ItemId>);

fn snapshot(ctx: &ServiceContext) -> Snapshot {
    (ctx.graph.documents(), ctx.graph.links(), ctx.canvas.items(), ctx.canvas.focused_item())
}

fn record(
    root: &Path,
    settings: &Settings,
    script: &Script,
) -> (Vec<String>, Snapshot, PathBuf) {
    let inner = ServiceContext::deterministic(settings);
    let (ctx, session) = ServiceContext::recording_at(inner, root).unwrap();

    let lines = ScriptRunner::new(&ctx, &settings.navigator).run(script).unwrap();
    let state = snapshot(&ctx);

    drop(ctx);
    let dir = session.finish().expect("recording should succeed");
    (lines, state, dir)
}

#[test]
fn record_then_replay_produces_identical_outputs() {
    let root = std::env::temp_dir().join("rwweb_record_replay_test");
    let _ = std::fs::remove_dir_all(&root);
    let settings = Settings::default();
    let script = Script::from_yaml(SCRIPT).unwrap();

    // --- Phase 1: Record a real session ---
    let (recorded_lines, recorded_state, dir) = record(&root, &settings, &script);
    assert_eq!(recorded_lines.len(), 6);
    assert!(recorded_lines[2].starts_with("navigate"));

    // --- Phase 2: Replay from the per-port cassettes ---
    let config = CassetteConfig::from_session_dir(&dir);
    let replay = ServiceContext::replaying_from(&config).unwrap();
    let replayed_lines = ScriptRunner::new(&replay, &settings.navigator).run(&script).unwrap();

    assert_eq!(replayed_lines, recorded_lines);
    assert_eq!(snapshot(&replay), recorded_state);

    // --- Phase 3: Replay again for determinism ---
    let again = ServiceContext::replaying_from(&config).unwrap();
    let again_lines = ScriptRunner::new(&again, &settings.navigator).run(&script).unwrap();
    assert_eq!(again_lines, recorded_lines);

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn cassettes_hold_the_gesture_traffic() {
    let root = std::env::temp_dir().join("rwweb_record_traffic_test");
    let _ = std::fs::remove_dir_all(&root);
    let settings = Settings::default();
    let script = Script::from_yaml(SCRIPT).unwrap();

    let (_, _, dir) = record(&root, &settings, &script);

    let graph = CassetteConfig::read_cassette(&dir.join("graph.cassette.yaml")).unwrap();
    let canvas = CassetteConfig::read_cassette(&dir.join("canvas.cassette.yaml")).unwrap();
    let input = CassetteConfig::read_cassette(&dir.join("input.cassette.yaml")).unwrap();

    assert!(graph.interactions.iter().any(|i| i.method == "find_or_add_url"));
    assert!(graph.interactions.iter().any(|i| i.method == "delete_doc"));
    assert!(canvas.interactions.iter().any(|i| i.method == "center_doc_with_friends"));
    assert!(canvas.interactions.iter().any(|i| i.method == "hide_item"));
    let input_methods: Vec<&str> = input.interactions.iter().map(|i| i.method.as_str()).collect();
    assert_eq!(
        input_methods,
        vec!["set_input_value", "refresh_suggestions", "input_value", "stage_suggestions"]
    );

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
#[should_panic(expected = "Cassette exhausted")]
fn replaying_past_the_recording_panics() {
    let root = std::env::temp_dir().join("rwweb_record_exhausted_test");
    let _ = std::fs::remove_dir_all(&root);
    let settings = Settings::default();
    let script = Script::from_yaml("steps:\n  - init\n").unwrap();

    let (_, _, dir) = record(&root, &settings, &script);
    let replay = ServiceContext::replaying_from(&CassetteConfig::from_session_dir(&dir)).unwrap();
    let runner = ScriptRunner::new(&replay, &settings.navigator);
    runner.run(&script).unwrap();
    let _ = runner.run(&script);
}
