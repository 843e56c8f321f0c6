use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    scene_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let scene_path = dir.path().join("scene.json");
        let scene = r#"{
            "player": [0.0, 64.0, 0.0],
            "crosshair": 1,
            "entities": [
                {
                    "id": 1, "type_id": "minecraft:horse", "display_name": "Spirit",
                    "has_custom_name": true, "kind": "horse", "color": 2, "marking": 0,
                    "position": [4.0, 64.0, 0.0], "height": 1.6, "width": 1.4,
                    "attributes": { "jump_strength": 0.9, "movement_speed": 1.1, "max_health": 28.0 }
                },
                {
                    "id": 2, "type_id": "minecraft:donkey", "display_name": "Donkey",
                    "kind": "horse_like", "position": [10.0, 64.0, 3.0], "height": 1.5,
                    "attributes": { "jump_strength": 0.5, "movement_speed": 0.6, "max_health": 16.0 }
                },
                {
                    "id": 3, "type_id": "minecraft:horse", "display_name": "Far",
                    "kind": "horse_like", "position": [100.0, 64.0, 0.0], "height": 1.6
                },
                {
                    "id": 4, "type_id": "minecraft:sheep", "display_name": "Sheep",
                    "kind": "sheep", "color": "lime", "position": [2.0, 64.0, 2.0], "height": 1.3
                }
            ]
        }"#;
        fs::write(&scene_path, scene).unwrap();
        Self { dir, scene_path }
    }
}

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_horsedebug"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute binary");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
    )
}

#[test]
fn test_cli_scan_lists_in_range_horses() {
    let ctx = TestContext::new();
    let (ok, stdout) = run(&["scan", "--scene", ctx.scene_path.to_str().unwrap(), "--labels"]);
    assert!(ok, "scan failed:\n{}", stdout);
    assert!(stdout.contains("Spirit"));
    assert!(stdout.contains("Donkey"));
    assert!(!stdout.contains("Far"), "out-of-range horse listed:\n{}", stdout);
    assert!(!stdout.contains("minecraft:sheep"));
    assert!(stdout.contains("LABELS"));
    // Spirit is the in-range best on every stat.
    assert!(stdout.contains("Best: jump 0.900 | health 28.00 | speed 1.100 | score"), "{}", stdout);
}

#[test]
fn test_cli_inspect_crosshair_target() {
    let ctx = TestContext::new();
    let (ok, stdout) = run(&["inspect", "--scene", ctx.scene_path.to_str().unwrap()]);
    assert!(ok);
    assert!(stdout.contains("Variant: Chestnut / None (512)"), "{}", stdout);
    assert!(stdout.contains("[preview] entity #1"));

    let (ok, stdout) = run(&["inspect", "--scene", ctx.scene_path.to_str().unwrap(), "--entity", "4"]);
    assert!(ok);
    assert!(stdout.contains("Variant: lime (5)"), "{}", stdout);
}

#[test]
fn test_cli_inspect_unknown_entity_fails() {
    let ctx = TestContext::new();
    let (ok, _) = run(&["inspect", "--scene", ctx.scene_path.to_str().unwrap(), "--entity", "99"]);
    assert!(!ok);
}

#[test]
fn test_cli_toggle_persists() {
    let ctx = TestContext::new();
    let run_dir = ctx.dir.path().to_str().unwrap();
    let (ok, stdout) = run(&["toggle", "--run-dir", run_dir]);
    assert!(ok);
    assert!(stdout.contains("show3DOverlay=true"));
    let (_, stdout) = run(&["toggle", "--run-dir", run_dir]);
    assert!(stdout.contains("show3DOverlay=false"));
}

#[test]
fn test_cli_stats_table() {
    let (ok, stdout) = run(&["stats"]);
    assert!(ok);
    for (name, attribute) in [("jump", "jump_strength"), ("health", "max_health"), ("speed", "movement_speed")] {
        assert!(stdout.contains(name), "missing {} row", name);
        assert!(stdout.contains(attribute), "missing {} attribute", attribute);
    }
}
