use horsedebug::config::{ConfigState, ConfigStore, OverlayConfig, CONFIG_FILE_NAME};
use std::fs;
use std::io::Cursor;

#[test]
fn test_round_trip_true() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ConfigStore::in_run_dir(dir.path());
    assert_eq!(store.state(), ConfigState::Unloaded);
    store.load();
    assert_eq!(store.state(), ConfigState::Loaded);
    assert!(!store.show_3d_overlay());

    store.set_show_3d_overlay(true);

    let mut reloaded = ConfigStore::in_run_dir(dir.path());
    assert!(reloaded.load().show_3d_overlay);
}

#[test]
fn test_missing_file_defaults_and_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    assert!(!path.exists());

    let mut store = ConfigStore::in_run_dir(dir.path());
    let config = store.load();
    assert_eq!(config, OverlayConfig::default());
    assert!(path.exists(), "load should write the resolved config back");
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("show3DOverlay=false"));
}

#[test]
fn test_corrupt_file_keeps_in_memory_value() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ConfigStore::in_run_dir(dir.path());
    store.load();
    store.set_show_3d_overlay(true);

    fs::write(store.path(), [0xFFu8, 0xFE, 0x00, b'\n', 0xC3]).unwrap();
    let config = store.load();
    assert!(config.show_3d_overlay, "corruption must not reset the value");

    // The rewrite on load repairs the file.
    let mut fresh = ConfigStore::in_run_dir(dir.path());
    assert!(fresh.load().show_3d_overlay);
}

#[test]
fn test_removed_file_keeps_in_memory_value() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ConfigStore::in_run_dir(dir.path());
    store.load();
    store.set_show_3d_overlay(true);
    fs::remove_file(store.path()).unwrap();

    assert!(store.load().show_3d_overlay);
}

#[test]
fn test_garbage_line_is_ignored_as_a_whole() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "this is not a config file\n").unwrap();

    let mut store = ConfigStore::new(&path);
    assert!(!store.load().show_3d_overlay);
}

#[test]
fn test_toggle_writes_through() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ConfigStore::in_run_dir(dir.path());
    store.load();

    assert!(store.toggle_show_3d_overlay());
    let content = fs::read_to_string(store.path()).unwrap();
    assert!(content.contains("show3DOverlay=true"));

    assert!(!store.toggle_show_3d_overlay());
    let content = fs::read_to_string(store.path()).unwrap();
    assert!(content.contains("show3DOverlay=false"));
}

#[test]
fn test_unwritable_path_is_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ConfigStore::new(dir.path().join("missing").join("horsedebug.cfg"));
    store.load();
    store.set_show_3d_overlay(true);
    assert!(store.show_3d_overlay());
}

#[test]
fn test_parse_comments_and_whitespace() {
    let doc = "#HorseDebug configuration\n#Tue Oct 14 12:00:00 UTC 2026\n  show3DOverlay =  true  \n";
    let config = OverlayConfig::default()
        .merge_from_reader(Cursor::new(doc))
        .unwrap();
    assert!(config.show_3d_overlay);
}

#[test]
fn test_line_without_separator_reports_config_error() {
    let err = OverlayConfig::default()
        .merge_from_reader(Cursor::new("show3DOverlay\n"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Config file error: line without '=' separator: 'show3DOverlay'"
    );
}
