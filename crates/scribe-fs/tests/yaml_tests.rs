//! Tests for the YAML round trip

use scribe_fs::yaml::{edit_yaml, read_yaml};
use scribe_fs::Error;
use serde_yaml::Value;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_edit_yaml_writes_changed_value() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ci.yml");
    fs::write(&path, "name: build\nsteps:\n  - checkout\n").unwrap();

    let changed = edit_yaml(&path, |value| {
        if let Some(steps) = value.get_mut("steps").and_then(Value::as_sequence_mut) {
            steps.push(Value::from("test"));
        }
        Ok::<_, Error>(())
    })
    .unwrap();

    assert!(changed);
    let value = read_yaml(&path).unwrap();
    assert_eq!(value["steps"][1], Value::from("test"));
    assert_eq!(value["name"], Value::from("build"));
}

#[test]
fn test_edit_yaml_unchanged_keeps_comments() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ci.yml");
    let original = "# pipeline\nname: build # inline\n";
    fs::write(&path, original).unwrap();

    let changed = edit_yaml(&path, |_| Ok::<_, Error>(())).unwrap();

    assert!(!changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_edit_yaml_changed_value_drops_comments() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ci.yml");
    fs::write(&path, "# pipeline\nname: build\n").unwrap();

    let changed = edit_yaml(&path, |value| {
        value["name"] = Value::from("release");
        Ok::<_, Error>(())
    })
    .unwrap();

    assert!(changed);
    let written = fs::read_to_string(&path).unwrap();
    assert!(!written.contains("# pipeline"));
    assert_eq!(read_yaml(&path).unwrap()["name"], Value::from("release"));
}
