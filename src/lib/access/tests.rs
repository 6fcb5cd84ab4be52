use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};
use serde_json::{Value, json};

use super::{safe_get, safe_get_f64};

fn gun() -> Value {
    json!({
        "name": "Heavy Laser",
        "outfitSpace": 20,
        "weapon": {
            "range": 480,
            "shield": { "perSecond": 24.5 },
            "hull": { "perSecond": 18 }
        }
    })
}

#[test]
fn reads_present_paths() {
    let g = gun();
    assert_eq!(safe_get(&["name"], &g), Some(&json!("Heavy Laser")));
    assert_eq!(safe_get_f64(&["weapon", "shield", "perSecond"], &g), Some(24.5));
    assert_eq!(safe_get_f64(&["weapon", "hull", "perSecond"], &g), Some(18.0));
}

#[test]
fn empty_path_is_the_record() {
    let g = gun();
    assert_eq!(safe_get(&[], &g), Some(&g));
}

#[test]
fn missing_segments_are_absent() {
    let g = gun();
    assert_eq!(safe_get(&["weapon", "ion", "perSecond"], &g), None);
    assert_eq!(safe_get(&["missile"], &g), None);
    assert_eq!(safe_get(&["weapon", "hull", "perShot"], &g), None);
}

#[test]
fn non_object_intermediates_are_absent() {
    let g = gun();
    // `range` is a number, so nothing can be read beneath it.
    assert_eq!(safe_get(&["weapon", "range", "perSecond"], &g), None);
    assert_eq!(safe_get(&["name", "0"], &g), None);
    assert_eq!(safe_get(&["a"], &Value::Null), None);
    assert_eq!(safe_get(&["0"], &json!([1, 2, 3])), None);
}

#[test]
fn non_numeric_leaf_is_absent_for_f64() {
    let g = json!({ "weapon": { "hull": { "perSecond": "lots" } } });
    assert!(safe_get(&["weapon", "hull", "perSecond"], &g).is_some());
    assert_eq!(safe_get_f64(&["weapon", "hull", "perSecond"], &g), None);
}

#[test]
fn any_unknown_key_is_absent() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    let g = gun();
    runner
        .run(
            &proptest::collection::vec("[a-z]{1,8}", 1..4),
            |segments| {
                // Uppercase keys never occur in the fixture.
                let mut path: Vec<String> = segments;
                path.push("MISSING".to_string());
                let refs: Vec<&str> = path.iter().map(String::as_str).collect();
                prop_assert_eq!(safe_get(&refs, &g), None);
                Ok(())
            },
        )
        .unwrap();
}
