//! Options deserialize from the camelCase configuration surface.

use jshake::{JsxMode, ShakeOptions};

#[test]
fn options_deserialize_from_camel_case() {
    let options: ShakeOptions =
        serde_json::from_str(r#"{"experimentalLogSideEffects":true,"jsx":"automatic"}"#).unwrap();
    assert!(options.experimental_log_side_effects);
    assert_eq!(options.jsx, JsxMode::Automatic);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let options: ShakeOptions = serde_json::from_str("{}").unwrap();
    assert!(!options.experimental_log_side_effects);
    assert_eq!(options.jsx, JsxMode::Preserve);
}

#[test]
fn options_round_trip_through_json() {
    let options = ShakeOptions {
        experimental_log_side_effects: true,
        jsx: JsxMode::Classic,
    };
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains("experimentalLogSideEffects"));
    let back: ShakeOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back.experimental_log_side_effects, options.experimental_log_side_effects);
    assert_eq!(back.jsx, options.jsx);
}
