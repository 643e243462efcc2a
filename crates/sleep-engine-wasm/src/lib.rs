//! WASM bindings for the sleep-cycle engine.
//!
//! The host (a JavaScript or React Native UI) owns the time picker and the
//! clock. It passes plain `HH:MM` strings in and gets JSON back.

use sleep_engine::{calculate as engine_calculate, parse, MinuteOfDay, Mode};
use wasm_bindgen::prelude::*;

/// Compute the four recommendations and return them as a JSON array.
///
/// `mode` is `"bedtime"` or `"waketime"`; `now` is the host's current time of day.
#[wasm_bindgen]
pub fn calculate(anchor: &str, mode: &str, now: &str) -> Result<String, JsError> {
    calculate_json(anchor, mode, now).map_err(|e| JsError::new(&e))
}

/// Normalise a time string to `HH:MM`.
#[wasm_bindgen(js_name = parseTime)]
pub fn parse_time(input: &str) -> Result<String, JsError> {
    normalize_time(input).map_err(|e| JsError::new(&e))
}

fn calculate_json(anchor: &str, mode: &str, now: &str) -> Result<String, String> {
    let mode = mode.parse::<Mode>().map_err(|e| e.to_string())?;
    let now = now.parse::<MinuteOfDay>().map_err(|e| e.to_string())?;
    let recommendations = engine_calculate(anchor, mode, now).map_err(|e| e.to_string())?;
    serde_json::to_string(&recommendations).map_err(|e| e.to_string())
}

fn normalize_time(input: &str) -> Result<String, String> {
    parse(input).map(|m| m.to_string()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_json_bedtime() {
        let json = calculate_json("23:30", "bedtime", "23:00").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["result_time"], "04:14");
        assert_eq!(value[0]["quality"], "fair");
        assert_eq!(value[3]["cycle_count"], 6);
    }

    #[test]
    fn test_calculate_json_rejects_unknown_mode() {
        let err = calculate_json("23:30", "siesta", "23:00").unwrap_err();
        assert!(err.contains("unknown mode"), "got: {err}");
    }

    #[test]
    fn test_calculate_json_rejects_bad_anchor() {
        let err = calculate_json("", "waketime", "23:00").unwrap_err();
        assert!(err.contains("Invalid time format"), "got: {err}");
    }

    #[test]
    fn test_normalize_time() {
        assert_eq!(normalize_time("730").unwrap(), "07:30");
        assert_eq!(normalize_time(" 9:05 ").unwrap(), "09:05");
        assert!(normalize_time("24:00").is_err());
    }
}
