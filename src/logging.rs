use std::cmp::Ordering;

use crate::clock::now_unix_millis;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

fn format_event(
    min_level: LogLevel,
    level: LogLevel,
    ts: u64,
    event: &str,
    fields: serde_json::Value,
) -> Option<String> {
    if level < min_level {
        return None;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(serde_json::Value::Object(payload).to_string())
}

pub fn log_event(min_level: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    if let Some(line) = format_event(min_level, level, now_unix_millis(), event, fields) {
        emit(&line);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_are_ranked() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info.max(LogLevel::Debug), LogLevel::Info);
    }

    #[test]
    fn events_below_minimum_are_dropped() {
        let line = format_event(LogLevel::Info, LogLevel::Debug, 1, "nav_panel_opened", json!({}));
        assert_eq!(line, None);
    }

    #[test]
    fn event_line_carries_fields() {
        let line = format_event(
            LogLevel::Debug,
            LogLevel::Info,
            1_700_000_000_000,
            "theme_toggled",
            json!({ "from": "dark", "to": "light" }),
        )
        .expect("info passes a debug threshold");

        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");
        assert_eq!(parsed["ts"], 1_700_000_000_000_u64);
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "theme_toggled");
        assert_eq!(parsed["from"], "dark");
        assert_eq!(parsed["to"], "light");
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = format_event(LogLevel::Info, LogLevel::Info, 5, "page_mounted", json!("loose"))
            .expect("same level passes");
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");
        assert_eq!(parsed.as_object().map(|object| object.len()), Some(3));
    }
}
