use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a serializable response in the requested format.
///
/// `text` is produced by `text` so each command decides what a human sees.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce() -> Option<String>,
) -> anyhow::Result<Option<String>> {
    match format {
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
        OutputFormat::Raw => Ok(Some(serde_json::to_string(value)?)),
        OutputFormat::Text => Ok(text()),
    }
}

/// Print a response; text mode may print nothing at all.
pub fn output<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce() -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(rendered) = render(value, format, text)? {
        println!("{rendered}");
    }
    Ok(())
}

/// `key: value` lines for a JSON object, in object order.
pub fn key_value_lines(map: &serde_json::Map<String, Value>) -> String {
    map.iter()
        .map(|(key, value)| format!("{key}: {}", value_to_cell(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{key_value_lines, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json, || None)
            .unwrap()
            .expect("json always renders");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw, || None).unwrap().unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn text_render_can_be_silent() {
        let value = Example { id: "x", value: 7 };
        assert!(render(&value, OutputFormat::Text, || None).unwrap().is_none());
    }

    #[test]
    fn key_value_lines_keep_order() {
        let value = json!({"name": "Lincoln Elementary", "id": 12, "license": null});
        let lines = key_value_lines(value.as_object().unwrap());
        assert_eq!(lines, "name: Lincoln Elementary\nid: 12\nlicense: null");
    }
}
