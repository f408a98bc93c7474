use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render(&["key", "value"], &rows))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let Some(first) = items.first().and_then(Value::as_object) else {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render(&["value"], &rows);
    };

    let headers = first.keys().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| item.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render(&headers, &rows)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use dash_core::SelectOption;
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Report {
        collection: &'static str,
        inserted: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(
            &Report {
                collection: "internship",
                inserted: 7,
            },
            OutputFormat::Json,
        )
        .expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["collection"], "internship");
        assert_eq!(parsed["inserted"], 7);
    }

    #[test]
    fn raw_render_is_single_line() {
        let out = render(&vec![1, 2, 3], OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, "[1,2,3]");
    }

    #[test]
    fn object_table_lists_key_value_rows() {
        let out = render(
            &Report {
                collection: "internship",
                inserted: 7,
            },
            OutputFormat::Table,
        )
        .expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("key"));
        assert!(lines[2].starts_with("collection"));
        assert!(lines[2].ends_with("internship"));
        assert!(lines[3].ends_with('7'));
    }

    #[test]
    fn option_table_keeps_all_first() {
        let options = vec![
            SelectOption {
                label: "All".into(),
                value: String::new(),
            },
            SelectOption {
                label: "gas".into(),
                value: "gas".into(),
            },
        ];
        let out = render(&options, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("label"));
        assert!(lines[2].starts_with("All"));
        assert!(lines[3].starts_with("gas"));
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let empty: Vec<SelectOption> = Vec::new();
        assert_eq!(
            render(&empty, OutputFormat::Table).expect("table render should work"),
            "(no rows)"
        );
    }
}
