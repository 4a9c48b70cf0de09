use crate::dsl::value::{ConstantTable, Value};

/// Renders a resolved constant table as a TOML document.
///
/// Each constant becomes one `key = value` line, in insertion order. Lines
/// are joined with newlines and the result carries no trailing newline.
///
/// # Example
/// ```
/// use tomlette::{dsl::value::Value, format::to_toml};
///
/// let mut table = tomlette::dsl::value::ConstantTable::new();
/// table.insert("greeting".to_string(), Value::from("hi"));
/// table.insert("count".to_string(), Value::Integer(2));
///
/// assert_eq!(to_toml(&table), "greeting = \"hi\"\ncount = 2");
/// ```
#[must_use]
pub fn to_toml(constants: &ConstantTable) -> String {
    constants.iter()
             .map(|(key, value)| format!("{key} = {}", render(value)))
             .collect::<Vec<_>>()
             .join("\n")
}

/// Renders a single value in TOML syntax.
///
/// Integers render as decimal digits, text renders double-quoted with
/// interior double quotes escaped, and arrays render as a bracketed,
/// comma-separated list of recursively rendered elements.
fn render(value: &Value) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::Text(s) => format!("\"{}\"", s.replace('"', "\\\"")),
        Value::Array(items) => {
            let inner = items.iter().map(render).collect::<Vec<_>>().join(", ");
            format!("[{inner}]")
        },
    }
}
