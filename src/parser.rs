use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::item::{FieldItem, FormEntry};

/// Parse a JSON document into a form item list.
///
/// The document is an array whose elements are item objects
/// (`{"name", "input", "props"?, "inner"?}`) or arrays of item objects
/// (rows). Custom render items have no JSON representation; they are
/// appended programmatically by the host.
pub fn parse_entries<E>(value: &Value) -> Result<Vec<FormEntry<E>>> {
    let slots = value
        .as_array()
        .context("form item document must be an array")?;
    let mut entries = Vec::with_capacity(slots.len());
    for (index, slot) in slots.iter().enumerate() {
        match slot {
            Value::Object(_) => {
                let field = parse_field(slot)
                    .with_context(|| format!("invalid form item at index {index}"))?;
                entries.push(FormEntry::from(field));
            }
            Value::Array(members) => {
                if members.is_empty() {
                    bail!("row at index {index} has no members");
                }
                let members = members
                    .iter()
                    .map(|member| parse_field(member).map(Into::into))
                    .collect::<Result<Vec<_>>>()
                    .with_context(|| format!("invalid member in row at index {index}"))?;
                entries.push(FormEntry::Row(members));
            }
            other => bail!("unsupported form item shape at index {index}: {other}"),
        }
    }
    Ok(entries)
}

fn parse_field(value: &Value) -> Result<FieldItem> {
    if !value.is_object() {
        bail!("form item must be an object, got {value}");
    }
    let field: FieldItem = serde_json::from_value(value.clone())?;
    if field.name.is_empty() {
        bail!("form item name must not be empty");
    }
    if field.input.is_empty() {
        bail!("form item input tag must not be empty");
    }
    Ok(field)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_items_and_rows() {
        let document = json!([
            {"name": "email", "input": "email", "props": {"label": "Email"}},
            [
                {"name": "first", "input": "text"},
                {"name": "last", "input": "text"}
            ],
            {"name": "newsletter", "input": "checkbox"}
        ]);
        let entries = parse_entries::<String>(&document).expect("valid document");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].leading_name(), Some("email"));
        assert_eq!(entries[1].leading_name(), Some("first"));
        match &entries[1] {
            FormEntry::Row(members) => assert_eq!(members.len(), 2),
            other => panic!("expected row, got {other:?}"),
        }
        assert_eq!(entries[2].leading_name(), Some("newsletter"));
    }

    #[test]
    fn rejects_non_array_documents() {
        let err = parse_entries::<String>(&json!({"name": "email"})).unwrap_err();
        assert!(err.to_string().contains("must be an array"));
    }

    #[test]
    fn rejects_items_missing_required_keys() {
        let err = parse_entries::<String>(&json!([{"name": "email"}])).unwrap_err();
        assert!(err.to_string().contains("index 0"));
    }

    #[test]
    fn rejects_scalars_empty_rows_and_empty_names() {
        assert!(parse_entries::<String>(&json!([42])).is_err());
        assert!(parse_entries::<String>(&json!([[]])).is_err());
        assert!(
            parse_entries::<String>(&json!([{"name": "", "input": "text"}])).is_err()
        );
    }
}
