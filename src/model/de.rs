//! Lenient field decoders for the JSON fixtures.
//!
//! The fixture files mix JSON numbers with numeric strings and arrays with
//! comma-separated strings, so the record types decode through these helpers.

use crate::table::CellValue;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrText {
    List(Vec<Value>),
    Text(String),
}

/// Reads a formatted amount: `$` and `,` are ignored and a trailing `%`
/// turns the value into a ratio, so `"87%"` reads as `0.87`.
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(['$', ','], "");
    match cleaned.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().ok().map(|n| n / 100.0),
        None => cleaned.parse::<f64>().ok(),
    }
}

/// Decodes a number, a numeric string or a formatted amount such as
/// `"$1,250"` or `"87%"`. Unparseable text becomes `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => parse_amount(&s),
        None => None,
    })
}

/// Decodes a required identifier that may be written as a number.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Text(s) => s,
        NumberOrText::Number(n) => crate::format::plain_number(n),
    })
}

/// Optional variant of [`text`].
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => None,
        Some(NumberOrText::Text(s)) => Some(s),
        Some(NumberOrText::Number(n)) => Some(crate::format::plain_number(n)),
        None => None,
    })
}

/// Decodes either a JSON array or a comma-separated string into a list.
pub fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<ListOrText>::deserialize(deserializer)? {
        Some(ListOrText::List(values)) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            })
            .collect(),
        Some(ListOrText::Text(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    })
}

/// Keeps a loosely typed field as a table cell: numbers stay numbers,
/// everything else is shown as text.
pub fn cell<'de, D>(deserializer: D) -> Result<CellValue, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => CellValue::Missing,
        Some(Value::Number(n)) => n.as_f64().map_or(CellValue::Missing, CellValue::Number),
        Some(Value::String(s)) => CellValue::Text(s),
        Some(other) => CellValue::Text(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "number")]
        amount: Option<f64>,
        #[serde(deserialize_with = "text")]
        id: String,
        #[serde(default, deserialize_with = "list")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "cell")]
        metric: CellValue,
    }

    #[test]
    fn numeric_strings_decode_as_numbers() {
        let probe: Probe = serde_json::from_str(r#"{"amount": " 1250.5 ", "id": "C-1"}"#).unwrap();
        assert_eq!(probe.amount, Some(1250.5));
        assert!(probe.tags.is_empty());
    }

    #[test]
    fn formatted_amounts_decode_as_numbers() {
        let amount = |json: &str| serde_json::from_str::<Probe>(json).unwrap().amount;
        assert_eq!(amount(r#"{"amount": "$1,250", "id": "a"}"#), Some(1250.0));
        assert_eq!(amount(r#"{"amount": "-$884,250", "id": "a"}"#), Some(-884250.0));
        assert_eq!(amount(r#"{"amount": "87%", "id": "a"}"#), Some(0.87));
        assert_eq!(amount(r#"{"amount": "$", "id": "a"}"#), None);
    }

    #[test]
    fn unparseable_numbers_are_missing() {
        let probe: Probe = serde_json::from_str(r#"{"amount": "n/a", "id": 7}"#).unwrap();
        assert_eq!(probe.amount, None);
        assert_eq!(probe.id, "7");
    }

    #[test]
    fn lists_accept_arrays_and_comma_strings() {
        let probe: Probe =
            serde_json::from_str(r#"{"id": "a", "tags": "Warfarin, Digoxin,"}"#).unwrap();
        assert_eq!(probe.tags, vec!["Warfarin", "Digoxin"]);

        let probe: Probe = serde_json::from_str(r#"{"id": "a", "tags": ["CHF", 3, null]}"#).unwrap();
        assert_eq!(probe.tags, vec!["CHF", "3"]);
    }

    #[test]
    fn cells_keep_numbers_and_text_apart() {
        let probe: Probe = serde_json::from_str(r#"{"id": "a", "metric": 4}"#).unwrap();
        assert_eq!(probe.metric, CellValue::Number(4.0));

        let probe: Probe = serde_json::from_str(r#"{"id": "a", "metric": "2 gaps"}"#).unwrap();
        assert_eq!(probe.metric, CellValue::text("2 gaps"));

        let probe: Probe = serde_json::from_str(r#"{"id": "a", "metric": null}"#).unwrap();
        assert_eq!(probe.metric, CellValue::Missing);
        assert_eq!(probe.amount, None);
    }
}
