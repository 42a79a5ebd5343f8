//! Decoders for backend payloads whose field types drift: generated plans
//! carry `null`s, numbers where text is expected, and stray keys.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

fn text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Text field: numbers and booleans are stringified, anything else is empty.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(text).unwrap_or_default())
}

/// Optional text field: empty text counts as absent.
pub(crate) fn lenient_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(text)
        .filter(|text| !text.is_empty()))
}

/// List of text: a lone string becomes a one-item list, non-text items are dropped.
pub(crate) fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let strings = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items.into_iter().filter_map(text).collect(),
        Some(other) => text(other).into_iter().collect(),
        None => Vec::new(),
    };
    Ok(strings)
}

pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(number.filter(|n: &f64| n.is_finite()))
}

pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(number)
}

/// `true`, non-zero numbers, `"1"` and `"true"` are set; everything else is not.
pub(crate) fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(flag)) => flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => s == "1" || s.eq_ignore_ascii_case("true"),
        _ => false,
    };
    Ok(flag)
}

/// Keeps the records that decode and skips the rest. A non-list is an empty list.
pub(crate) fn lenient_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let records = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq, Default)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient_text")]
        text: String,
        #[serde(default, deserialize_with = "lenient_opt_text")]
        note: Option<String>,
        #[serde(default, deserialize_with = "lenient_strings")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "lenient_f64")]
        score: Option<f64>,
        #[serde(default, deserialize_with = "lenient_u64")]
        count: Option<u64>,
    }

    fn sample(value: Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn nulls_and_missing_fields_take_defaults() {
        let all_null = sample(json!({"text": null, "note": null, "tags": null, "score": null, "count": null}));
        assert_eq!(all_null, Sample::default());
        assert_eq!(sample(json!({})), Sample::default());
    }

    #[test]
    fn off_type_scalars_are_coerced() {
        let coerced = sample(json!({"text": 2, "note": true, "tags": "museum", "score": "4.5", "count": "12"}));
        assert_eq!(
            coerced,
            Sample {
                text: "2".into(),
                note: Some("true".into()),
                tags: vec!["museum".into()],
                score: Some(4.5),
                count: Some(12),
            }
        );
    }

    #[test]
    fn unusable_values_are_dropped() {
        let odd = sample(json!({"text": {"a": 1}, "note": "", "tags": ["art", null, 3, {}], "score": "high", "count": -1}));
        assert_eq!(
            odd,
            Sample { tags: vec!["art".into(), "3".into()], ..Default::default() }
        );
    }

    #[test]
    fn flag_spellings() {
        #[derive(Deserialize)]
        struct Flag {
            #[serde(default, deserialize_with = "lenient_flag")]
            on: bool,
        }
        for (raw, expected) in [(json!(true), true), (json!(2), true), (json!("TRUE"), true), (json!("no"), false), (json!([]), false)] {
            let flag: Flag = serde_json::from_value(json!({"on": raw})).unwrap();
            assert_eq!(flag.on, expected, "on: {raw}");
        }
    }

    #[test]
    fn records_skip_undecodable_items() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Records {
            #[serde(default, deserialize_with = "lenient_records")]
            items: Vec<u32>,
        }
        let records: Records = serde_json::from_value(json!({"items": [1, "x", null, 3]})).unwrap();
        assert_eq!(records.items, vec![1, 3]);

        let records: Records = serde_json::from_value(json!({"items": {"1": 1}})).unwrap();
        assert!(records.items.is_empty());
    }
}
