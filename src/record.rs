//! The IPO record exchanged between the lookup server and the search widget.
//!
//! Every value is carried as text. Decoding is lenient: numbers and booleans
//! are kept as their JSON text, `null` and missing fields become `None`, so a
//! body that does not look like a record still decodes (to an empty one).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Marker for a value that is not available. Optional rows showing exactly
/// this text are hidden.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpoRecord {
    #[serde(default, deserialize_with = "name_text")]
    pub ipo_name: String,
    #[serde(default, deserialize_with = "optional_text", serialize_with = "or_not_available")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "optional_text", serialize_with = "or_not_available")]
    pub gmp: Option<String>,
    #[serde(default, deserialize_with = "optional_text", serialize_with = "or_not_available")]
    pub price_high: Option<String>,
    #[serde(default, deserialize_with = "optional_text", serialize_with = "or_not_available")]
    pub issue_size: Option<String>,
    #[serde(default, deserialize_with = "optional_text", serialize_with = "or_not_available")]
    pub retail_subscription: Option<String>,
    #[serde(default, deserialize_with = "optional_text", serialize_with = "or_not_available")]
    pub hni_subscription: Option<String>,
    #[serde(default, deserialize_with = "optional_text", serialize_with = "or_not_available")]
    pub qib_subscription: Option<String>,
    #[serde(default, deserialize_with = "optional_text", serialize_with = "or_not_available")]
    pub listing_gain: Option<String>,
    #[serde(default, deserialize_with = "optional_text", serialize_with = "or_not_available")]
    pub best_category: Option<String>,
}

impl IpoRecord {
    /// Builds a record from an arbitrary JSON body without validating its shape.
    /// Anything that is not an object yields an empty record.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// Text shown for a JSON value, or `None` when there is nothing to show.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_text))
}

fn name_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

fn or_not_available<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(NOT_AVAILABLE))
}
