use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Category assigned to questions that do not name one.
pub const DEFAULT_CATEGORY: &str = "General Knowledge";

/// A normalized multiple-choice question.
///
/// `correct_index` always points into `options`; the loader drops records
/// that cannot satisfy this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub category: String,
}

impl Question {
    pub fn is_correct(&self, original_index: usize) -> bool {
        self.correct_index == original_index
    }
}

/// A question record as it appears in the bank file, before normalization.
///
/// Every field is optional so that a single malformed record can be dropped
/// without failing the whole bank. The optional metadata is read leniently:
/// an `id` may be a numeric string, `correct` may be an integral float, and
/// values of any other type count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuestion {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_index")]
    pub correct: Option<i64>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
}

fn integral(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|float| float.fract() == 0.0)
            .map(|float| float as i64)
    })
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match &value {
        Value::String(text) => text.trim().parse().ok(),
        _ => integral(&value),
    }))
}

fn lenient_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(integral))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Ok(Some(text)),
        _ => Ok(None),
    }
}

/// One option as shown to the player, remembering where it sat in the
/// original record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedOption {
    pub text: String,
    pub original_index: usize,
}
