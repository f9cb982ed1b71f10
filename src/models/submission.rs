use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Form fields arrive as whatever JSON the client produced: `null` reads as
/// empty, numbers and booleans as their text.
fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// Identity block of the form: what the member typed, not what the roster says.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub app_id: String,
}

/// One missed lecture. Times are kept as the `HH:MM` strings the form sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub course: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub faculty: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_time: String,
}

impl LectureEntry {
    /// `"{start}-{end}"`, as shown in the Lecture Timing column.
    pub fn timing(&self) -> String {
        format!("{}-{}", self.start_time, self.end_time)
    }
}

/// Body of `POST /submit`.
///
/// No field is mandatory; anything the client sends beyond the known fields
/// is carried through to the daily log untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub personal: Personal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lectures: Vec<LectureEntry>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A payload stamped at arrival, as stored in the daily log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Milliseconds since the Unix epoch at creation.
    pub id: i64,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: SubmissionPayload,
}

impl SubmissionRecord {
    pub fn new(mut payload: SubmissionPayload, now: DateTime<Utc>) -> Self {
        // the server stamps win over client-sent keys with the same name
        payload.extra.remove("id");
        payload.extra.remove("submittedAt");
        Self {
            id: now.timestamp_millis(),
            submitted_at: now,
            payload,
        }
    }

    pub fn app_id(&self) -> &str {
        &self.payload.personal.app_id
    }

    pub fn reason(&self) -> &str {
        &self.payload.reason
    }

    pub fn lectures(&self) -> &[LectureEntry] {
        &self.payload.lectures
    }
}
