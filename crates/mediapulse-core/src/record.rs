use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Externally assigned sentiment class of a record.
///
/// Labels are supplied by the upstream classifier; the engine never computes
/// them. Sources disagree on spelling: newer feeds send the words, older
/// exports send the numeric encoding `0`/`1`/`2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Parse a label from either spelling: `positive`/`neutral`/`negative`
    /// (any case) or the numeric encoding `2`/`1`/`0`.
    ///
    /// Returns `None` for anything else: an unknown label, never an error.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "positive" | "2" => Some(Self::Positive),
            "neutral" | "1" => Some(Self::Neutral),
            "negative" | "0" => Some(Self::Negative),
            _ => None,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

/// One input item as delivered by a record source, before normalization.
///
/// Every field is optional or defaulted so that a sparse upstream document
/// deserializes rather than erroring; the normalizer decides what is usable.
/// Engagement counters are kept signed here (some exports carry `-1` for
/// "not collected") and are clamped during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub text: Option<String>,
    /// Timestamp text as sent by the source; parsed during normalization.
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "label_text")]
    pub label: Option<String>,
    /// Ground-truth label where the upstream dataset carries one.
    #[serde(default, deserialize_with = "label_text")]
    pub true_label: Option<String>,
    #[serde(default)]
    pub engagement: BTreeMap<String, i64>,
}

/// Accept a label as either a JSON string or the older integer encoding.
fn label_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LabelValue {
        Text(String),
        Number(i64),
    }

    Ok(Option::<LabelValue>::deserialize(deserializer)?.map(|value| match value {
        LabelValue::Text(text) => text,
        LabelValue::Number(n) => n.to_string(),
    }))
}

/// A normalized record: the unit the analytics engine aggregates over.
///
/// Immutable once produced. `label: None` means the upstream label was
/// missing or unrecognized; `timestamp: None` excludes the record from
/// time-bucketed outputs but not from the distribution or word tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub text: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub label: Option<SentimentLabel>,
    pub true_label: Option<SentimentLabel>,
    pub engagement: BTreeMap<String, u64>,
}

impl Record {
    /// Read a named engagement counter, defaulting to 0 when absent.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        self.engagement.get(name).copied().unwrap_or(0)
    }
}
