//! Raw record validation and cleanup.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use mediapulse_core::{RawRecord, Record, SentimentLabel};

/// Timestamp formats accepted after RFC 3339 fails, tried in order.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Normalize one raw record into its canonical form.
///
/// Returns `None` when the record is dropped: no usable label AND no usable
/// text, so it could contribute to neither the distribution nor the word
/// tables. Dropping is not an error. An unparseable timestamp or label
/// degrades to `None` on the respective field; negative engagement counters
/// clamp to 0.
#[must_use]
pub fn normalize(raw: &RawRecord) -> Option<Record> {
    let text = raw.text.as_deref().unwrap_or("").trim().to_owned();
    let label = raw.label.as_deref().and_then(SentimentLabel::parse);

    if text.is_empty() && label.is_none() {
        return None;
    }

    let engagement = raw
        .engagement
        .iter()
        .map(|(name, &value)| (name.clone(), u64::try_from(value).unwrap_or(0)))
        .collect();

    Some(Record {
        text,
        timestamp: raw.timestamp.as_deref().and_then(parse_timestamp),
        label,
        true_label: raw.true_label.as_deref().and_then(SentimentLabel::parse),
        engagement,
    })
}

/// Normalize a whole collection, preserving input order.
///
/// Returns the surviving records and the number of dropped ones.
#[must_use]
pub fn normalize_all(raws: &[RawRecord]) -> (Vec<Record>, u64) {
    let mut records = Vec::with_capacity(raws.len());
    let mut dropped = 0u64;

    for raw in raws {
        match normalize(raw) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "dropped records with no usable label or text");
    }

    (records, dropped)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    // Bare dates land at UTC midnight.
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
