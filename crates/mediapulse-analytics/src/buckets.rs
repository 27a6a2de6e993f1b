//! Time bucketing for trend series.

use std::collections::BTreeMap;

use mediapulse_core::{Record, SentimentLabel};

use crate::types::{EngagementPeriod, Period};

/// Group labeled, timestamped records into one period per distinct
/// year-month key, ascending.
///
/// Records missing either the label or the timestamp are excluded here;
/// they still count toward the overall totals.
#[must_use]
pub fn calendar_periods(records: &[Record]) -> Vec<Period> {
    let mut by_month: BTreeMap<String, Period> = BTreeMap::new();

    for record in records {
        let (Some(label), Some(ts)) = (record.label, record.timestamp) else {
            continue;
        };
        let key = ts.format("%Y-%m").to_string();
        by_month
            .entry(key.clone())
            .or_insert_with(|| Period::new(key))
            .add(label);
    }

    // BTreeMap iterates in key order; YYYY-MM keys sort chronologically.
    by_month.into_values().collect()
}

/// Split labeled records, in insertion order, into `bucket_count` contiguous
/// near-equal chunks labeled `Period 1`, `Period 2`, ...
///
/// Chunk size is `ceil(N / bucket_count)`; the last chunk may be shorter,
/// so fewer than `bucket_count` periods can come back. Used when no record
/// in the input carries a usable timestamp.
#[must_use]
pub fn fixed_count_periods(records: &[Record], bucket_count: usize) -> Vec<Period> {
    let labeled: Vec<SentimentLabel> = records.iter().filter_map(|r| r.label).collect();
    if labeled.is_empty() || bucket_count == 0 {
        return Vec::new();
    }

    let chunk_size = labeled.len().div_ceil(bucket_count);
    labeled
        .chunks(chunk_size)
        .enumerate()
        .map(|(i, chunk)| {
            let mut period = Period::new(format!("Period {}", i + 1));
            for &label in chunk {
                period.add(label);
            }
            period
        })
        .collect()
}

/// Group timestamped records by calendar day and average each configured
/// engagement counter per day, rounded to the nearest integer.
///
/// Missing counters read as 0 and still pull the average down; days are
/// returned in ascending order.
#[must_use]
pub fn engagement_by_day(records: &[Record], counters: &[String]) -> Vec<EngagementPeriod> {
    let mut by_day: BTreeMap<String, (BTreeMap<String, u64>, u64)> = BTreeMap::new();

    for record in records {
        let Some(ts) = record.timestamp else {
            continue;
        };
        let key = ts.format("%Y-%m-%d").to_string();
        let (sums, count) = by_day.entry(key).or_default();
        for name in counters {
            *sums.entry(name.clone()).or_insert(0) += record.counter(name);
        }
        *count += 1;
    }

    by_day
        .into_iter()
        .map(|(period, (sums, count))| {
            let averages = counters
                .iter()
                .map(|name| {
                    let sum = sums.get(name).copied().unwrap_or(0);
                    (name.clone(), rounded_mean(sum, count))
                })
                .collect();
            EngagementPeriod { period, averages }
        })
        .collect()
}

/// Integer mean with round-half-up, matching how the dashboards rounded.
fn rounded_mean(sum: u64, count: u64) -> u64 {
    if count == 0 {
        0
    } else {
        (sum + count / 2) / count
    }
}
