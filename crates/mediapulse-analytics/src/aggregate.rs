//! Aggregation entry point.

use std::collections::BTreeMap;

use mediapulse_core::{RawRecord, Record, SentimentLabel};

use crate::buckets::{calendar_periods, engagement_by_day, fixed_count_periods};
use crate::error::AnalyticsError;
use crate::normalize::normalize_all;
use crate::rank::FrequencyCounter;
use crate::tokenize::tokenize;
use crate::types::{
    AnalyticsConfig, AnalyticsResult, LabelAccuracy, SentimentDistribution, TimeRange, WordCount,
    WordFrequencyByLabel,
};

/// Compute the full analytics result for one record collection.
///
/// 1. Normalize all raw records, counting the dropped ones.
/// 2. Tally the overall sentiment distribution.
/// 3. Bucket the sentiment trend: calendar months when any record carries
///    a timestamp, fixed-count chunks otherwise.
/// 4. Average engagement counters per calendar day.
/// 5. Build the per-label word tables and the global word cloud.
/// 6. Attach the recent-records window, overall engagement means, label
///    accuracy, and observed time range.
///
/// Pure and synchronous: no I/O, no retained state, identical output for
/// identical input. Individual malformed records are dropped, never raised.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidConfig`] if a bucket or top-K setting
/// is zero; nothing partial is produced in that case.
pub fn aggregate(
    raw_records: &[RawRecord],
    config: &AnalyticsConfig,
) -> Result<AnalyticsResult, AnalyticsError> {
    config.validate()?;

    let (records, dropped_records) = normalize_all(raw_records);
    tracing::debug!(
        total = records.len(),
        dropped = dropped_records,
        "normalized records"
    );

    let mut distribution = SentimentDistribution::default();
    for record in &records {
        if let Some(label) = record.label {
            distribution.add(label);
        }
    }

    let has_timestamps = records.iter().any(|r| r.timestamp.is_some());
    let sentiment_trend = if has_timestamps {
        calendar_periods(&records)
    } else {
        fixed_count_periods(&records, config.bucket_count)
    };
    tracing::debug!(
        periods = sentiment_trend.len(),
        calendar = has_timestamps,
        "bucketed sentiment trend"
    );

    let (word_frequency_by_label, word_cloud) = word_tables(&records, config);

    Ok(AnalyticsResult {
        sentiment_trend,
        sentiment_distribution: distribution,
        engagement_trend: engagement_by_day(&records, &config.engagement_counters),
        word_frequency_by_label,
        word_cloud,
        recent_records: recent_records(&records, config.recent_window),
        engagement_averages: engagement_averages(&records, &config.engagement_counters),
        label_accuracy: label_accuracy(&records),
        time_range: time_range(&records),
        total_records: records.len() as u64,
        dropped_records,
    })
}

/// Build the per-label frequency tables and the global cloud in one pass.
///
/// Records with an unknown label still feed the cloud; only the per-label
/// tables skip them.
fn word_tables(
    records: &[Record],
    config: &AnalyticsConfig,
) -> (WordFrequencyByLabel, Vec<WordCount>) {
    let mut positive = FrequencyCounter::new();
    let mut neutral = FrequencyCounter::new();
    let mut negative = FrequencyCounter::new();
    let mut cloud = FrequencyCounter::new();

    for record in records {
        if record.text.is_empty() {
            continue;
        }
        for token in tokenize(&record.text) {
            if let Some(label) = record.label {
                let table = match label {
                    SentimentLabel::Positive => &mut positive,
                    SentimentLabel::Neutral => &mut neutral,
                    SentimentLabel::Negative => &mut negative,
                };
                table.add(token.clone());
            }
            cloud.add(token);
        }
    }

    (
        WordFrequencyByLabel {
            positive: positive.into_top_k(config.word_top_k),
            neutral: neutral.into_top_k(config.word_top_k),
            negative: negative.into_top_k(config.word_top_k),
        },
        cloud.into_top_k(config.cloud_top_k),
    )
}

/// Select the `window` most recent records, most recent first.
///
/// Timestamped records win by timestamp, ties by later input position.
/// When no record carries a timestamp at all, the last `window` records in
/// input order are taken instead.
fn recent_records(records: &[Record], window: usize) -> Vec<Record> {
    if window == 0 {
        return Vec::new();
    }

    let mut timestamped: Vec<(usize, &Record)> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.timestamp.is_some())
        .collect();

    if timestamped.is_empty() {
        return records.iter().rev().take(window).cloned().collect();
    }

    timestamped.sort_by(|(pos_a, a), (pos_b, b)| {
        b.timestamp.cmp(&a.timestamp).then(pos_b.cmp(pos_a))
    });
    timestamped
        .into_iter()
        .take(window)
        .map(|(_, r)| r.clone())
        .collect()
}

/// Overall per-counter mean across all records, rounded to 2 decimals.
fn engagement_averages(records: &[Record], counters: &[String]) -> BTreeMap<String, f64> {
    let mut averages = BTreeMap::new();
    for name in counters {
        let mean = if records.is_empty() {
            0.0
        } else {
            let sum: u64 = records.iter().map(|r| r.counter(name)).sum();
            #[allow(clippy::cast_precision_loss)]
            let mean = sum as f64 / records.len() as f64;
            (mean * 100.0).round() / 100.0
        };
        averages.insert(name.clone(), mean);
    }
    averages
}

/// Tally predicted-vs-truth agreement over records carrying both labels.
fn label_accuracy(records: &[Record]) -> LabelAccuracy {
    let mut accuracy = LabelAccuracy::default();
    for record in records {
        let (Some(predicted), Some(truth)) = (record.label, record.true_label) else {
            continue;
        };
        if predicted == truth {
            accuracy.correct += 1;
        } else {
            accuracy.incorrect += 1;
        }
    }
    accuracy
}

fn time_range(records: &[Record]) -> Option<TimeRange> {
    let mut timestamps = records.iter().filter_map(|r| r.timestamp);
    let first = timestamps.next()?;
    let (start, end) = timestamps.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts)));
    Some(TimeRange { start, end })
}
