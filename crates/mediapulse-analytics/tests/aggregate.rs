//! End-to-end aggregation scenarios over realistic record collections.

use std::collections::BTreeMap;

use mediapulse_analytics::{aggregate, AnalyticsConfig};
use mediapulse_core::RawRecord;

fn raw(text: &str, label: &str, timestamp: Option<&str>) -> RawRecord {
    RawRecord {
        text: Some(text.to_string()),
        label: Some(label.to_string()),
        timestamp: timestamp.map(str::to_owned),
        ..RawRecord::default()
    }
}

#[test]
fn empty_input_yields_empty_well_typed_result() {
    let result = aggregate(&[], &AnalyticsConfig::default()).expect("aggregate");

    assert_eq!(result.total_records, 0);
    assert_eq!(result.dropped_records, 0);
    assert_eq!(result.sentiment_distribution.total(), 0);
    assert!(result.sentiment_trend.is_empty());
    assert!(result.engagement_trend.is_empty());
    assert!(result.word_cloud.is_empty());
    assert!(result.word_frequency_by_label.positive.is_empty());
    assert!(result.word_frequency_by_label.neutral.is_empty());
    assert!(result.word_frequency_by_label.negative.is_empty());
    assert!(result.recent_records.is_empty());
    assert!(result.time_range.is_none());
    // Averages stay present (at zero) so consumers never hit a missing key.
    assert_eq!(result.engagement_averages["likes"], 0.0);
}

#[test]
fn two_calendar_months_yield_two_periods() {
    // 14 records, 7 per month, timestamps present, so fixed-count
    // chunking must not trigger even though bucket_count is 12.
    let labels = ["positive", "positive", "positive", "neutral", "neutral", "negative", "negative"];
    let mut records = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        records.push(raw(
            "january record",
            label,
            Some(&format!("2024-01-{:02}T10:00:00Z", i + 1)),
        ));
    }
    for (i, label) in labels.iter().enumerate() {
        records.push(raw(
            "february record",
            label,
            Some(&format!("2024-02-{:02}T10:00:00Z", i + 1)),
        ));
    }

    let result = aggregate(&records, &AnalyticsConfig::default()).expect("aggregate");

    assert_eq!(result.sentiment_trend.len(), 2);
    assert_eq!(result.sentiment_trend[0].key, "2024-01");
    assert_eq!(result.sentiment_trend[1].key, "2024-02");
    for period in &result.sentiment_trend {
        assert_eq!(period.total(), 7, "period {} should hold 7 records", period.key);
        assert_eq!(period.positive, 3);
        assert_eq!(period.neutral, 2);
        assert_eq!(period.negative, 2);
    }
}

#[test]
fn word_table_filters_stop_words_and_short_tokens() {
    let records = vec![raw("Nuclear power is great great great", "positive", None)];
    let config = AnalyticsConfig {
        word_top_k: 5,
        ..AnalyticsConfig::default()
    };

    let result = aggregate(&records, &config).expect("aggregate");

    let positive: Vec<(&str, u64)> = result
        .word_frequency_by_label
        .positive
        .iter()
        .map(|wc| (wc.token.as_str(), wc.count))
        .collect();
    // "is" is a stop-word and no token under 3 chars survives; "great"
    // leads on count, then first-occurrence order
    assert_eq!(positive, [("great", 3), ("nuclear", 1), ("power", 1)]);
}

#[test]
fn fixed_count_chunking_without_timestamps() {
    let records: Vec<RawRecord> = (0..25).map(|_| raw("chunked", "neutral", None)).collect();

    let result = aggregate(&records, &AnalyticsConfig::default()).expect("aggregate");

    // chunk size ceil(25/12) = 3: eight full chunks and a final single
    assert_eq!(result.sentiment_trend.len(), 9);
    for period in &result.sentiment_trend[..8] {
        assert_eq!(period.total(), 3);
    }
    assert_eq!(result.sentiment_trend[8].total(), 1);
    assert_eq!(result.sentiment_trend[0].key, "Period 1");
}

#[test]
fn distribution_sums_to_labeled_record_count() {
    let records = vec![
        raw("a", "positive", None),
        raw("b", "negative", None),
        raw("c", "bogus", None), // unknown label, still counted in totals
        raw("d", "neutral", None),
    ];

    let result = aggregate(&records, &AnalyticsConfig::default()).expect("aggregate");

    assert_eq!(result.total_records, 4);
    assert_eq!(result.sentiment_distribution.total(), 3);
    assert_eq!(result.sentiment_distribution.positive, 1);
    assert_eq!(result.sentiment_distribution.neutral, 1);
    assert_eq!(result.sentiment_distribution.negative, 1);
}

#[test]
fn period_counts_match_mapped_records() {
    let mut records = Vec::new();
    for day in 1..=9 {
        let label = match day % 3 {
            0 => "positive",
            1 => "neutral",
            _ => "negative",
        };
        records.push(raw(
            "trend record",
            label,
            Some(&format!("2024-04-{day:02}T00:00:00Z")),
        ));
    }
    // A record without a label maps to no period.
    records.push(RawRecord {
        text: Some("unlabeled".to_string()),
        timestamp: Some("2024-04-10T00:00:00Z".to_string()),
        ..RawRecord::default()
    });

    let result = aggregate(&records, &AnalyticsConfig::default()).expect("aggregate");

    assert_eq!(result.sentiment_trend.len(), 1);
    assert_eq!(result.sentiment_trend[0].total(), 9);
}

#[test]
fn word_tables_sorted_descending_with_stable_ties() {
    let records = vec![
        raw("solar solar wind wind hydro", "positive", None),
        raw("solar geothermal", "positive", None),
    ];
    let result = aggregate(&records, &AnalyticsConfig::default()).expect("aggregate");

    let table = &result.word_frequency_by_label.positive;
    assert!(table.len() <= 15);
    for pair in table.windows(2) {
        assert!(
            pair[0].count >= pair[1].count,
            "table must be sorted by count descending"
        );
    }
    // wind and hydro/geothermal tie groups keep first-occurrence order
    let tokens: Vec<&str> = table.iter().map(|wc| wc.token.as_str()).collect();
    assert_eq!(tokens, ["solar", "wind", "hydro", "geothermal"]);
}

#[test]
fn aggregate_is_idempotent() {
    let mut records = vec![
        raw("Nuclear plants keep expanding", "positive", Some("2024-01-03T09:00:00Z")),
        raw("Another outage reported today", "negative", Some("2024-02-11T18:30:00Z")),
        raw("Regulators schedule hearings", "neutral", Some("2024-02-12T08:15:00Z")),
    ];
    records[0].engagement = BTreeMap::from([("likes".to_string(), 12), ("reposts".to_string(), 3)]);
    records[1].engagement = BTreeMap::from([("likes".to_string(), 40)]);

    let config = AnalyticsConfig::default();
    let first = aggregate(&records, &config).expect("first run");
    let second = aggregate(&records, &config).expect("second run");

    assert_eq!(first, second);
    let first_json = serde_json::to_string(&first).expect("serialize");
    let second_json = serde_json::to_string(&second).expect("serialize");
    assert_eq!(first_json, second_json);
}

#[test]
fn engagement_trend_groups_by_day() {
    let mut morning = raw("morning post", "neutral", Some("2024-05-01T08:00:00Z"));
    morning.engagement = BTreeMap::from([("likes".to_string(), 4)]);
    let mut evening = raw("evening post", "neutral", Some("2024-05-01T20:00:00Z"));
    evening.engagement = BTreeMap::from([("likes".to_string(), 8)]);
    let mut next_day = raw("next day", "neutral", Some("2024-05-02T09:00:00Z"));
    next_day.engagement = BTreeMap::from([("likes".to_string(), 10)]);

    let result =
        aggregate(&[morning, evening, next_day], &AnalyticsConfig::default()).expect("aggregate");

    assert_eq!(result.engagement_trend.len(), 2);
    assert_eq!(result.engagement_trend[0].period, "2024-05-01");
    assert_eq!(result.engagement_trend[0].averages["likes"], 6);
    assert_eq!(result.engagement_trend[1].averages["likes"], 10);
}

#[test]
fn dropped_records_still_reported() {
    let records = vec![
        raw("kept", "positive", None),
        RawRecord::default(), // nothing usable
    ];
    let result = aggregate(&records, &AnalyticsConfig::default()).expect("aggregate");
    assert_eq!(result.total_records, 1);
    assert_eq!(result.dropped_records, 1);
}
