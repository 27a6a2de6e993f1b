use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use mediapulse_core::{Record, SentimentLabel};
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

pub const DEFAULT_BUCKET_COUNT: usize = 12;
pub const DEFAULT_WORD_TOP_K: usize = 15;
pub const DEFAULT_CLOUD_TOP_K: usize = 50;
pub const DEFAULT_RECENT_WINDOW: usize = 5;

/// Configuration for one aggregation call.
///
/// Deserializable from a YAML document where every field is optional; see
/// [`AnalyticsConfig::from_yaml_file`](crate::AnalyticsConfig::from_yaml_file).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Target bucket count for fixed-count trend chunking.
    pub bucket_count: usize,
    /// Top-K cutoff for the per-label word frequency tables.
    pub word_top_k: usize,
    /// Top-K cutoff for the global word cloud.
    pub cloud_top_k: usize,
    /// Engagement counters to average, by name.
    pub engagement_counters: Vec<String>,
    /// Number of most-recent records surfaced in the result.
    pub recent_window: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            word_top_k: DEFAULT_WORD_TOP_K,
            cloud_top_k: DEFAULT_CLOUD_TOP_K,
            engagement_counters: vec![
                "likes".to_string(),
                "replies".to_string(),
                "reposts".to_string(),
            ],
            recent_window: DEFAULT_RECENT_WINDOW,
        }
    }
}

impl AnalyticsConfig {
    /// Check the stated constraints on bucket and top-K sizes.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidConfig` if `bucket_count`,
    /// `word_top_k`, or `cloud_top_k` is zero.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.bucket_count == 0 {
            return Err(AnalyticsError::InvalidConfig(
                "bucket_count must be positive".to_string(),
            ));
        }
        if self.word_top_k == 0 {
            return Err(AnalyticsError::InvalidConfig(
                "word_top_k must be positive".to_string(),
            ));
        }
        if self.cloud_top_k == 0 {
            return Err(AnalyticsError::InvalidConfig(
                "cloud_top_k must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// One trend bucket: a calendar key like `2024-03` or a synthetic
/// `Period N`, with per-label counts seeded at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    pub key: String,
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl Period {
    #[must_use]
    pub fn new(key: String) -> Self {
        Self {
            key,
            positive: 0,
            neutral: 0,
            negative: 0,
        }
    }

    pub fn add(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    /// Number of records mapped to this period.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }
}

/// A token and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub token: String,
    pub count: u64,
}

/// Per-day engagement averages, one entry per configured counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngagementPeriod {
    pub period: String,
    pub averages: BTreeMap<String, u64>,
}

/// Overall label counts. Unseen labels are zero, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl SentimentDistribution {
    pub fn add(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }
}

/// Agreement between the upstream label and the ground-truth label, over
/// records that carry both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelAccuracy {
    pub correct: u64,
    pub incorrect: u64,
}

/// Earliest and latest timestamp seen across the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Top-K word frequency tables, one per known label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordFrequencyByLabel {
    pub positive: Vec<WordCount>,
    pub neutral: Vec<WordCount>,
    pub negative: Vec<WordCount>,
}

/// Everything one aggregation call produces. Created fresh per call and
/// owned by the caller; collections are empty-but-present when there is no
/// data, so consumers can degrade to a "no data available" view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsResult {
    pub sentiment_trend: Vec<Period>,
    pub sentiment_distribution: SentimentDistribution,
    pub engagement_trend: Vec<EngagementPeriod>,
    pub word_frequency_by_label: WordFrequencyByLabel,
    pub word_cloud: Vec<WordCount>,
    /// Most recent records, most recent first.
    pub recent_records: Vec<Record>,
    /// Overall per-counter mean, rounded to 2 decimals.
    pub engagement_averages: BTreeMap<String, f64>,
    pub label_accuracy: LabelAccuracy,
    pub time_range: Option<TimeRange>,
    pub total_records: u64,
    pub dropped_records: u64,
}
