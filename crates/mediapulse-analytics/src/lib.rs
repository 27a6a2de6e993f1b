//! Analytics aggregation engine for MediaPulse dashboards.
//!
//! Consumes a collection of pre-labeled social/media records and computes
//! everything the dashboard views display: a time-bucketed sentiment trend,
//! the overall sentiment distribution, per-day engagement averages,
//! per-sentiment word frequency tables, and a global word cloud. One pure
//! call, no retained state; each dashboard view is a thin consumer of
//! [`aggregate`].

pub mod aggregate;
pub mod buckets;
pub mod error;
pub mod normalize;
pub mod rank;
pub mod tokenize;
pub mod types;

mod config;

pub use aggregate::aggregate;
pub use error::{AnalyticsError, ConfigError};
pub use normalize::{normalize, normalize_all};
pub use rank::FrequencyCounter;
pub use tokenize::tokenize;
pub use types::{
    AnalyticsConfig, AnalyticsResult, EngagementPeriod, LabelAccuracy, Period,
    SentimentDistribution, TimeRange, WordCount, WordFrequencyByLabel,
};
