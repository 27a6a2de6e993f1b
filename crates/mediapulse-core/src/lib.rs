//! Shared data model for MediaPulse.
//!
//! Defines the raw record shape delivered by upstream sources (already
//! decoded and sentiment-labeled) and the canonical `Record` the analytics
//! engine works with.

pub mod record;

pub use record::{RawRecord, Record, SentimentLabel};
