use thiserror::Error;

/// Fatal failures of the aggregation entry point.
///
/// Malformed individual records are never errors; the normalizer drops or
/// degrades them and the result carries a dropped count instead.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Failures while loading an analytics configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}
