//! Report command: decode a records file, run the aggregator once, render.

use std::path::Path;

use anyhow::Context;
use mediapulse_analytics::{aggregate, AnalyticsConfig, AnalyticsResult};
use mediapulse_core::RawRecord;

/// Maximum record text width in the recent-records table.
const TEXT_COLUMN_WIDTH: usize = 60;

pub(crate) fn run_report(
    input: &Path,
    config_path: Option<&Path>,
    as_json: bool,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read records file {}", input.display()))?;
    let records: Vec<RawRecord> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of records", input.display()))?;
    tracing::info!(records = records.len(), "loaded records file");

    let config = match config_path {
        Some(path) => AnalyticsConfig::from_yaml_file(path)?,
        None => AnalyticsConfig::default(),
    };

    let result = aggregate(&records, &config)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_text(&result);
    }
    Ok(())
}

fn render_text(result: &AnalyticsResult) {
    if result.total_records == 0 {
        println!("no data available ({} records dropped)", result.dropped_records);
        return;
    }

    println!(
        "records: {} analyzed, {} dropped",
        result.total_records, result.dropped_records
    );
    if let Some(range) = &result.time_range {
        println!(
            "time range: {} to {}",
            range.start.format("%Y-%m-%d"),
            range.end.format("%Y-%m-%d")
        );
    }

    let dist = &result.sentiment_distribution;
    println!();
    println!(
        "sentiment: {} positive, {} neutral, {} negative",
        dist.positive, dist.neutral, dist.negative
    );

    let accuracy = &result.label_accuracy;
    if accuracy.correct + accuracy.incorrect > 0 {
        println!(
            "label accuracy: {} correct, {} incorrect",
            accuracy.correct, accuracy.incorrect
        );
    }

    if !result.engagement_averages.is_empty() {
        let averages: Vec<String> = result
            .engagement_averages
            .iter()
            .map(|(name, mean)| format!("{mean:.2} {name}"))
            .collect();
        println!("avg engagement: {}", averages.join(", "));
    }

    if !result.sentiment_trend.is_empty() {
        println!();
        println!("{:<14}{:<10}{:<10}NEGATIVE", "PERIOD", "POSITIVE", "NEUTRAL");
        for period in &result.sentiment_trend {
            println!(
                "{:<14}{:<10}{:<10}{}",
                period.key, period.positive, period.neutral, period.negative
            );
        }
    }

    if !result.engagement_trend.is_empty() {
        println!();
        println!("ENGAGEMENT BY DAY");
        for day in &result.engagement_trend {
            let averages: Vec<String> = day
                .averages
                .iter()
                .map(|(name, mean)| format!("{mean} {name}"))
                .collect();
            println!("{:<14}{}", day.period, averages.join(", "));
        }
    }

    print_word_table("TOP WORDS (positive)", &result.word_frequency_by_label.positive);
    print_word_table("TOP WORDS (neutral)", &result.word_frequency_by_label.neutral);
    print_word_table("TOP WORDS (negative)", &result.word_frequency_by_label.negative);
    print_word_table("WORD CLOUD", &result.word_cloud);

    if !result.recent_records.is_empty() {
        println!();
        println!("{:<12}{:<11}TEXT", "DATE", "SENTIMENT");
        for record in &result.recent_records {
            let date = record
                .timestamp
                .map_or_else(|| "-".to_string(), |ts| ts.format("%Y-%m-%d").to_string());
            let label = record
                .label
                .map_or_else(|| "unknown".to_string(), |l| l.to_string());
            println!("{:<12}{:<11}{}", date, label, truncate(&record.text, TEXT_COLUMN_WIDTH));
        }
    }
}

fn print_word_table(title: &str, table: &[mediapulse_analytics::WordCount]) {
    if table.is_empty() {
        return;
    }
    let entries: Vec<String> = table
        .iter()
        .map(|wc| format!("{}({})", wc.token, wc.count))
        .collect();
    println!();
    println!("{title}: {}", entries.join(" "));
}

/// Truncate on a character boundary, appending an ellipsis when cut.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}
