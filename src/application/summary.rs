// Summary service - aggregate figures for the dashboard header
use std::collections::BTreeSet;

use crate::domain::dataset::{DateRange, IndexDataSet};

/// Headline figures shown above the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSummary {
    pub platform_count: usize,
    pub total_samples: usize,
    pub date_range: Option<DateRange>,
    pub avg_score_overall: f64,
}

/// Rolls the per-platform statistics up into one summary. The overall
/// average is the mean of the platform averages (not of every sample),
/// rounded to the nearest integer like the per-platform figures.
pub fn summarize(data_set: &IndexDataSet) -> DataSummary {
    let platform_count = data_set.platforms.len();
    let avg_score_overall = if platform_count > 0 {
        let total: f64 = data_set.platforms.iter().map(|p| p.avg_score).sum();
        (total / platform_count as f64).round()
    } else {
        0.0
    };

    DataSummary {
        platform_count,
        total_samples: data_set.total_samples(),
        date_range: data_set.date_range.clone(),
        avg_score_overall,
    }
}

/// Formats a score for compact display: values from 10 000 up are shown in
/// units of 万 (ten thousand), rounded to a whole number.
pub fn format_score(score: f64) -> String {
    if score >= 10_000.0 {
        format!("{}万", (score / 10_000.0).round())
    } else {
        score.to_string()
    }
}

/// Distinct `YYYY-MM` labels across the whole data set, ascending. Used for
/// the x-axis when the chart is zoomed out to month granularity.
pub fn monthly_labels(data_set: &IndexDataSet) -> Vec<String> {
    let months: BTreeSet<String> = data_set
        .platforms
        .iter()
        .flat_map(|platform| platform.samples.iter())
        .map(|sample| sample.date.format("%Y-%m").to_string())
        .collect();

    months.into_iter().collect()
}
