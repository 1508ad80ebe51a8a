// Chart data building - aligning, windowing, and axis scaling
use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::domain::chart::{AxisRange, ChartRow, TimeWindow};
use crate::domain::dataset::IndexDataSet;

/// Merges every platform's samples onto one shared date axis, ascending.
/// Each row carries a score for every platform in the set; platforms without
/// a sample on a date contribute 0.0 so multi-line charts stay continuous.
pub fn align_rows(data_set: &IndexDataSet) -> Vec<ChartRow> {
    // Index each platform by date up front so row assembly is one lookup
    // per platform instead of a scan per date.
    let mut indexed: Vec<(&str, HashMap<NaiveDate, f64>)> =
        Vec::with_capacity(data_set.platforms.len());
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();

    for platform in &data_set.platforms {
        let mut by_date = HashMap::with_capacity(platform.samples.len());
        for sample in &platform.samples {
            by_date.insert(sample.date, sample.score);
            dates.insert(sample.date);
        }
        indexed.push((platform.name.as_str(), by_date));
    }

    let mut rows = Vec::with_capacity(dates.len());
    for date in dates {
        let mut scores = HashMap::with_capacity(indexed.len());
        for (name, by_date) in &indexed {
            scores.insert(
                (*name).to_string(),
                by_date.get(&date).copied().unwrap_or(0.0),
            );
        }
        rows.push(ChartRow { date, scores });
    }

    tracing::debug!(
        "Aligned {} dates across {} platforms",
        rows.len(),
        data_set.platforms.len()
    );
    rows
}

/// Keeps the rows inside the selected window, counting back from
/// `reference`. The reference is explicit so output is reproducible; callers
/// rendering live pass `Utc::now()`.
pub fn filter_rows(
    rows: &[ChartRow],
    window: TimeWindow,
    reference: DateTime<Utc>,
) -> Vec<ChartRow> {
    let Some(days) = window.days() else {
        return rows.to_vec();
    };

    let cutoff = reference - Duration::days(days);
    rows.iter()
        .filter(|row| row.date.and_time(NaiveTime::MIN).and_utc() >= cutoff)
        .cloned()
        .collect()
}

/// Computes padded y-axis bounds over the named platforms' columns: 10% of
/// the value spread on each side, so lines never touch the chart frame.
pub fn y_axis_range(rows: &[ChartRow], selected: &[String]) -> AxisRange {
    let mut values = Vec::with_capacity(rows.len() * selected.len());
    for row in rows {
        for name in selected {
            values.push(row.scores.get(name).copied().unwrap_or(0.0));
        }
    }

    if values.is_empty() {
        return AxisRange::DEFAULT;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let padding = (max - min) * 0.1;

    AxisRange {
        low: min - padding,
        high: max + padding,
    }
}
