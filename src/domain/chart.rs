// Chart-oriented domain models
use std::collections::HashMap;

use chrono::NaiveDate;

/// One row of the aligned chart table. Every configured platform name is
/// present as a key; a platform without a sample on this date carries 0.0.
/// That zero is a display placeholder, the per-platform series remains the
/// source of truth for which days were actually observed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub date: NaiveDate,
    pub scores: HashMap<String, f64>,
}

/// Quick-select time windows offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    All,
    LastMonth,
    Last3Months,
    Last6Months,
}

impl TimeWindow {
    /// Window length in days, using the fixed 30-day month the dashboard
    /// has always used. `None` means no cutoff at all.
    pub fn days(&self) -> Option<i64> {
        match self {
            TimeWindow::All => None,
            TimeWindow::LastMonth => Some(30),
            TimeWindow::Last3Months => Some(90),
            TimeWindow::Last6Months => Some(180),
        }
    }
}

/// Padded y-axis bounds for rendering a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub low: f64,
    pub high: f64,
}

impl AxisRange {
    /// Bounds used when there is no data to measure.
    pub const DEFAULT: AxisRange = AxisRange {
        low: 0.0,
        high: 100.0,
    };
}
