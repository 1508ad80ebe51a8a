// Parsed data set domain model
use chrono::NaiveDate;

use crate::domain::platform::PlatformSeries;

/// Inclusive span of calendar days covered by a data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Everything extracted from one raw export: the configured platforms in
/// configuration order and the date range their samples span. The range is
/// `None` when no platform carries any sample.
#[derive(Debug, Clone)]
pub struct IndexDataSet {
    pub platforms: Vec<PlatformSeries>,
    pub date_range: Option<DateRange>,
}

impl IndexDataSet {
    pub fn new(platforms: Vec<PlatformSeries>) -> Self {
        let date_range = compute_date_range(&platforms);
        Self {
            platforms,
            date_range,
        }
    }

    pub fn total_samples(&self) -> usize {
        self.platforms.iter().map(|p| p.samples.len()).sum()
    }
}

fn compute_date_range(platforms: &[PlatformSeries]) -> Option<DateRange> {
    let mut range: Option<DateRange> = None;
    for platform in platforms {
        // Samples are sorted, so first and last bound the platform.
        if let (Some(first), Some(last)) = (platform.samples.first(), platform.samples.last()) {
            range = Some(match range {
                None => DateRange {
                    start: first.date,
                    end: last.date,
                },
                Some(current) => DateRange {
                    start: current.start.min(first.date),
                    end: current.end.max(last.date),
                },
            });
        }
    }
    range
}
