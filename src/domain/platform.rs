// Platform series domain model
use crate::domain::sample::IndexSample;

/// A single platform's index history plus the statistics derived from it.
///
/// The samples are always sorted ascending by date and hold at most one
/// sample per date. Statistics are fixed at construction time so they stay
/// consistent with the samples no matter how the series is later displayed.
#[derive(Debug, Clone)]
pub struct PlatformSeries {
    pub name: String,
    pub color: String,
    pub samples: Vec<IndexSample>,
    pub avg_score: f64,
    pub max_score: f64,
    pub min_score: f64,
}

impl PlatformSeries {
    /// Builds a series from samples in any order. Sorting is stable and
    /// duplicate dates collapse to the first sample seen, matching how the
    /// chart resolves a date lookup. An empty series keeps every statistic
    /// at zero rather than failing.
    pub fn from_samples(name: String, color: String, mut samples: Vec<IndexSample>) -> Self {
        samples.sort_by_key(|sample| sample.date);
        samples.dedup_by_key(|sample| sample.date);

        let (avg_score, max_score, min_score) = if samples.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let total: f64 = samples.iter().map(|sample| sample.score).sum();
            let avg = (total / samples.len() as f64).round();
            let max = samples
                .iter()
                .map(|sample| sample.score)
                .fold(f64::NEG_INFINITY, f64::max);
            let min = samples
                .iter()
                .map(|sample| sample.score)
                .fold(f64::INFINITY, f64::min);
            (avg, max, min)
        };

        Self {
            name,
            color,
            samples,
            avg_score,
            max_score,
            min_score,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
