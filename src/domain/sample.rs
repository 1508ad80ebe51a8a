// Daily index sample domain model
use chrono::NaiveDate;

/// One observation of a platform's index: a calendar day and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexSample {
    pub date: NaiveDate,
    pub score: f64,
}

impl IndexSample {
    pub fn new(date: NaiveDate, score: f64) -> Self {
        Self { date, score }
    }
}
