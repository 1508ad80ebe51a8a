//! Data pipeline for the WeChat index dashboard.
//!
//! Takes the raw text a user saves from the index tool, digs out the embedded
//! JSON payload, and shapes it into per-platform series, aligned chart rows,
//! time-window slices, and y-axis bounds ready for rendering. Parsing is the
//! only fallible step; everything downstream is pure and deterministic.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use crate::application::chart_data::{align_rows, filter_rows, y_axis_range};
pub use crate::application::parse_service::{ParseService, validate_format};
pub use crate::application::summary::{DataSummary, format_score, monthly_labels, summarize};
pub use crate::domain::chart::{AxisRange, ChartRow, TimeWindow};
pub use crate::domain::dataset::{DateRange, IndexDataSet};
pub use crate::domain::platform::PlatformSeries;
pub use crate::domain::sample::IndexSample;
pub use crate::error::ParseError;
pub use crate::infrastructure::config::{PlatformMapping, PlatformProfiles, load_platform_profiles};
pub use crate::infrastructure::payload::PAYLOAD_MARKER;
