// Analyzer module: delta helpers plus the trend and overhead analyses built on them.

pub mod deltas;
pub mod overhead;
pub mod trend;

use crate::model::{ReportSection, Result};

pub use overhead::OverheadAnalyzer;
pub use trend::TrendAnalyzer;

/// Turns parsed rows into the report lines of one section.
/// Implementations are pure; writing the section is left to a `ReportSink`.
pub trait Analyzer {
    type Record;

    fn analyze(&self, records: &[Self::Record]) -> Result<ReportSection>;
}
