use crate::analyzer::Analyzer;
use crate::model::{OverheadRecord, ReportError, ReportSection, Result};
use crate::utils::format_percentage;
use tracing::info;

/// Finds the overhead category with the largest share.
pub struct OverheadAnalyzer;

impl OverheadAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// First record with the highest percentage.
    pub fn highest(records: &[OverheadRecord]) -> Option<&OverheadRecord> {
        records
            .iter()
            .reduce(|best, r| if r.percentage > best.percentage { r } else { best })
    }
}

impl Default for OverheadAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for OverheadAnalyzer {
    type Record = OverheadRecord;

    fn analyze(&self, records: &[OverheadRecord]) -> Result<ReportSection> {
        let highest = Self::highest(records)
            .ok_or_else(|| ReportError::EmptyInput("overheads".into()))?;
        info!(
            "Highest overhead among {} categories: {} ({}%)",
            records.len(),
            highest.category,
            highest.percentage
        );

        let mut section = ReportSection::new("OVERHEAD");
        section.push(format!(
            "[HIGHEST OVERHEAD] {}: {}%",
            highest.category.to_uppercase(),
            format_percentage(highest.percentage)
        ));
        Ok(section)
    }
}
