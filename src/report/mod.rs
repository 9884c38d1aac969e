pub mod sink;

use crate::model::{ReportSection, Result};
use tracing::{debug, info};

pub use sink::{FileReportSink, ReportSink, WriteMode};
#[cfg(test)]
pub use sink::MemoryReportSink;

/// Writes sections in the given order. The first one overwrites the artifact,
/// the rest are appended after it.
pub fn write_report(sections: &[ReportSection], sink: &mut dyn ReportSink) -> Result<()> {
    for (i, section) in sections.iter().enumerate() {
        let mode = if i == 0 {
            WriteMode::Overwrite
        } else {
            WriteMode::Append
        };
        if section.is_empty() {
            debug!("{} section has no lines", section.name);
        }
        info!("Writing {} section ({} line(s))", section.name, section.lines.len());
        sink.write(&section.lines, mode)?;
    }
    Ok(())
}
