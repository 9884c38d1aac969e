// report/sink.rs

use crate::model::Result;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the artifact, discarding any previous content.
    Overwrite,
    /// Create the artifact if needed and add to the end.
    Append,
}

/// Destination of the formatted report lines.
pub trait ReportSink {
    fn write(&mut self, lines: &[String], mode: WriteMode) -> Result<()>;
}

/// Writes the report to a text file, one line per entry.
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileReportSink {
    fn write(&mut self, lines: &[String], mode: WriteMode) -> Result<()> {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Overwrite => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        let file = options.open(&self.path)?;

        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        debug!("{:?} {} line(s) to {}", mode, lines.len(), self.path.display());
        Ok(())
    }
}

/// Keeps the report in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryReportSink {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl MemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.lines.iter().map(|l| format!("{}\n", l)).collect()
    }
}

#[cfg(test)]
impl ReportSink for MemoryReportSink {
    fn write(&mut self, lines: &[String], mode: WriteMode) -> Result<()> {
        if mode == WriteMode::Overwrite {
            self.lines.clear();
        }
        self.lines.extend_from_slice(lines);
        Ok(())
    }
}
