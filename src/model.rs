// Core structs: DailyRecord, DailyDelta, Trend, Deficit, OverheadRecord, ReportSection
use std::path::PathBuf;
use thiserror::Error;

/// One row of a daily metric export (cash-on-hand or profit-and-loss).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRecord {
    pub day: i64,
    pub value: i64,
}

/// Change of a metric between two consecutive records, attributed to the later day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyDelta {
    pub day: i64,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increasing,
    Decreasing,
    Fluctuating,
}

/// A negative delta, stored as its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deficit {
    pub day: i64,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverheadRecord {
    pub category: String,
    pub percentage: f64,
}

/// Formatted output of a single analysis, written to the report as one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSection {
    pub name: String,
    pub lines: Vec<String>,
}

impl ReportSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("input file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("{source_name}:{line}: column {column} value {value:?}: {reason}")]
    MalformedRow {
        source_name: String,
        line: u64,
        column: usize,
        value: String,
        reason: String,
    },

    #[error("{source_name}:{line}: day {day} does not follow day {previous}")]
    DayOrder {
        source_name: String,
        line: u64,
        previous: i64,
        day: i64,
    },

    #[error("no data rows in {0}")]
    EmptyInput(String),

    #[error("day-over-day change on day {day} does not fit in 64 bits")]
    Overflow { day: i64 },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("analysis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ReportError>;
