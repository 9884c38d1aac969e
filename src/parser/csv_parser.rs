// CSV parsing for the simulation exports
use crate::model::{DailyRecord, OverheadRecord, ReportError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

pub trait RowParser {
    type Row;

    /// Parses every data row; the header row is skipped. `source` names the input in errors.
    fn parse<R: Read>(&self, source: &str, reader: R) -> Result<Vec<Self::Row>>;

    /// Opens and parses a file. A file that does not exist is reported as `MissingFile`.
    fn load(&self, path: &Path) -> Result<Vec<Self::Row>> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReportError::MissingFile {
                path: path.to_path_buf(),
            },
            _ => ReportError::Io(e),
        })?;
        let rows = self.parse(&path.display().to_string(), file)?;
        debug!("Parsed {} row(s) from {}", rows.len(), path.display());
        Ok(rows)
    }
}

/// Reads `day,value` pairs from column 0 and a configurable value column.
pub struct DailyRecordParser {
    value_column: usize,
}

impl DailyRecordParser {
    pub fn new(value_column: usize) -> Self {
        Self { value_column }
    }
}

impl RowParser for DailyRecordParser {
    type Row = DailyRecord;

    fn parse<R: Read>(&self, source: &str, reader: R) -> Result<Vec<DailyRecord>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut records: Vec<DailyRecord> = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let line = line_of(&row);
            let day: i64 = field(source, &row, line, 0)?;
            let value: i64 = field(source, &row, line, self.value_column)?;

            if let Some(previous) = records.last() {
                if day <= previous.day {
                    return Err(ReportError::DayOrder {
                        source_name: source.to_string(),
                        line,
                        previous: previous.day,
                        day,
                    });
                }
            }
            records.push(DailyRecord { day, value });
        }
        Ok(records)
    }
}

/// Reads `category,percentage` rows.
pub struct OverheadParser;

impl OverheadParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OverheadParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RowParser for OverheadParser {
    type Row = OverheadRecord;

    fn parse<R: Read>(&self, source: &str, reader: R) -> Result<Vec<OverheadRecord>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let line = line_of(&row);
            let category = raw_field(source, &row, line, 0)?.to_string();
            let percentage: f64 = field(source, &row, line, 1)?;
            if !percentage.is_finite() {
                return Err(malformed(source, line, 1, &row[1], "percentage must be finite"));
            }
            records.push(OverheadRecord {
                category,
                percentage,
            });
        }
        Ok(records)
    }
}

fn line_of(row: &StringRecord) -> u64 {
    row.position().map(|p| p.line()).unwrap_or(0)
}

fn malformed(source: &str, line: u64, column: usize, value: &str, reason: &str) -> ReportError {
    ReportError::MalformedRow {
        source_name: source.to_string(),
        line,
        column,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn raw_field<'r>(source: &str, row: &'r StringRecord, line: u64, column: usize) -> Result<&'r str> {
    row.get(column)
        .ok_or_else(|| malformed(source, line, column, "", "missing column"))
}

fn field<T>(source: &str, row: &StringRecord, line: u64, column: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = raw_field(source, row, line, column)?;
    raw.trim()
        .parse()
        .map_err(|e: T::Err| malformed(source, line, column, raw, &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_cash_column() {
        let input = "Day,Cash On Hand\n1,1000\n2,1100\n3, 1050\n";
        let records = DailyRecordParser::new(1).parse("coh", input.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![
                DailyRecord { day: 1, value: 1000 },
                DailyRecord { day: 2, value: 1100 },
                DailyRecord { day: 3, value: 1050 },
            ]
        );
    }

    #[test]
    fn reads_net_profit_column() {
        let input = "Day,Sales,Trading Profit,Operating Expense,Net Profit\n\
                     10,900,300,200,100\n\
                     11,950,310,190,-120\n";
        let records = DailyRecordParser::new(4).parse("pnl", input.as_bytes()).unwrap();
        assert_eq!(records[0], DailyRecord { day: 10, value: 100 });
        assert_eq!(records[1], DailyRecord { day: 11, value: -120 });
    }

    #[test]
    fn header_only_gives_no_rows() {
        let records = DailyRecordParser::new(1).parse("coh", "Day,Cash\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn non_numeric_value_is_malformed() {
        let input = "Day,Cash\n1,100\n2,abc\n";
        let err = DailyRecordParser::new(1).parse("coh", input.as_bytes()).unwrap_err();
        match err {
            ReportError::MalformedRow { line, column, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn short_row_is_malformed() {
        let input = "Day,Sales,Trading Profit,Operating Expense,Net Profit\n1,2\n";
        let err = DailyRecordParser::new(4).parse("pnl", input.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::MalformedRow { column: 4, .. }));
    }

    #[test]
    fn days_must_increase() {
        let input = "Day,Cash\n1,100\n3,200\n2,300\n";
        let err = DailyRecordParser::new(1).parse("coh", input.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::DayOrder { previous: 3, day: 2, .. }));
    }

    #[test]
    fn reads_overheads() {
        let input = "Category,Overheads\nSalary Expense,33.5\nRental Expense,12\n";
        let records = OverheadParser::new().parse("overheads", input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, "Salary Expense");
        assert_eq!(records[1].percentage, 12.0);
    }

    #[test]
    fn default_overhead_parser_reads_rows() {
        let input = "Category,Overheads\nShipping Expense,0.5\n";
        let records = OverheadParser::default().parse("overheads", input.as_bytes()).unwrap();
        assert_eq!(records[0].category, "Shipping Expense");
    }

    #[test]
    fn non_finite_percentage_is_malformed() {
        let input = "Category,Overheads\nSalary Expense,NaN\n";
        let err = OverheadParser::new().parse("overheads", input.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::MalformedRow { column: 1, .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cash-on-Hand.csv");
        let err = DailyRecordParser::new(1).load(&path).unwrap_err();
        assert!(matches!(err, ReportError::MissingFile { path: p } if p == path));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Category,Overheads").unwrap();
        writeln!(file, "Penalty Expense,1.25").unwrap();

        let records = OverheadParser::new().load(file.path()).unwrap();
        assert_eq!(records[0].percentage, 1.25);
    }
}
