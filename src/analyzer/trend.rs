use crate::analyzer::deltas::{classify, compute_deltas, deficits, top_deficits};
use crate::analyzer::Analyzer;
use crate::config::MetricConfig;
use crate::model::{DailyDelta, DailyRecord, ReportSection, Result, Trend};
use crate::utils::{format_amount, RANK_LABELS};
use tracing::{debug, info, warn};

/// Trend analyzer shared by the cash-on-hand and profit-and-loss reports.
/// Only the labels differ between the two; the algorithm is the same.
pub struct TrendAnalyzer {
    label: String,
    field_name: String,
    currency: String,
}

impl TrendAnalyzer {
    pub fn new(label: impl Into<String>, field_name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field_name: field_name.into(),
            currency: currency.into(),
        }
    }

    pub fn from_config(metric: &MetricConfig, currency: &str) -> Self {
        Self::new(metric.label.clone(), metric.field_name.clone(), currency)
    }

    fn day_line(&self, tag: &str, day: i64, amount: impl std::fmt::Display) -> String {
        format!(
            "[{}] DAY: {}, AMOUNT: {}",
            tag,
            day,
            format_amount(&self.currency, amount)
        )
    }

    fn surplus(&self, deltas: &[DailyDelta], section: &mut ReportSection) {
        // first occurrence wins on ties
        let Some(highest) = deltas
            .iter()
            .copied()
            .reduce(|best, d| if d.amount > best.amount { d } else { best })
        else {
            return;
        };
        section.push(format!(
            "[{} SURPLUS] {} ON EACH DAY IS HIGHER THAN THE PREVIOUS DAY",
            self.label, self.field_name
        ));
        section.push(self.day_line(
            &format!("HIGHEST {} SURPLUS", self.label),
            highest.day,
            highest.amount,
        ));
    }

    fn deficit(&self, deltas: &[DailyDelta], section: &mut ReportSection) {
        // min_by_key returns the first minimum
        let Some(lowest) = deltas.iter().min_by_key(|d| d.amount) else {
            return;
        };
        section.push(format!(
            "[{} DEFICIT] {} ON EACH DAY IS LOWER THAN THE PREVIOUS DAY",
            self.label, self.field_name
        ));
        section.push(self.day_line(
            &format!("HIGHEST {} DEFICIT", self.label),
            lowest.day,
            lowest.amount.unsigned_abs(),
        ));
    }

    fn fluctuating(&self, deltas: &[DailyDelta], section: &mut ReportSection) {
        let found = deficits(deltas);
        debug!("{}: {} deficit day(s)", self.label, found.len());

        let tag = format!("{} DEFICIT", self.label);
        for d in &found {
            section.push(self.day_line(&tag, d.day, d.amount));
        }
        for (rank, d) in RANK_LABELS.iter().zip(top_deficits(&found, RANK_LABELS.len())) {
            section.push(self.day_line(&format!("{} {}", rank, tag), d.day, d.amount));
        }
    }
}

impl Analyzer for TrendAnalyzer {
    type Record = DailyRecord;

    fn analyze(&self, records: &[DailyRecord]) -> Result<ReportSection> {
        let deltas = compute_deltas(records)?;
        let trend = classify(&deltas);
        info!("{} trend over {} record(s): {:?}", self.label, records.len(), trend);

        let mut section = ReportSection::new(self.label.clone());
        if deltas.is_empty() {
            warn!(
                "{}: {} record(s) give no day-over-day change, section left empty",
                self.label,
                records.len()
            );
            return Ok(section);
        }

        match trend {
            Trend::Increasing => self.surplus(&deltas, &mut section),
            Trend::Decreasing => self.deficit(&deltas, &mut section),
            Trend::Fluctuating => self.fluctuating(&deltas, &mut section),
        }
        Ok(section)
    }
}
