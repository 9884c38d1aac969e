use crate::analyzer::{Analyzer, OverheadAnalyzer, TrendAnalyzer};
use crate::config::{AppConfig, MetricConfig};
use crate::model::{ReportSection, Result};
use crate::parser::{DailyRecordParser, OverheadParser, RowParser};
use crate::report::{write_report, ReportSink};
use futures::future::join_all;
use std::path::PathBuf;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::info;

/// Loads and analyzes the overhead, cash-on-hand and profit-and-loss inputs concurrently.
/// Sections come back in that fixed order regardless of which analysis finishes first.
pub async fn build_sections(config: &AppConfig) -> Result<Vec<ReportSection>> {
    let tasks = vec![
        overhead_task(config.overheads.clone()),
        trend_task(config.cash_on_hand.clone(), config.currency.clone()),
        trend_task(config.profit_and_loss.clone(), config.currency.clone()),
    ];

    let mut sections = Vec::with_capacity(tasks.len());
    for joined in join_all(tasks).await {
        sections.push(joined??);
    }
    Ok(sections)
}

/// Builds every section first, then writes them, so a failing input leaves the report untouched.
pub async fn run(config: &AppConfig, sink: &mut dyn ReportSink) -> Result<()> {
    let sections = build_sections(config).await?;
    write_report(&sections, sink)?;
    info!("Report complete: {} section(s)", sections.len());
    Ok(())
}

fn overhead_task(path: PathBuf) -> JoinHandle<Result<ReportSection>> {
    spawn_blocking(move || {
        info!("Analyzing overheads from {}", path.display());
        let records = OverheadParser::new().load(&path)?;
        OverheadAnalyzer::new().analyze(&records)
    })
}

fn trend_task(metric: MetricConfig, currency: String) -> JoinHandle<Result<ReportSection>> {
    spawn_blocking(move || {
        info!("Analyzing {} from {}", metric.field_name, metric.path.display());
        let records = DailyRecordParser::new(metric.value_column).load(&metric.path)?;
        TrendAnalyzer::from_config(&metric, &currency).analyze(&records)
    })
}
