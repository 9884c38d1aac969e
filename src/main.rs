mod analyzer;
mod config;
mod model;
mod parser;
mod pipeline;
mod report;
mod utils;

use config::{config_path, load_config};
use report::FileReportSink;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file
    let path = config_path();
    let config = match load_config(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let mut sink = FileReportSink::new(&config.report_path);
    info!("Writing summary report to {}", sink.path().display());

    if let Err(e) = pipeline::run(&config, &mut sink).await {
        error!("Report failed: {}", e);
        std::process::exit(1);
    }
}
