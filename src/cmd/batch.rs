use crate::reports;
use bike_tricks::api;
use bike_tricks::batch::load_signatures_from_file;
use bike_tricks::config::{BatchParams, OutputFormat, ReportParams};
use bike_tricks::error::BsResult;
use clap::Args;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub report: ReportParams,

    #[command(flatten)]
    pub batch: BatchParams,

    /// Delimited file with one signature per row
    #[arg(short, long)]
    pub file: String,
}

pub fn run(args: BatchArgs) -> BsResult<()> {
    info!("Loading signatures from: {}", args.file);
    let signatures = load_signatures_from_file(&args.file, &args.batch)?;

    let start = Instant::now();
    let entries = api::score_batch(&signatures);
    info!(
        "Scored {} signatures in {:.2?}",
        entries.len(),
        start.elapsed()
    );

    match args.report.format {
        OutputFormat::Table => reports::print_batch_summary(&entries),
        OutputFormat::Json => {
            for entry in &entries {
                println!("{}", serde_json::to_string(entry)?);
            }
        }
    }

    Ok(())
}
