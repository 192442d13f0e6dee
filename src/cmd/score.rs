use crate::reports;
use bike_tricks::api;
use bike_tricks::config::{OutputFormat, ReportParams};
use bike_tricks::error::BsResult;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub report: ReportParams,

    /// One or more trick signatures, e.g. L4B-R3A-H2C
    #[arg(required = true)]
    pub signatures: Vec<String>,
}

pub fn run(args: ScoreArgs) -> BsResult<()> {
    info!("Scoring {} signature(s)", args.signatures.len());

    for signature in &args.signatures {
        let seq = api::score_signature(signature)?;

        match args.report.format {
            OutputFormat::Table => reports::print_sequence(signature, &seq, args.report.precision),
            OutputFormat::Json => println!("{}", serde_json::to_string(&seq)?),
        }
    }

    Ok(())
}
