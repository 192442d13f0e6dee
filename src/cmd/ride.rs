use crate::reports;
use bike_tricks::api;
use bike_tricks::config::OutputFormat;
use bike_tricks::error::BsResult;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct RideArgs {
    /// Output format: table | json
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,

    /// Ride log signature, DDMMYYYY-START-END-ROUTE
    pub signature: String,
}

pub fn run(args: RideArgs) -> BsResult<()> {
    let view = api::decode_ride_log(&args.signature)?;

    match args.format {
        OutputFormat::Table => reports::print_ride_log(&view),
        OutputFormat::Json => println!("{}", serde_json::to_string(&view)?),
    }

    Ok(())
}
