use crate::config::BatchParams;
use crate::error::{BikeShopError, BsResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Reads one signature per record from delimited text.
///
/// Rows that are short or blank in the signature column are skipped with a
/// warning. Malformed CSV (e.g. invalid UTF-8) fails the whole load.
pub fn load_signatures<R: Read>(reader: R, params: &BatchParams) -> BsResult<Vec<String>> {
    let delimiter = params
        .delimiter_byte()
        .map_err(BikeShopError::Config)?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(params.has_headers)
        .flexible(true)
        .from_reader(reader);

    let mut signatures = Vec::new();
    let mut skipped_count = 0;

    for result in rdr.records() {
        let rec = result?;
        match rec.get(params.column).map(str::trim) {
            Some(sig) if !sig.is_empty() => signatures.push(sig.to_string()),
            _ => skipped_count += 1,
        }
    }

    if skipped_count > 0 {
        warn!("Skipped {} rows without a signature.", skipped_count);
    }
    debug!("Loaded {} signatures.", signatures.len());

    Ok(signatures)
}

pub fn load_signatures_from_file<P: AsRef<Path>>(
    path: P,
    params: &BatchParams,
) -> BsResult<Vec<String>> {
    let file = File::open(path)?;
    load_signatures(file, params)
}
