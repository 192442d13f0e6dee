use clap::Args;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct ReportParams {
    /// Output format: table | json
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,

    /// Decimal places shown for per-trick scores in tables
    #[arg(long, default_value_t = 2)]
    pub precision: usize,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 2,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct BatchParams {
    /// Field delimiter of the signature file (single character, `\t` for tabs)
    #[arg(long, default_value = ",")]
    pub delimiter: String,

    #[arg(long, default_value_t = false)]
    pub has_headers: bool,

    /// Zero-based column holding the signature
    #[arg(long, default_value_t = 0)]
    pub column: usize,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            has_headers: false,
            column: 0,
        }
    }
}

impl BatchParams {
    pub fn delimiter_byte(&self) -> Result<u8, String> {
        match self.delimiter.as_str() {
            "\\t" | "\t" => Ok(b'\t'),
            s if s.len() == 1 => Ok(s.as_bytes()[0]),
            s => Err(format!("--delimiter must be a single byte, got '{}'", s)),
        }
    }
}
