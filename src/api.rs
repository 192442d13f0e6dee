use crate::error::{BikeShopError, RideLogError, TrickError};
use crate::ride_log::RideLog;
use crate::tricks::TrickSequence;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

/// Failure handed back to the transport layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Trick(#[from] TrickError),

    #[error("{0}")]
    RideLog(#[from] RideLogError),
}

impl ServiceError {
    /// HTTP-style status for the failure. All failures are caller input.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Trick(_) | Self::RideLog(_) => 400,
        }
    }
}

impl From<ServiceError> for BikeShopError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Trick(t) => Self::Trick(t),
            ServiceError::RideLog(r) => Self::RideLog(r),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<TrickSequence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.sequence.is_some()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RideLogView {
    pub date: NaiveDate,
    pub start_location: String,
    pub end_location: String,
    pub route_name: String,
    pub signature: String,
    pub summary: String,
}

impl From<RideLog> for RideLogView {
    fn from(log: RideLog) -> Self {
        let signature = log.to_signature();
        let summary = log.to_string();
        Self {
            date: log.date,
            start_location: log.start_location,
            end_location: log.end_location,
            route_name: log.route_name,
            signature,
            summary,
        }
    }
}

/// Service: score a single trick signature.
pub fn score_signature(signature: &str) -> Result<TrickSequence, ServiceError> {
    let seq = TrickSequence::parse(signature)?;
    info!(
        "API: '{}' -> {} tricks, difficulty {}",
        signature,
        seq.len(),
        seq.difficulty()
    );
    Ok(seq)
}

/// Service: score many signatures in parallel. Output order follows input
/// order and a failing signature does not affect the others.
pub fn score_batch(signatures: &[String]) -> Vec<BatchEntry> {
    let entries: Vec<BatchEntry> = signatures
        .par_iter()
        .map(|sig| match TrickSequence::parse(sig) {
            Ok(seq) => BatchEntry {
                signature: sig.clone(),
                sequence: Some(seq),
                error: None,
            },
            Err(e) => BatchEntry {
                signature: sig.clone(),
                sequence: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    if failed > 0 {
        warn!("API: {} of {} signatures failed.", failed, entries.len());
    }
    entries
}

/// Service: decode a ride log signature.
pub fn decode_ride_log(signature: &str) -> Result<RideLogView, ServiceError> {
    let log = RideLog::parse(signature)?;
    Ok(log.into())
}
