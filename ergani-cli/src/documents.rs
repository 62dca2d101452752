//! Loading batch files and dispatching them by document kind

use crate::cli::DocumentArg;
use crate::error::CliError;
use ergani_client::{
    CompanyDailyScheduleBatch, CompanyOvertimeBatch, CompanyWeeklyScheduleBatch,
    CompanyWorkCardBatch, Document, ErganiClient, SubmissionReceipt, encode_document,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a JSON array of batches
pub fn read_batches<D: DeserializeOwned>(path: &Path) -> Result<Vec<D>, CliError> {
    let content = fs::read_to_string(path)?;
    let batches: Vec<D> = serde_json::from_str(&content).map_err(|source| CliError::BatchFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), batches = batches.len(), "loaded batch file");
    Ok(batches)
}

fn encode_as<D: Document + DeserializeOwned>(path: &Path) -> Result<Value, CliError> {
    let batches = read_batches::<D>(path)?;
    Ok(encode_document(batches.as_slice()))
}

fn submit_as<D: Document + DeserializeOwned>(
    client: &mut ErganiClient,
    path: &Path,
) -> Result<Vec<SubmissionReceipt>, CliError> {
    let batches = read_batches::<D>(path)?;
    Ok(client.submit(batches.as_slice())?)
}

/// Encode a batch file into its wire payload
pub fn encode_file(kind: DocumentArg, path: &Path) -> Result<Value, CliError> {
    match kind {
        DocumentArg::WorkCard => encode_as::<CompanyWorkCardBatch>(path),
        DocumentArg::Overtime => encode_as::<CompanyOvertimeBatch>(path),
        DocumentArg::DailySchedule => encode_as::<CompanyDailyScheduleBatch>(path),
        DocumentArg::WeeklySchedule => encode_as::<CompanyWeeklyScheduleBatch>(path),
    }
}

/// Load and submit a batch file
pub fn submit_file(
    client: &mut ErganiClient,
    kind: DocumentArg,
    path: &Path,
) -> Result<Vec<SubmissionReceipt>, CliError> {
    match kind {
        DocumentArg::WorkCard => submit_as::<CompanyWorkCardBatch>(client, path),
        DocumentArg::Overtime => submit_as::<CompanyOvertimeBatch>(client, path),
        DocumentArg::DailySchedule => submit_as::<CompanyDailyScheduleBatch>(client, path),
        DocumentArg::WeeklySchedule => submit_as::<CompanyWeeklyScheduleBatch>(client, path),
    }
}
