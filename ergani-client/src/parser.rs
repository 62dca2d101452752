//! Response decoding for the Ergani API

use crate::error::{ApiFailure, ErganiError};
use crate::models::SubmissionReceipt;
use chrono::NaiveDateTime;
use reqwest::StatusCode;
use serde::Deserialize;

/// Format of `submitDate` in receipts (`DD/MM/YYYY HH:MM`)
pub const SUBMIT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Deserialize)]
struct RawReceipt {
    #[serde(default)]
    id: String,
    #[serde(default)]
    protocol: String,
    #[serde(rename = "submitDate", default)]
    submit_date: String,
}

impl RawReceipt {
    fn into_receipt(self) -> Result<SubmissionReceipt, ErganiError> {
        Ok(SubmissionReceipt {
            submitted_at: parse_submit_date(&self.submit_date)?,
            id: self.id,
            protocol: self.protocol,
        })
    }
}

#[derive(Deserialize)]
struct AuthBody {
    #[serde(rename = "accessToken", default)]
    access_token: Option<String>,
}

/// Message-carrying fields of an error body
#[derive(Deserialize, Default)]
#[serde(default)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    detail: Option<String>,
}

/// Parse a receipt timestamp
pub fn parse_submit_date(raw: &str) -> Result<NaiveDateTime, ErganiError> {
    NaiveDateTime::parse_from_str(raw, SUBMIT_DATE_FORMAT).map_err(|e| ErganiError::Decode {
        message: format!("invalid submission date: {}", e),
        raw: raw.to_string(),
    })
}

/// Decode the body of a successful submission
///
/// An empty body (as sent with 204 No Content) decodes to no receipts.
pub fn parse_receipts(body: &[u8]) -> Result<Vec<SubmissionReceipt>, ErganiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let raw: Vec<RawReceipt> = serde_json::from_slice(body).map_err(|e| ErganiError::Decode {
        message: e.to_string(),
        raw: String::from_utf8_lossy(body).into_owned(),
    })?;

    raw.into_iter().map(RawReceipt::into_receipt).collect()
}

/// Extract the access token from a 200 authentication response
///
/// A body without a non-empty `accessToken` is an [`ErganiError::Auth`].
pub fn parse_access_token(body: &[u8]) -> Result<String, ErganiError> {
    let parsed: AuthBody = serde_json::from_slice(body).map_err(|e| ErganiError::Decode {
        message: format!("invalid authentication response: {}", e),
        raw: String::from_utf8_lossy(body).into_owned(),
    })?;

    match parsed.access_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ErganiError::Auth(
            "authentication succeeded but no token was returned".to_string(),
        )),
    }
}

/// Build the failure for a non-success response
///
/// The message comes from the first non-empty of `message`, `msg`, `detail`;
/// when none is present, or the body is not JSON, the whole body is used.
pub fn api_failure(status: StatusCode, body: &[u8]) -> ApiFailure {
    let raw = String::from_utf8_lossy(body).into_owned();

    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| {
            [parsed.message, parsed.msg, parsed.detail]
                .into_iter()
                .flatten()
                .find(|m| !m.is_empty())
        })
        .unwrap_or_else(|| raw.clone());

    ApiFailure {
        status,
        message,
        body: raw,
    }
}
