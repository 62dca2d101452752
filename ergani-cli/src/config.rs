//! Configuration resolution from CLI args and environment

use crate::cli::Args;
use crate::error::CliError;
use ergani_client::ErganiClient;
use std::time::Duration;
use zeroize::Zeroizing;

const USERNAME_VAR: &str = "ERGANI_USERNAME";
const PASSWORD_VAR: &str = "ERGANI_PASSWORD";
const BASE_URL_VAR: &str = "ERGANI_BASE_URL";

/// Resolved runtime configuration
pub struct Config {
    /// Ergani username
    pub username: String,
    /// Password (zeroized on drop)
    pub password: Zeroizing<String>,
    /// API root override
    pub base_url: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Config {
    /// Build config from CLI args, prompting for the password if needed
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let username = pick(args.username.clone(), std::env::var(USERNAME_VAR).ok())
            .ok_or_else(|| {
                CliError::Config(format!("Username required: pass --username or set {}", USERNAME_VAR))
            })?;

        let password = match std::env::var(PASSWORD_VAR) {
            Ok(p) if !p.is_empty() => Zeroizing::new(p),
            _ => prompt_password(&username)?,
        };

        Ok(Config {
            username,
            password,
            base_url: pick(args.base_url.clone(), std::env::var(BASE_URL_VAR).ok()),
            timeout: Duration::from_secs(args.timeout),
        })
    }

    /// Build a client from this configuration
    pub fn build_client(&self) -> Result<ErganiClient, CliError> {
        let mut builder = ErganiClient::builder(self.username.as_str(), self.password.as_str())
            .timeout(self.timeout);
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.as_str())?;
        }
        Ok(builder.build()?)
    }
}

/// First non-empty value, command line before environment
fn pick(arg: Option<String>, env: Option<String>) -> Option<String> {
    arg.into_iter().chain(env).find(|v| !v.is_empty())
}

/// Prompt for the password without echo
fn prompt_password(username: &str) -> Result<Zeroizing<String>, CliError> {
    let prompt = format!("Ergani password for {}: ", username);
    let password = rpassword::prompt_password(prompt)
        .map_err(|e| CliError::Config(format!("Failed to read password: {}", e)))?;
    if password.is_empty() {
        return Err(CliError::Config("Password is required.".to_string()));
    }
    Ok(Zeroizing::new(password))
}
