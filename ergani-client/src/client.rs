//! Ergani session client implementation

use crate::encoder::{Document, encode_document};
use crate::error::ErganiError;
use crate::models::{
    CompanyDailyScheduleBatch, CompanyOvertimeBatch, CompanyWeeklyScheduleBatch,
    CompanyWorkCardBatch, SubmissionReceipt,
};
use crate::parser::{api_failure, parse_access_token, parse_receipts};
use crate::transport::{DEFAULT_TIMEOUT, HttpRequest, ReqwestTransport, Transport};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde_json::json;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};
use zeroize::Zeroizing;

/// Default API root (the Ergani trial environment)
pub const DEFAULT_BASE_URL: &str = "https://trialeservices.yeka.gr/WebServicesAPI/api";

/// `UserType` sent on authentication; Ergani uses `01` for employers
pub const USER_TYPE_EMPLOYER: &str = "01";

/// A session with the Ergani API
///
/// The client holds the credentials it was built with and, once
/// authenticated, a bearer token. Authentication is lazy: the first submission
/// on an unauthenticated client calls [`authenticate`](Self::authenticate)
/// first. Calling it up front is only needed to check credentials early.
///
/// Methods that may authenticate take `&mut self`; share a client between
/// threads behind a `Mutex`.
///
/// # Example
///
/// ```no_run
/// use chrono::Utc;
/// use ergani_client::{CompanyWorkCardBatch, ErganiClient, MovementType, WorkCardEntry};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = ErganiClient::new("username", "password")?;
///
/// let batch = CompanyWorkCardBatch {
///     employer_tax_id: "999999999".to_string(),
///     branch_number: 0,
///     comments: None,
///     entries: vec![WorkCardEntry {
///         employee_tax_id: "123456789".to_string(),
///         employee_last_name: "Papadopoulos".to_string(),
///         employee_first_name: "Giorgos".to_string(),
///         movement: MovementType::Arrival,
///         submission_date: Utc::now().date_naive(),
///         movement_time: Utc::now().fixed_offset(),
///         late_justification: None,
///     }],
/// };
///
/// for receipt in client.submit_work_cards(&[batch])? {
///     println!("{} {}", receipt.protocol, receipt.submitted_at);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ErganiClient {
    transport: Box<dyn Transport>,
    base_url: Url,
    username: String,
    password: Zeroizing<String>,
    token: Option<Zeroizing<String>>,
}

impl fmt::Debug for ErganiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErganiClient")
            .field("transport", &self.transport)
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl ErganiClient {
    /// Create a client for the default endpoint with default settings
    ///
    /// No request is made until the first call.
    ///
    /// # Errors
    ///
    /// Returns `ErganiError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, ErganiError> {
        Self::builder(username, password).build()
    }

    /// Create a builder for configuring the client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ergani_client::ErganiClient;
    /// use std::time::Duration;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ErganiClient::builder("username", "password")
    ///     .base_url("https://eservices.yeka.gr/WebServicesAPI/api")?
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> ErganiClientBuilder {
        ErganiClientBuilder::new(username, password)
    }

    /// The API root this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a bearer token is held
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The current bearer token, if authenticated
    pub fn access_token(&self) -> Option<&str> {
        self.token.as_deref().map(String::as_str)
    }

    /// Resolve an endpoint below the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ErganiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ErganiError::ClientInit("Cannot modify base URL path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Create a sensitive `Authorization` header value for a token
    fn create_bearer_header(token: &str) -> Result<HeaderValue, ErganiError> {
        let bearer = Zeroizing::new(format!("Bearer {}", token));
        let mut header_value = HeaderValue::from_str(&bearer)
            .map_err(|_| ErganiError::Auth("access token is not a valid header value".to_string()))?;
        header_value.set_sensitive(true);
        Ok(header_value)
    }

    /// Authenticate and store the bearer token
    ///
    /// Posts the credentials to `{base}/Authentication`. On success the token
    /// replaces any previous one; on failure the client state is left unchanged.
    ///
    /// # Errors
    ///
    /// * `ErganiError::Api` - any status other than 200
    /// * `ErganiError::Auth` - status 200 without a usable `accessToken`
    /// * `ErganiError::Decode` - status 200 with a body that is not JSON
    /// * `ErganiError::Transport` - the request itself failed
    pub fn authenticate(&mut self) -> Result<(), ErganiError> {
        let url = self.endpoint(&["Authentication"])?;
        let body = json!({
            "Username": self.username,
            "Password": self.password.as_str(),
            "UserType": USER_TYPE_EMPLOYER,
        })
        .to_string()
        .into_bytes();

        debug!(%url, "authenticating");
        let response = self.transport.execute(HttpRequest {
            method: Method::POST,
            url,
            headers: Self::json_headers(),
            body,
        })?;
        debug!(status = %response.status, "authentication response");

        if response.status != StatusCode::OK {
            return Err(ErganiError::Api(api_failure(response.status, &response.body)));
        }

        let token = parse_access_token(&response.body)?;
        self.token = Some(Zeroizing::new(token));
        info!(username = %self.username, "authenticated with Ergani");
        Ok(())
    }

    /// Submit batches of any document kind
    ///
    /// The payload is encoded before anything is sent. If the client is not
    /// authenticated yet, it authenticates first. A 204 response yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// * `ErganiError::Api` - non-2xx response (from authentication or submission)
    /// * `ErganiError::Auth` - authentication returned no token
    /// * `ErganiError::Decode` - 2xx response that is not a list of receipts
    /// * `ErganiError::Transport` - the request itself failed
    pub fn submit<D: Document>(
        &mut self,
        batches: &[D],
    ) -> Result<Vec<SubmissionReceipt>, ErganiError> {
        let kind = D::KIND;
        let body = encode_document(batches).to_string().into_bytes();

        if self.token.is_none() {
            self.authenticate()?;
        }
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| ErganiError::Auth("no access token".to_string()))?;

        let url = self.endpoint(&kind.path_segments())?;
        let mut headers = Self::json_headers();
        headers.insert(AUTHORIZATION, Self::create_bearer_header(token)?);

        debug!(%kind, %url, batches = batches.len(), "submitting document");
        let response = self.transport.execute(HttpRequest {
            method: Method::POST,
            url,
            headers,
            body,
        })?;
        debug!(%kind, status = %response.status, "submission response");

        if response.status == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        if !response.status.is_success() {
            return Err(ErganiError::Api(api_failure(response.status, &response.body)));
        }

        parse_receipts(&response.body)
    }

    /// Submit work-card (clock-in / clock-out) declarations
    pub fn submit_work_cards(
        &mut self,
        batches: &[CompanyWorkCardBatch],
    ) -> Result<Vec<SubmissionReceipt>, ErganiError> {
        self.submit(batches)
    }

    /// Submit overtime declarations
    pub fn submit_overtime(
        &mut self,
        batches: &[CompanyOvertimeBatch],
    ) -> Result<Vec<SubmissionReceipt>, ErganiError> {
        self.submit(batches)
    }

    /// Submit daily work schedules
    pub fn submit_daily_schedules(
        &mut self,
        batches: &[CompanyDailyScheduleBatch],
    ) -> Result<Vec<SubmissionReceipt>, ErganiError> {
        self.submit(batches)
    }

    /// Submit weekly work schedules
    pub fn submit_weekly_schedules(
        &mut self,
        batches: &[CompanyWeeklyScheduleBatch],
    ) -> Result<Vec<SubmissionReceipt>, ErganiError> {
        self.submit(batches)
    }
}

/// Builder for configuring an Ergani client
///
/// The transport is chosen in this order: an explicit
/// [`transport`](Self::transport), then a reqwest client built from
/// [`client_builder`](Self::client_builder), then a default rustls client.
/// [`timeout`](Self::timeout) applies to the two reqwest cases.
///
/// # Example
///
/// ```no_run
/// use ergani_client::ErganiClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Custom base URL for testing
/// let client = ErganiClient::builder("user", "pass")
///     .base_url("http://localhost:1234")?
///     .build()?;
///
/// // Custom reqwest configuration
/// let client = ErganiClient::builder("user", "pass")
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .use_rustls_tls()
///             .user_agent("payroll-sync/1.0")
///     )
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ErganiClientBuilder {
    username: String,
    password: Zeroizing<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
    transport: Option<Box<dyn Transport>>,
}

impl fmt::Debug for ErganiClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErganiClientBuilder")
            .field("username", &self.username)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

impl ErganiClientBuilder {
    /// Create a new builder with default settings
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
            base_url: None,
            timeout: None,
            client_builder: None,
            transport: None,
        }
    }

    /// Set a custom API root
    ///
    /// Endpoint paths are appended to it, so a root with a path prefix
    /// (like the default `.../WebServicesAPI/api`) keeps that prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, ErganiError> {
        let url = url
            .into_url()
            .map_err(|e| ErganiError::ClientInit(format!("invalid base URL: {}", e)))?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Set the per-request timeout (default 30 seconds)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom reqwest client builder
    ///
    /// Redirects are never followed, whatever the builder says.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Use a custom transport instead of reqwest
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `ErganiError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<ErganiClient, ErganiError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| ErganiError::ClientInit(format!("invalid default base URL: {}", e)))?,
        };

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let transport: Box<dyn Transport> = match (self.transport, self.client_builder) {
            (Some(transport), _) => transport,
            (None, Some(builder)) => Box::new(ReqwestTransport::from_builder(builder.timeout(timeout))?),
            (None, None) => Box::new(ReqwestTransport::new(timeout)?),
        };

        Ok(ErganiClient {
            transport,
            base_url,
            username: self.username,
            password: self.password,
            token: None,
        })
    }
}
