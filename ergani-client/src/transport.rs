//! HTTP transport used by the client
//!
//! [`ErganiClient`](crate::ErganiClient) never talks to reqwest directly: it
//! hands a fully built [`HttpRequest`] to a [`Transport`] and reads the whole
//! [`HttpResponse`] back. The default is [`ReqwestTransport`]; tests and callers
//! with special needs can plug in their own.

use crate::error::ErganiError;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};
use std::fmt::Debug;
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// An outgoing request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// A response with its body fully read
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Executes one request/response exchange
///
/// Implementations must not retry: a failed exchange is reported as
/// [`ErganiError::Transport`] and any response, whatever its status, is
/// returned as is.
pub trait Transport: Debug + Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ErganiError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ErganiError> {
        (**self).execute(request)
    }
}

/// [`Transport`] backed by a blocking reqwest client
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Create a transport with rustls and the given timeout
    ///
    /// # Errors
    ///
    /// Returns `ErganiError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, ErganiError> {
        Self::from_builder(reqwest::blocking::Client::builder().use_rustls_tls().timeout(timeout))
    }

    /// Create a transport from a custom reqwest client builder
    ///
    /// Redirects are never followed, whatever the builder says.
    pub fn from_builder(builder: reqwest::blocking::ClientBuilder) -> Result<Self, ErganiError> {
        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ErganiError::ClientInit(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ErganiError> {
        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{CONTENT_TYPE, HeaderValue};

    #[test]
    fn test_round_trip_against_mock_server() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/echo")
            .match_header("content-type", "application/json")
            .match_body(r#"{"ping":true}"#)
            .with_status(202)
            .with_header("x-request-id", "abc")
            .with_body("pong")
            .expect(1)
            .create();

        let transport = ReqwestTransport::new(DEFAULT_TIMEOUT).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = transport
            .execute(HttpRequest {
                method: Method::POST,
                url: Url::parse(&format!("{}/echo", server.url())).unwrap(),
                headers,
                body: br#"{"ping":true}"#.to_vec(),
            })
            .unwrap();

        assert_eq!(response.status, StatusCode::ACCEPTED);
        assert_eq!(response.headers.get("x-request-id").unwrap(), "abc");
        assert_eq!(response.body, b"pong");
        mock.assert();
    }

    #[test]
    fn test_error_status_is_not_an_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("nope")
            .create();

        let transport = ReqwestTransport::new(DEFAULT_TIMEOUT).unwrap();
        let response = transport
            .execute(HttpRequest {
                method: Method::GET,
                url: Url::parse(&format!("{}/missing", server.url())).unwrap(),
                headers: HeaderMap::new(),
                body: Vec::new(),
            })
            .unwrap();

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, b"nope");
        mock.assert();
    }

    #[test]
    fn test_connection_failure_is_transport_error() {
        let transport = ReqwestTransport::new(Duration::from_secs(2)).unwrap();
        // Port 9 (discard) on localhost is assumed closed
        let result = transport.execute(HttpRequest {
            method: Method::POST,
            url: Url::parse("http://127.0.0.1:9/Authentication").unwrap(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        });

        assert!(matches!(result, Err(ErganiError::Transport(_))));
    }
}
