//! The HTTP transport seam.
//!
//! The client performs every remote call through the [`Transport`] trait, a
//! single `perform` capability. [`HttpTransport`] is the production
//! implementation; tests substitute a recording fake.

use std::{fmt, time::Duration};

use serde_json::Value;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A fully-assembled request, ready to be put on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    /// JSON body for POST requests; GETs carry no body.
    pub body: Option<Value>,
    pub timeout: Duration,
}

/// A raw response: status plus the undecoded body text.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

/// A failure reported by the transport itself, before any response was
/// produced. Opaque; the original cause is available via `source`.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(source: reqwest::Error) -> Self {
        Self::new(source)
    }
}

pub trait Transport: fmt::Debug {
    fn perform(&self, request: &Request) -> Result<Response, TransportError>;
}

/// Production transport backed by a blocking `reqwest` client.
#[derive(Debug, Default)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    fn perform(&self, request: &Request) -> Result<Response, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.http.get(request.url.clone()),
            Method::Post => self.http.post(request.url.clone()),
        }
        .timeout(request.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(Response { status, body })
    }
}
