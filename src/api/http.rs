use std::time::Duration;

use log::warn;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::core::error::CertsError;

const USER_AGENT: &str = concat!("heroku-certs/", env!("CARGO_PKG_VERSION"));

pub struct HttpClient;

impl HttpClient {
    pub fn build(timeout: Duration) -> Client {
        Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|err| {
                warn!("[certs-http] failed to build client: {err}");
                Client::new()
            })
    }
}

/// Error document returned by the platform API.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Older endpoints report the text under `error`.
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

pub fn status_error(service: &str, status: StatusCode, body: Option<String>) -> CertsError {
    let code = status.as_u16();
    if status == StatusCode::UNAUTHORIZED {
        return CertsError::Api {
            status: code,
            message: format!("{service} authentication failed"),
        };
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return CertsError::Api {
            status: code,
            message: format!("{service} rate limit exceeded"),
        };
    }
    let body = body.filter(|body| !body.trim().is_empty());
    let message = match body {
        Some(body) => match ApiErrorBody::parse(&body) {
            Some(parsed) => parsed.message.or(parsed.error).unwrap_or(body),
            None => body,
        },
        None => format!("{service} API error: {status}"),
    };
    CertsError::Api {
        status: code,
        message,
    }
}
