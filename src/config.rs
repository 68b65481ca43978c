use std::time::Duration;

use log::warn;

pub const DEFAULT_API_URL: &str = "https://api.heroku.com";
pub const DEFAULT_SSL_DOCTOR_URL: &str = "https://ssl-doctor.herokuapp.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings resolved from the environment the host CLI provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub ssl_doctor_url: String,
    pub http_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            ssl_doctor_url: DEFAULT_SSL_DOCTOR_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_empty("HEROKU_API_KEY");
        if api_key.is_none() {
            warn!("[certs-config] HEROKU_API_KEY is not set; requests will be unauthenticated");
        }

        Self {
            api_url: non_empty("HEROKU_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key,
            ssl_doctor_url: non_empty("SSL_DOCTOR_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SSL_DOCTOR_URL.to_string()),
            http_timeout: resolve_timeout(lookup("CERTS_HTTP_TIMEOUT_SECS").as_deref()),
        }
    }
}

fn resolve_timeout(raw: Option<&str>) -> Duration {
    let Some(raw) = raw else {
        return Duration::from_secs(DEFAULT_TIMEOUT_SECS);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => {
            warn!("[certs-config] invalid timeout value {raw:?}; using default");
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        }
        Ok(secs) => Duration::from_secs(secs),
    }
}
