use log::{debug, info};
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use uuid::Uuid;

use super::http::{self, ApiErrorBody, HttpClient};
use super::{ADDON_REQUIRED_ID, Listing, PlatformApi};
use crate::config::Settings;
use crate::core::error::CertsError;
use crate::core::types::{Endpoint, EndpointKind, EndpointRecord};
use crate::endpoints::dispatch::EndpointRequest;

const SERVICE: &str = "Heroku";

/// reqwest-backed client for the platform API.
pub struct PlatformClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl PlatformClient {
    pub fn new(settings: &Settings) -> Result<Self, CertsError> {
        Self::with_base_url(
            &settings.api_url,
            settings.api_key.clone(),
            HttpClient::build(settings.http_timeout),
        )
    }

    pub fn with_base_url(
        base_url: &str,
        api_key: Option<String>,
        client: Client,
    ) -> Result<Self, CertsError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| CertsError::Config(format!("invalid API URL {base_url}: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CertsError::Config(format!(
                "API URL {base_url} cannot carry a path"
            )));
        }
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn url(&self, segments: &[String]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn send(
        &self,
        method: reqwest::Method,
        segments: &[String],
        accept: &str,
        request: Option<&EndpointRequest>,
    ) -> Result<Response, CertsError> {
        let request_id = Uuid::new_v4();
        let url = self.url(segments);
        debug!(
            "[certs-api] {} {} request_id={}",
            method,
            url.path(),
            request_id
        );

        let mut builder = self
            .client
            .request(method, url)
            .header(ACCEPT, accept)
            .header("Request-Id", request_id.to_string());
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        if let Some(request) = request {
            if let Some(version) = request.api_version {
                builder = builder.header("X-Heroku-API-Version", version);
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }
        }

        Ok(builder.send()?)
    }
}

impl PlatformApi for PlatformClient {
    fn list_endpoints(&self, app: &str, kind: EndpointKind) -> Result<Listing, CertsError> {
        let segments = vec![
            "apps".to_string(),
            app.to_string(),
            kind.collection().to_string(),
        ];
        let response = self.send(
            reqwest::Method::GET,
            &segments,
            &kind.accept_header(),
            None,
        )?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            let addon_missing = ApiErrorBody::parse(&body)
                .and_then(|parsed| parsed.id)
                .is_some_and(|id| id == ADDON_REQUIRED_ID);
            if addon_missing {
                info!("[certs-api] {app} has no SSL Endpoint add-on");
                return Ok(Listing::AddonMissing);
            }
            return Err(http::status_error(SERVICE, status, Some(body)));
        }

        let records: Vec<EndpointRecord> =
            serde_json::from_str(&body).map_err(|source| CertsError::Decode {
                context: format!("{} listing", kind.collection()),
                source,
            })?;
        debug!(
            "[certs-api] {} {} listed for {}",
            records.len(),
            kind.collection(),
            app
        );
        Ok(Listing::Endpoints(
            records
                .into_iter()
                .map(|record| Endpoint::from_record(kind, record))
                .collect(),
        ))
    }

    fn execute(&self, request: &EndpointRequest) -> Result<Endpoint, CertsError> {
        let response = self.send(
            request.method.clone(),
            &request.segments,
            &request.accept,
            Some(request),
        )?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(http::status_error(SERVICE, status, Some(body)));
        }

        let record = if body.trim().is_empty() {
            EndpointRecord::default()
        } else {
            serde_json::from_str(&body).map_err(|source| CertsError::Decode {
                context: format!("response to {} {}", request.method, request.path()),
                source,
            })?
        };
        Ok(Endpoint::from_record(request.kind, record))
    }
}
