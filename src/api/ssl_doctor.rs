use std::io::Cursor;

use log::{debug, warn};
use reqwest::blocking::{Body, Client};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use zeroize::Zeroizing;

use super::ChainRepair;
use super::http::HttpClient;
use crate::config::Settings;
use crate::core::error::CertsError;
use crate::core::types::CertificateMaterial;

#[derive(Deserialize)]
struct ChainAndKeyResponse {
    pem: String,
    key: String,
}

#[derive(Deserialize)]
struct ChainResponse {
    pem: String,
}

/// Client for the chain repair service. Failures surface the service's own
/// text unchanged.
pub struct SslDoctorClient {
    client: Client,
    base_url: String,
}

impl SslDoctorClient {
    pub fn new(settings: &Settings) -> Self {
        Self::with_base_url(
            &settings.ssl_doctor_url,
            HttpClient::build(settings.http_timeout),
        )
    }

    pub fn with_base_url(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request and response both carry key material, so neither buffer
    /// outlives the call unwiped.
    fn post(&self, path: &str, parts: &[&str]) -> Result<Zeroizing<String>, CertsError> {
        let url = format!("{}/{}", self.base_url, path);
        let payload = Zeroizing::new(parts.join("\n").into_bytes());
        let len = payload.len() as u64;
        debug!("[ssl-doctor] POST {} ({} bytes)", url, len);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(Body::sized(Cursor::new(payload), len))
            .send()?;

        let status = response.status();
        let text = Zeroizing::new(response.text()?);
        if !status.is_success() {
            warn!("[ssl-doctor] {} rejected input: {}", path, status);
            if text.trim().is_empty() {
                return Err(CertsError::Repair(format!("SSL doctor error: {status}")));
            }
            return Err(CertsError::Repair(text.to_string()));
        }
        Ok(text)
    }

    fn decode<T: for<'de> Deserialize<'de>>(path: &str, text: &str) -> Result<T, CertsError> {
        serde_json::from_str(text).map_err(|source| CertsError::Decode {
            context: format!("{path} response"),
            source,
        })
    }
}

impl ChainRepair for SslDoctorClient {
    fn resolve_chain_and_key(
        &self,
        material: &CertificateMaterial,
    ) -> Result<CertificateMaterial, CertsError> {
        let path = "resolve-chain-and-key";
        let text = self.post(path, &[material.chain(), material.key()])?;
        let resolved: ChainAndKeyResponse = Self::decode(path, &text)?;
        Ok(CertificateMaterial::new(resolved.pem, resolved.key))
    }

    fn resolve_chain(&self, chains: &[String]) -> Result<String, CertsError> {
        let path = "resolve-chain";
        let parts: Vec<&str> = chains.iter().map(String::as_str).collect();
        let text = self.post(path, &parts)?;
        let resolved: ChainResponse = Self::decode(path, &text)?;
        Ok(resolved.pem)
    }

    fn resolve_key(&self, chain: &str, keys: &[String]) -> Result<String, CertsError> {
        let path = "resolve-chain-and-key";
        let mut parts = vec![chain];
        parts.extend(keys.iter().map(String::as_str));
        let text = self.post(path, &parts)?;
        let resolved: ChainAndKeyResponse = Self::decode(path, &text)?;
        Ok(resolved.key)
    }
}
