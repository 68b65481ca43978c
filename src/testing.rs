//! In-memory stand-ins for the platform and chain repair services.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::api::{ChainRepair, Listing, PlatformApi};
use crate::core::error::CertsError;
use crate::core::types::{CertificateMaterial, Endpoint, EndpointKind, EndpointRecord};
use crate::display::Ui;
use crate::endpoints::EndpointRequest;

/// Cloneable in-memory sink.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub struct Console {
    pub ui: Ui,
    pub out: Capture,
    pub err: Capture,
}

pub fn console(input: &str) -> Console {
    let out = Capture::default();
    let err = Capture::default();
    let ui = Ui::new(
        Box::new(out.clone()),
        Box::new(err.clone()),
        Box::new(io::Cursor::new(input.as_bytes().to_vec())),
    );
    Console { ui, out, err }
}

pub fn record(value: serde_json::Value) -> EndpointRecord {
    serde_json::from_value(value).unwrap()
}

pub fn tokyo_record() -> EndpointRecord {
    record(json!({
        "name": "tokyo-1050",
        "cname": "tokyo-1050.herokussl.com",
        "ssl_cert": {
            "ca_signed?": false,
            "self_signed?": true,
            "cert_domains": ["example.org"],
            "starts_at": "2012-08-01T21:34:23Z",
            "expires_at": "2013-08-01T21:34:23Z",
            "issuer": "/C=US/ST=California/L=San Francisco/O=Heroku by Salesforce/CN=secure.example.org",
            "subject": "/C=US/ST=California/L=San Francisco/O=Heroku by Salesforce/CN=secure.example.org"
        }
    }))
}

pub fn tokyo(kind: EndpointKind) -> Endpoint {
    Endpoint::from_record(kind, tokyo_record())
}

pub fn akita(kind: EndpointKind) -> Endpoint {
    let mut record = tokyo_record();
    record.name = Some("akita-7777".to_string());
    record.cname = Some("akita-7777.herokussl.com".to_string());
    Endpoint::from_record(kind, record)
}

pub fn with_warning(mut record: EndpointRecord) -> EndpointRecord {
    record.warnings = Some(
        [(
            "ssl_cert".to_string(),
            vec!["provides no domain(s) that are configured for this Heroku app".to_string()],
        )]
        .into_iter()
        .collect(),
    );
    record
}

pub struct FakePlatform {
    pub sni: Listing,
    pub ssl: Listing,
    pub response: EndpointRecord,
    pub failure: Option<(u16, String)>,
    pub listed: Mutex<Vec<EndpointKind>>,
    pub requests: Mutex<Vec<EndpointRequest>>,
}

impl FakePlatform {
    pub fn new(sni: Vec<Endpoint>, ssl: Listing) -> Self {
        Self {
            sni: Listing::Endpoints(sni),
            ssl,
            response: tokyo_record(),
            failure: None,
            listed: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<EndpointRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn listed(&self) -> Vec<EndpointKind> {
        self.listed.lock().unwrap().clone()
    }
}

impl PlatformApi for FakePlatform {
    fn list_endpoints(&self, _app: &str, kind: EndpointKind) -> Result<Listing, CertsError> {
        self.listed.lock().unwrap().push(kind);
        Ok(match kind {
            EndpointKind::Sni => self.sni.clone(),
            EndpointKind::Ssl => self.ssl.clone(),
        })
    }

    fn execute(&self, request: &EndpointRequest) -> Result<Endpoint, CertsError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some((status, message)) = &self.failure {
            return Err(CertsError::Api {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(Endpoint::from_record(request.kind, self.response.clone()))
    }
}

pub struct FakeDoctor {
    pub result: Result<(String, String), String>,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl FakeDoctor {
    pub fn returning(pem: &str, key: &str) -> Self {
        Self {
            result: Ok((pem.to_string(), key.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, parts: Vec<String>) -> Result<(String, String), CertsError> {
        self.calls.lock().unwrap().push(parts);
        self.result.clone().map_err(CertsError::Repair)
    }
}

impl ChainRepair for FakeDoctor {
    fn resolve_chain_and_key(
        &self,
        material: &CertificateMaterial,
    ) -> Result<CertificateMaterial, CertsError> {
        let (pem, key) =
            self.answer(vec![material.chain().to_string(), material.key().to_string()])?;
        Ok(CertificateMaterial::new(pem, key))
    }

    fn resolve_chain(&self, chains: &[String]) -> Result<String, CertsError> {
        self.answer(chains.to_vec()).map(|(pem, _)| pem)
    }

    fn resolve_key(&self, chain: &str, keys: &[String]) -> Result<String, CertsError> {
        let mut parts = vec![chain.to_string()];
        parts.extend(keys.iter().cloned());
        self.answer(parts).map(|(_, key)| key)
    }
}
