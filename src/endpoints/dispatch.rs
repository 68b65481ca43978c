use reqwest::Method;

use crate::core::error::CertsError;
use crate::core::types::{CertificateBody, CertificateMaterial, Endpoint, EndpointKind};

const LEGACY_ACCEPT: &str = "application/json";
const ROLLBACK_API_VERSION: &str = "2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
    Rollback,
    Remove,
    Info,
}

/// How an operation is expressed against one endpoint collection.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Route {
    method: Method,
    /// Whether the endpoint identifier is part of the path.
    addressed: bool,
    action: Option<&'static str>,
    legacy_version: Option<&'static str>,
}

fn route(operation: Operation, kind: EndpointKind) -> Option<Route> {
    let plain = |method: Method, addressed: bool| Route {
        method,
        addressed,
        action: None,
        legacy_version: None,
    };
    match (operation, kind) {
        (Operation::Add, _) => Some(plain(Method::POST, false)),
        (Operation::Update, _) => Some(plain(Method::PATCH, true)),
        (Operation::Info, _) => Some(plain(Method::GET, true)),
        (Operation::Remove, _) => Some(plain(Method::DELETE, true)),
        (Operation::Rollback, EndpointKind::Ssl) => Some(Route {
            method: Method::POST,
            addressed: true,
            action: Some("rollback"),
            legacy_version: Some(ROLLBACK_API_VERSION),
        }),
        (Operation::Rollback, EndpointKind::Sni) => None,
    }
}

/// A fully shaped platform call. Path segments are kept unencoded; the
/// client encodes them when building the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointRequest {
    /// Kind of the collection addressed; the response is read as this kind.
    pub kind: EndpointKind,
    pub method: Method,
    pub segments: Vec<String>,
    pub accept: String,
    /// Sent as `X-Heroku-API-Version` when present.
    pub api_version: Option<&'static str>,
    pub body: Option<CertificateBody>,
}

impl EndpointRequest {
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

pub fn add_request(
    app: &str,
    kind: EndpointKind,
    material: &CertificateMaterial,
) -> Result<EndpointRequest, CertsError> {
    let mut request = shape(Operation::Add, app, kind, None)?;
    request.body = Some(CertificateBody::from(material));
    Ok(request)
}

pub fn update_request(
    app: &str,
    target: &Endpoint,
    material: &CertificateMaterial,
) -> Result<EndpointRequest, CertsError> {
    let mut request = request_for(Operation::Update, app, target)?;
    request.body = Some(CertificateBody::from(material));
    Ok(request)
}

/// Fails with `KindMismatch` for SNI targets without touching the network.
pub fn rollback_request(app: &str, target: &Endpoint) -> Result<EndpointRequest, CertsError> {
    request_for(Operation::Rollback, app, target)
}

pub fn remove_request(app: &str, target: &Endpoint) -> Result<EndpointRequest, CertsError> {
    request_for(Operation::Remove, app, target)
}

pub fn info_request(app: &str, target: &Endpoint) -> Result<EndpointRequest, CertsError> {
    request_for(Operation::Info, app, target)
}

fn request_for(
    operation: Operation,
    app: &str,
    target: &Endpoint,
) -> Result<EndpointRequest, CertsError> {
    shape(operation, app, target.kind(), Some(target))
}

fn shape(
    operation: Operation,
    app: &str,
    kind: EndpointKind,
    target: Option<&Endpoint>,
) -> Result<EndpointRequest, CertsError> {
    let route = route(operation, kind).ok_or(CertsError::KindMismatch)?;

    let mut segments = collection_segments(app, kind);
    if route.addressed {
        let id = target
            .and_then(Endpoint::identifier)
            .ok_or_else(|| {
                CertsError::MissingIdentifier(target.map(Endpoint::label).unwrap_or_default())
            })?;
        segments.push(id.to_string());
    }
    if let Some(action) = route.action {
        segments.push(action.to_string());
    }

    let accept = match route.legacy_version {
        Some(_) => LEGACY_ACCEPT.to_string(),
        None => kind.accept_header(),
    };

    Ok(EndpointRequest {
        kind,
        method: route.method,
        segments,
        accept,
        api_version: route.legacy_version,
        body: None,
    })
}

fn collection_segments(app: &str, kind: EndpointKind) -> Vec<String> {
    vec![
        "apps".to_string(),
        app.to_string(),
        kind.collection().to_string(),
    ]
}

/// `--sni` / `--endpoint` as passed to `add`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindFlags {
    pub sni: bool,
    pub endpoint: bool,
}

impl KindFlags {
    /// Checked before any I/O happens.
    pub fn validate(&self) -> Result<(), CertsError> {
        if self.sni && self.endpoint {
            return Err(CertsError::ConflictingFlags);
        }
        Ok(())
    }
}

/// Decides which kind of endpoint `add` creates.
pub fn choose_add_kind(
    app: &str,
    flags: KindFlags,
    addon_installed: bool,
) -> Result<EndpointKind, CertsError> {
    flags.validate()?;
    if !addon_installed {
        if flags.endpoint {
            return Err(CertsError::AddonRequired(app.to_string()));
        }
        return Ok(EndpointKind::Sni);
    }
    match (flags.sni, flags.endpoint) {
        (true, false) => Ok(EndpointKind::Sni),
        (false, true) => Ok(EndpointKind::Ssl),
        _ => Err(CertsError::MissingFlag),
    }
}

/// Successful response of a mutating call, ready for display.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub endpoint: Endpoint,
    /// Advisory only; never turns the call into a failure.
    pub warnings: Vec<String>,
}

impl Outcome {
    pub fn from_response(endpoint: Endpoint) -> Self {
        let warnings = endpoint.warning_lines();
        Self { endpoint, warnings }
    }
}
