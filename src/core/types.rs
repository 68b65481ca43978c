use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use zeroize::Zeroizing;

use crate::domain::first_label;

/// The two certificate binding mechanisms an app can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    /// Multi-tenant binding selected by TLS Server Name Indication.
    Sni,
    /// Legacy binding on a dedicated IP, identified by its cname.
    Ssl,
}

impl EndpointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointKind::Sni => "SNI",
            EndpointKind::Ssl => "SSL",
        }
    }

    /// Path segment of the collection holding endpoints of this kind.
    pub fn collection(&self) -> &'static str {
        match self {
            EndpointKind::Sni => "sni-endpoints",
            EndpointKind::Ssl => "ssl-endpoints",
        }
    }

    /// Representation variant pinned through the `Accept` header.
    pub fn variant(&self) -> &'static str {
        match self {
            EndpointKind::Sni => "sni_ssl_cert",
            EndpointKind::Ssl => "ssl_cert",
        }
    }

    pub fn accept_header(&self) -> String {
        format!("application/vnd.heroku+json; version=3.{}", self.variant())
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Certificate currently installed on an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SslCert {
    /// `None` when the platform did not report trust information.
    #[serde(rename = "ca_signed?", default)]
    pub ca_signed: Option<bool>,
    #[serde(rename = "self_signed?", default)]
    pub self_signed: Option<bool>,
    /// Common names and SANs covered, in the order the platform reports them.
    #[serde(default)]
    pub cert_domains: Vec<String>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

/// Advisory warnings keyed by the field they concern.
pub type Warnings = BTreeMap<String, Vec<String>>;

/// Endpoint exactly as the platform serializes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cname: Option<String>,
    #[serde(default)]
    pub ssl_cert: Option<SslCert>,
    #[serde(default)]
    pub warnings: Option<Warnings>,
}

/// A certificate binding on an app together with the kind of collection it
/// was read from. The kind is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    kind: EndpointKind,
    pub name: Option<String>,
    pub cname: Option<String>,
    pub ssl_cert: Option<SslCert>,
    pub warnings: Warnings,
}

impl Endpoint {
    pub fn from_record(kind: EndpointKind, record: EndpointRecord) -> Self {
        Self {
            kind,
            name: record.name.filter(|name| !name.is_empty()),
            cname: record.cname.filter(|cname| !cname.is_empty()),
            ssl_cert: record.ssl_cert,
            warnings: record.warnings.unwrap_or_default(),
        }
    }

    pub fn kind(&self) -> EndpointKind {
        self.kind
    }

    /// Name usable for `--name` matching. Synthesized names are excluded.
    pub fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn display_name(&self) -> String {
        match (&self.name, &self.cname) {
            (Some(name), _) => name.clone(),
            (None, Some(cname)) => first_label(cname).to_string(),
            (None, None) => String::new(),
        }
    }

    /// `name (cname)`, or the bare name when there is no cname.
    pub fn label(&self) -> String {
        match &self.cname {
            Some(cname) => format!("{} ({})", self.display_name(), cname),
            None => self.display_name(),
        }
    }

    /// The value that addresses this endpoint inside its collection.
    pub fn identifier(&self) -> Option<&str> {
        match self.kind {
            EndpointKind::Sni => self.name.as_deref(),
            EndpointKind::Ssl => self.cname.as_deref(),
        }
    }

    /// Flattened `<field> <message>` warning lines.
    pub fn warning_lines(&self) -> Vec<String> {
        self.warnings
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .filter(|message| !message.trim().is_empty())
                    .map(move |message| format!("{field} {message}"))
            })
            .collect()
    }
}

/// Certificate chain and private key, always carried together.
#[derive(Clone)]
pub struct CertificateMaterial {
    chain: String,
    key: Zeroizing<String>,
}

impl CertificateMaterial {
    pub fn new(chain: String, key: String) -> Self {
        Self {
            chain,
            key: Zeroizing::new(key),
        }
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for CertificateMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CertificateMaterial")
            .field("chain_len", &self.chain.len())
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Request body for add and update calls.
#[derive(Clone, PartialEq, Serialize)]
pub struct CertificateBody {
    pub certificate_chain: String,
    #[serde(serialize_with = "serialize_secret")]
    pub private_key: Zeroizing<String>,
}

fn serialize_secret<S: Serializer>(
    value: &Zeroizing<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value)
}

impl From<&CertificateMaterial> for CertificateBody {
    fn from(material: &CertificateMaterial) -> Self {
        Self {
            certificate_chain: material.chain().to_string(),
            private_key: Zeroizing::new(material.key().to_string()),
        }
    }
}

impl fmt::Debug for CertificateBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CertificateBody")
            .field("certificate_chain", &self.certificate_chain)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// User-supplied filters used to pick one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionQuery {
    pub name: Option<String>,
    pub cname: Option<String>,
}

impl ResolutionQuery {
    pub fn new(name: Option<String>, cname: Option<String>) -> Self {
        Self {
            name: name.filter(|value| !value.is_empty()),
            cname: cname.filter(|value| !value.is_empty()),
        }
    }

    pub fn by_name(name: &str) -> Self {
        Self::new(Some(name.to_string()), None)
    }

    pub fn by_cname(cname: &str) -> Self {
        Self::new(None, Some(cname.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct AddRequest {
    pub crt: PathBuf,
    pub key: PathBuf,
    pub sni: bool,
    pub endpoint: bool,
    pub bypass: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub crt: PathBuf,
    pub key: PathBuf,
    pub query: ResolutionQuery,
    pub bypass: bool,
    pub confirm: Option<String>,
}

/// Request shape shared by commands that act on one existing endpoint.
#[derive(Debug, Clone, Default)]
pub struct TargetRequest {
    pub query: ResolutionQuery,
    pub confirm: Option<String>,
}
