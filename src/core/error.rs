use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::endpoints::resolver::ResolveError;

#[derive(Error, Debug)]
pub enum CertsError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("Must pass just one of --sni or --endpoint")]
    ConflictingFlags,
    #[error("Must pass either --sni or --endpoint")]
    MissingFlag,
    #[error(
        "--endpoint requires the SSL Endpoint add-on on {0}; use --sni or install the add-on"
    )]
    AddonRequired(String),
    #[error("SNI Endpoints cannot be rolled back, please update with a new cert.")]
    KindMismatch,
    /// Message from the chain repair service, unchanged.
    #[error("{0}")]
    Repair(String),
    #[error("Confirmation {given} did not match {app}. Aborted.")]
    ConfirmationMismatch { given: String, app: String },
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to parse {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8 text", .0.display())]
    InvalidMaterial(PathBuf),
    #[error("endpoint {0} has no identifier for its collection")]
    MissingIdentifier(String),
    #[error("No app specified. Use -a <app> or set HEROKU_APP")]
    MissingApp,
    #[error("configuration error: {0}")]
    Config(String),
    #[error("failed to read confirmation: {0}")]
    Prompt(#[source] io::Error),
}

impl CertsError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CertsError::Api { status, .. } => Some(*status),
            CertsError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
