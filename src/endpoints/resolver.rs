use log::debug;
use thiserror::Error;

use crate::core::types::{Endpoint, ResolutionQuery};
use crate::domain::comparable_cname;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Record not found.")]
    RecordNotFound,
    /// Names are unique per app, so this points at platform-side inconsistency.
    #[error("More than one endpoint matches {0}, please file a support ticket")]
    AmbiguousName(String),
    #[error("Must pass --name when more than one endpoint matches --endpoint")]
    AmbiguousEndpoint,
    #[error("Must pass --name or --endpoint")]
    MustSpecify,
    #[error("{0} has no SSL Endpoints.")]
    NoEndpoints(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Disables implicit selection when the app has a single endpoint.
    pub require_name: bool,
}

/// Both endpoint listings of one app as fetched for a single invocation.
#[derive(Debug, Clone, Default)]
pub struct EndpointDirectory {
    pub app: String,
    pub sni: Vec<Endpoint>,
    pub ssl: Vec<Endpoint>,
}

impl EndpointDirectory {
    pub fn new(app: impl Into<String>, sni: Vec<Endpoint>, ssl: Vec<Endpoint>) -> Self {
        Self {
            app: app.into(),
            sni,
            ssl,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Endpoint> {
        self.sni.iter().chain(self.ssl.iter())
    }

    pub fn len(&self) -> usize {
        self.sni.len() + self.ssl.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Picks the single endpoint a query designates, or explains why it cannot.
pub fn resolve<'a>(
    query: &ResolutionQuery,
    directory: &'a EndpointDirectory,
    options: ResolveOptions,
) -> Result<&'a Endpoint, ResolveError> {
    if let Some(name) = query.name.as_deref() {
        let matches: Vec<&Endpoint> = directory
            .iter()
            .filter(|endpoint| endpoint.explicit_name() == Some(name))
            .collect();
        debug!("[certs-resolve] name={} matches={}", name, matches.len());
        return match matches.as_slice() {
            [only] => Ok(*only),
            [] => Err(ResolveError::RecordNotFound),
            _ => Err(ResolveError::AmbiguousName(name.to_string())),
        };
    }

    if let Some(cname) = query.cname.as_deref() {
        let matches = match_cname(cname, directory);
        debug!("[certs-resolve] cname={} matches={}", cname, matches.len());
        return match matches.as_slice() {
            [only] => Ok(*only),
            [] => Err(ResolveError::RecordNotFound),
            _ => Err(ResolveError::AmbiguousEndpoint),
        };
    }

    let all: Vec<&Endpoint> = directory.iter().collect();
    match all.as_slice() {
        [] => Err(ResolveError::NoEndpoints(directory.app.clone())),
        [only] if !options.require_name => Ok(*only),
        _ => Err(ResolveError::MustSpecify),
    }
}

/// Exact matches win; substring matches only count when there is none.
fn match_cname<'a>(cname: &str, directory: &'a EndpointDirectory) -> Vec<&'a Endpoint> {
    let wanted = comparable_cname(cname);
    if wanted.is_empty() {
        return Vec::new();
    }

    let with_cname = || {
        directory.iter().filter_map(|endpoint| {
            endpoint
                .cname
                .as_deref()
                .map(|value| (endpoint, comparable_cname(value)))
        })
    };

    let exact: Vec<&Endpoint> = with_cname()
        .filter(|(_, value)| *value == wanted)
        .map(|(endpoint, _)| endpoint)
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    with_cname()
        .filter(|(_, value)| value.contains(&wanted))
        .map(|(endpoint, _)| endpoint)
        .collect()
}
