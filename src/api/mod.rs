use crate::core::error::CertsError;
use crate::core::types::{CertificateMaterial, Endpoint, EndpointKind};
use crate::endpoints::dispatch::EndpointRequest;

pub(crate) mod http;
mod platform;
mod ssl_doctor;

pub use platform::PlatformClient;
pub use ssl_doctor::SslDoctorClient;

/// Error id the platform uses when an app cannot have dedicated endpoints.
pub const ADDON_REQUIRED_ID: &str = "ssl_endpoint_addon_required";

/// One collection listing.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Endpoints(Vec<Endpoint>),
    /// The dedicated-IP add-on is not installed; the collection is unavailable.
    AddonMissing,
}

impl Listing {
    pub fn into_endpoints(self) -> Vec<Endpoint> {
        match self {
            Listing::Endpoints(endpoints) => endpoints,
            Listing::AddonMissing => Vec::new(),
        }
    }
}

/// Platform calls the commands need.
pub trait PlatformApi: Send + Sync {
    fn list_endpoints(&self, app: &str, kind: EndpointKind) -> Result<Listing, CertsError>;

    /// Issues a shaped request and reads the response as an endpoint of
    /// `request.kind`.
    fn execute(&self, request: &EndpointRequest) -> Result<Endpoint, CertsError>;
}

/// Remote normalization of certificate chains and keys.
pub trait ChainRepair: Send + Sync {
    fn resolve_chain_and_key(
        &self,
        material: &CertificateMaterial,
    ) -> Result<CertificateMaterial, CertsError>;

    /// Orders and completes a chain.
    fn resolve_chain(&self, chains: &[String]) -> Result<String, CertsError>;

    /// Picks the key among `keys` that belongs to `chain`.
    fn resolve_key(&self, chain: &str, keys: &[String]) -> Result<String, CertsError>;
}
