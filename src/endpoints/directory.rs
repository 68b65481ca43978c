use std::panic;
use std::thread;

use log::debug;

use super::resolver::EndpointDirectory;
use crate::api::{Listing, PlatformApi};
use crate::core::error::CertsError;
use crate::core::types::EndpointKind;

/// Reads both endpoint collections of `app`. The two reads are independent
/// and run side by side.
pub fn fetch_directory(api: &dyn PlatformApi, app: &str) -> Result<EndpointDirectory, CertsError> {
    let (sni, ssl) = thread::scope(|scope| {
        let sni = scope.spawn(|| api.list_endpoints(app, EndpointKind::Sni));
        let ssl = scope.spawn(|| api.list_endpoints(app, EndpointKind::Ssl));
        let sni = sni.join().unwrap_or_else(|payload| panic::resume_unwind(payload));
        let ssl = ssl.join().unwrap_or_else(|payload| panic::resume_unwind(payload));
        (sni, ssl)
    });

    let ssl = ssl?;
    let sni = sni?;
    if ssl == Listing::AddonMissing {
        debug!("[certs-directory] {app} has no dedicated endpoints");
    }

    Ok(EndpointDirectory::new(
        app,
        sni.into_endpoints(),
        ssl.into_endpoints(),
    ))
}

/// Whether the app can have dedicated (SSL) endpoints.
pub fn probe_ssl_addon(api: &dyn PlatformApi, app: &str) -> Result<bool, CertsError> {
    let listing = api.list_endpoints(app, EndpointKind::Ssl)?;
    Ok(listing != Listing::AddonMissing)
}
