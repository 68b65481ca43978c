use log::info;

use super::{Session, prepare_material};
use crate::core::error::CertsError;
use crate::core::types::AddRequest;
use crate::display::{Ui, certificate_details};
use crate::endpoints::dispatch::{add_request, choose_add_kind};
use crate::endpoints::{KindFlags, Outcome, probe_ssl_addon};

/// Adds a new endpoint carrying the given certificate.
///
/// Flag conflicts are reported before any request or file read. Without the
/// dedicated-IP add-on an SNI endpoint is created; with it, exactly one of
/// `--sni` and `--endpoint` selects the kind.
pub fn add(session: &Session<'_>, request: &AddRequest, ui: &mut Ui) -> Result<(), CertsError> {
    let app = session.app;
    let flags = KindFlags {
        sni: request.sni,
        endpoint: request.endpoint,
    };
    flags.validate()?;

    let addon_installed = probe_ssl_addon(session.platform, app)?;
    let kind = choose_add_kind(app, flags, addon_installed)?;
    info!("[certs-cmd] adding {kind} endpoint to {app}");

    let material = prepare_material(session, ui, &request.crt, &request.key, request.bypass)?;
    let call = add_request(app, kind, &material)?;
    let endpoint = ui.action(&format!("Adding SSL Endpoint to {app}"), || {
        session.platform.execute(&call)
    })?;

    let outcome = Outcome::from_response(endpoint);
    ui.warnings(&outcome.warnings);
    match &outcome.endpoint.cname {
        Some(cname) => ui.print(&format!("{app} now served by {cname}")),
        None => ui.print(&format!(
            "{app} now has SNI endpoint {}",
            outcome.endpoint.display_name()
        )),
    }
    ui.print("Certificate details:");
    ui.print(&certificate_details(&outcome.endpoint));
    Ok(())
}
