use log::info;

use super::{Session, prepare_material, show_outcome};
use crate::core::error::CertsError;
use crate::core::types::UpdateRequest;
use crate::display::Ui;
use crate::endpoints::dispatch::update_request;
use crate::endpoints::{Outcome, ResolveOptions, fetch_directory, resolve};

/// Replaces the certificate of an existing endpoint.
///
/// The target is resolved before the files are read; the confirmation is
/// asked only once the material is ready to send.
pub fn update(
    session: &Session<'_>,
    request: &UpdateRequest,
    ui: &mut Ui,
) -> Result<(), CertsError> {
    let app = session.app;
    let directory = fetch_directory(session.platform, app)?;
    let target = resolve(&request.query, &directory, ResolveOptions::default())?;
    let label = target.label();
    info!("[certs-cmd] updating {} endpoint {label}", target.kind());

    let material = prepare_material(session, ui, &request.crt, &request.key, request.bypass)?;
    ui.confirm_app(
        app,
        request.confirm.as_deref(),
        &format!(
            "Potentially Destructive Action\nThis command will change the certificate of endpoint {label} on {app}."
        ),
    )?;

    let call = update_request(app, target, &material)?;
    let endpoint = ui.action(&format!("Updating SSL Endpoint {label} for {app}"), || {
        session.platform.execute(&call)
    })?;

    show_outcome(ui, &Outcome::from_response(endpoint), "Updated certificate details:");
    Ok(())
}
