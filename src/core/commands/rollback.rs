use log::info;

use super::{Session, show_outcome};
use crate::core::error::CertsError;
use crate::core::types::TargetRequest;
use crate::display::Ui;
use crate::endpoints::dispatch::rollback_request;
use crate::endpoints::{Outcome, ResolveOptions, fetch_directory, resolve};

/// Restores the previous certificate of a dedicated endpoint. SNI targets are
/// refused before the confirmation prompt.
pub fn rollback(
    session: &Session<'_>,
    request: &TargetRequest,
    ui: &mut Ui,
) -> Result<(), CertsError> {
    let app = session.app;
    let directory = fetch_directory(session.platform, app)?;
    let target = resolve(&request.query, &directory, ResolveOptions::default())?;
    let call = rollback_request(app, target)?;
    let label = target.label();
    info!("[certs-cmd] rolling back {label}");

    ui.confirm_app(
        app,
        request.confirm.as_deref(),
        &format!(
            "Potentially Destructive Action\nThis command will change the certificate of endpoint {label} from {app}."
        ),
    )?;

    let endpoint = ui.action(&format!("Rolling back SSL Endpoint {label} for {app}"), || {
        session.platform.execute(&call)
    })?;

    show_outcome(ui, &Outcome::from_response(endpoint), "New active certificate details:");
    Ok(())
}
