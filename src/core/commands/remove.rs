use log::info;

use super::Session;
use crate::core::error::CertsError;
use crate::core::types::TargetRequest;
use crate::display::Ui;
use crate::endpoints::dispatch::remove_request;
use crate::endpoints::{ResolveOptions, fetch_directory, resolve};

/// Deletes an endpoint. The target must always be named explicitly, even
/// when the app has only one.
pub fn remove(
    session: &Session<'_>,
    request: &TargetRequest,
    ui: &mut Ui,
) -> Result<(), CertsError> {
    let app = session.app;
    let directory = fetch_directory(session.platform, app)?;
    let target = resolve(
        &request.query,
        &directory,
        ResolveOptions { require_name: true },
    )?;
    let call = remove_request(app, target)?;
    let label = target.label();
    info!("[certs-cmd] removing {label}");

    ui.confirm_app(
        app,
        request.confirm.as_deref(),
        &format!(
            "Potentially Destructive Action\nThis command will remove the endpoint {label} from {app}."
        ),
    )?;

    ui.action(&format!("Removing SSL Endpoint {label} from {app}"), || {
        session.platform.execute(&call)
    })?;
    Ok(())
}
