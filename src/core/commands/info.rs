use super::Session;
use crate::core::error::CertsError;
use crate::core::types::ResolutionQuery;
use crate::display::{Ui, certificate_details};
use crate::endpoints::dispatch::info_request;
use crate::endpoints::{ResolveOptions, fetch_directory, resolve};

pub fn info(session: &Session<'_>, query: &ResolutionQuery, ui: &mut Ui) -> Result<(), CertsError> {
    let app = session.app;
    let directory = fetch_directory(session.platform, app)?;
    let target = resolve(query, &directory, ResolveOptions::default())?;
    let call = info_request(app, target)?;

    let endpoint = ui.action(
        &format!("Fetching SSL Endpoint {} info for {app}", target.label()),
        || session.platform.execute(&call),
    )?;

    ui.print("Certificate details:");
    ui.print(&certificate_details(&endpoint));
    Ok(())
}
