use super::Session;
use crate::core::error::CertsError;
use crate::display::{Ui, endpoint_table};
use crate::endpoints::fetch_directory;

/// Prints every endpoint of the app that carries a certificate.
pub fn list(session: &Session<'_>, ui: &mut Ui) -> Result<(), CertsError> {
    let app = session.app;
    let directory = fetch_directory(session.platform, app)?;
    match endpoint_table(directory.iter()) {
        Some(table) => ui.print(&table),
        None => {
            ui.print(&format!("{app} has no SSL certificates."));
            ui.print("Use heroku certs:add CRT KEY to add one.");
        }
    }
    Ok(())
}
