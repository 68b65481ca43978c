pub mod add;
pub mod chain;
pub mod info;
pub mod list;
pub mod remove;
pub mod rollback;
pub mod update;

use std::path::Path;

use log::info;

use crate::api::{ChainRepair, PlatformApi};
use crate::core::error::CertsError;
use crate::core::types::CertificateMaterial;
use crate::display::{Ui, certificate_details};
use crate::endpoints::Outcome;
use crate::material::load_material;

pub use add::add;
pub use chain::{chain, key};
pub use info::info;
pub use list::list;
pub use remove::remove;
pub use rollback::rollback;
pub use update::update;

/// Collaborators of one invocation against one app.
pub struct Session<'a> {
    pub app: &'a str,
    pub platform: &'a dyn PlatformApi,
    pub doctor: &'a dyn ChainRepair,
}

/// Reads the certificate and key, then runs them through the chain repair
/// service unless `bypass` is set. The repaired pair replaces the input.
fn prepare_material(
    session: &Session<'_>,
    ui: &mut Ui,
    crt: &Path,
    key: &Path,
    bypass: bool,
) -> Result<CertificateMaterial, CertsError> {
    let material = load_material(crt, key)?;
    if bypass {
        info!("[certs-cmd] chain repair bypassed");
        return Ok(material);
    }
    ui.action("Resolving trust chain", || {
        session.doctor.resolve_chain_and_key(&material)
    })
}

fn show_outcome(ui: &mut Ui, outcome: &Outcome, heading: &str) {
    ui.warnings(&outcome.warnings);
    ui.print(heading);
    ui.print(&certificate_details(&outcome.endpoint));
}
