use std::path::{Path, PathBuf};

use crate::api::ChainRepair;
use crate::core::error::CertsError;
use crate::display::Ui;
use crate::material::{read_all, read_text};

/// Prints the ordered, completed chain built from the given certificates.
pub fn chain(doctor: &dyn ChainRepair, crts: &[PathBuf], ui: &mut Ui) -> Result<(), CertsError> {
    let chains = read_all(crts)?;
    let pem = ui.action("Resolving trust chain", || {
        doctor.resolve_chain(&chains)
    })?;
    ui.print(pem.trim_end());
    Ok(())
}

/// Prints the key among `keys` that matches the chain built from `crt`.
pub fn key(
    doctor: &dyn ChainRepair,
    crt: &Path,
    keys: &[PathBuf],
    ui: &mut Ui,
) -> Result<(), CertsError> {
    let chain = read_text(crt)?;
    let keys = read_all(keys)?;
    let key = ui.action("Testing for signing key", || {
        doctor.resolve_key(&chain, &keys)
    })?;
    ui.print(key.trim_end());
    Ok(())
}
