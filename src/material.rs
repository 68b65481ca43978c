use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::error::CertsError;
use crate::core::types::CertificateMaterial;

/// Reads a file as text, exactly as stored.
pub fn read_text(path: &Path) -> Result<String, CertsError> {
    let bytes = fs::read(path).map_err(|source| CertsError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("[certs-material] read {} bytes from {}", bytes.len(), path.display());
    String::from_utf8(bytes).map_err(|_| CertsError::InvalidMaterial(path.to_path_buf()))
}

/// Loads the certificate chain and private key named on the command line.
pub fn load_material(crt: &Path, key: &Path) -> Result<CertificateMaterial, CertsError> {
    let chain = read_text(crt)?;
    let key = read_text(key)?;
    Ok(CertificateMaterial::new(chain, key))
}

pub fn read_all(paths: &[PathBuf]) -> Result<Vec<String>, CertsError> {
    paths.iter().map(|path| read_text(path)).collect()
}
