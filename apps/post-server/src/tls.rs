//! TLS material loading for the RPC listener.

use std::path::Path;
use std::sync::Arc;

use rustls::ServerConfig;
use rustls::pki_types::pem::PemObject;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};

use crate::config::TlsConfig;

#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("cannot read certificate chain {path}: {reason}")]
    Certificates { path: String, reason: String },

    #[error("no certificates found in {0}")]
    EmptyChain(String),

    #[error("cannot read private key {path}: {reason}")]
    PrivateKey { path: String, reason: String },

    #[error("invalid TLS configuration: {0}")]
    Config(#[from] rustls::Error),
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Build a rustls server configuration from the PEM files named in `config`.
pub fn load_server_config(config: &TlsConfig) -> Result<ServerConfig, TlsError> {
    let certificates = CertificateDer::pem_file_iter(&config.cert_path)
        .and_then(|iter| iter.collect::<Result<Vec<_>, _>>())
        .map_err(|e| TlsError::Certificates {
            path: display(&config.cert_path),
            reason: format!("{e:?}"),
        })?;
    if certificates.is_empty() {
        return Err(TlsError::EmptyChain(display(&config.cert_path)));
    }

    let certificates_len = certificates.len();

    let key = PrivateKeyDer::from_pem_file(&config.key_path).map_err(|e| TlsError::PrivateKey {
        path: display(&config.key_path),
        reason: format!("{e:?}"),
    })?;

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let server_config = ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()?
        .with_no_client_auth()
        .with_single_cert(certificates, key)?;

    tracing::info!(
        cert = %config.cert_path.display(),
        chain_len = certificates_len,
        "TLS material loaded"
    );
    Ok(server_config)
}
