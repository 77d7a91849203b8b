// TLS setup for the HTTPS listener
use crate::infrastructure::config::TlsSettings;
use anyhow::Context;
use axum_server::tls_rustls::RustlsConfig;

/// Load the PEM certificate chain and private key named in the settings.
///
/// Certificates are provisioned outside the service; a self-signed pair is fine
/// for LAN use, browsers only need a secure context to share geolocation.
pub async fn load_rustls_config(settings: &TlsSettings) -> anyhow::Result<RustlsConfig> {
    RustlsConfig::from_pem_file(&settings.cert_path, &settings.key_path)
        .await
        .with_context(|| {
            format!(
                "Failed to load TLS certificate {} / key {}",
                settings.cert_path.display(),
                settings.key_path.display()
            )
        })
}
