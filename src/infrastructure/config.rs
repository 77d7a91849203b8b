use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub tls: TlsSettings,
    /// Directory holding the viewer page served at `/`
    pub static_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TlsSettings {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

/// Load settings from built-in defaults, then `config/server.*`, then `TRIP__*` env vars.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    build_config(
        config::File::with_name("config/server").required(false),
        config::Environment::with_prefix("TRIP").separator("__"),
    )
}

fn build_config<F, E>(file: F, env: E) -> anyhow::Result<AppConfig>
where
    F: config::Source + Send + Sync + 'static,
    E: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("tls.cert_path", "certs/cert.pem")?
        .set_default("tls.key_path", "certs/key.pem")?
        .set_default("static_dir", "static")?
        .add_source(file)
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize()?)
}
