use serde::Deserialize;
use std::net::SocketAddr;

use crate::server::error::ServerError;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Configuration {
    #[serde(default)]
    pub server: ServerConfiguration,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfiguration {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/ui/`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Larger request bodies are rejected with 413 and not captured
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfiguration {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "./static".to_string()
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}

impl Configuration {
    pub fn new() -> Result<Self, ServerError> {
        let mut builder = config::Config::builder();

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(config::File::with_name("config"));
        }

        builder = builder.add_source(config::Environment::with_prefix("HOOKSCOPE").separator("__"));

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl ServerConfiguration {
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| ServerError::Configuration(format!("Invalid listen address {}: {}", addr, e)))
    }

    /// Address to show users; unspecified hosts are shown as localhost
    pub fn public_url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" => "localhost",
            host => host,
        };
        format!("http://{}:{}", host, self.port)
    }
}
