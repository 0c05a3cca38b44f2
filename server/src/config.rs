use std::net::{IpAddr, SocketAddr};

use clap::Parser;

/// Server settings. Each flag falls back to its environment variable, which
/// `main` may have populated from a `.env` file.
#[derive(Debug, Clone, Parser)]
#[command(name = "car-registry", version, about = "Car registry API server")]
pub struct ServerConfig {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "SERVER_PORT", default_value_t = 8880)]
    pub port: u16,

    /// `tracing` filter directive, e.g. `info` or `car_dao=debug,info`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr { SocketAddr::new(self.host, self.port) }
}
