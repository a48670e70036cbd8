use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SERVICE_NAME: &str = "Rust Axum";

/// Default `EnvFilter` directives when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[derive(Parser, Debug, Clone)]
#[command(name = "welcome-backend")]
#[command(about = "Health check and welcome message server")]
pub struct Config {
    /// Port to listen on (all interfaces)
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Service name shown in the welcome message
    #[arg(long, env = "SERVICE_NAME", default_value = DEFAULT_SERVICE_NAME)]
    pub service_name: String,
}

impl Config {
    /// The host is always `0.0.0.0`; only the port is configurable.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
