use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Server configuration for the file tools service
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address (default: 127.0.0.1)
    pub host: IpAddr,

    /// Listen port (default: 5000)
    pub port: u16,

    /// Maximum accepted upload size in bytes (default: 256 MB)
    pub max_file_size: usize,
}

/// Extra room on top of `max_file_size` for multipart boundaries and text fields
pub const MULTIPART_OVERHEAD: usize = 1024 * 1024;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
            max_file_size: 256 * 1024 * 1024, // 256 MB
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            host: env::var("HOST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.host),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),

            max_file_size: env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_file_size),
        }
    }

    /// Create config for development and tests (ephemeral port, small uploads)
    pub fn development() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            max_file_size: 8 * 1024 * 1024,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Request body limit: the file limit plus multipart framing
    pub fn body_limit(&self) -> usize {
        self.max_file_size.saturating_add(MULTIPART_OVERHEAD)
    }
}
