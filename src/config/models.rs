use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Served under `/static/`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// Served under `/images/`
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            static_dir: default_static_dir(),
            images_dir: default_images_dir(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

/// Upstream artist API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request deadline. Unset means wait indefinitely.
    pub request_timeout_ms: Option<u64>,
    pub connect_timeout_ms: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Fail non-2xx responses instead of decoding their bodies
    #[serde(default)]
    pub check_status: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: None,
            connect_timeout_ms: None,
            user_agent: default_user_agent(),
            check_status: false,
        }
    }
}

fn default_base_url() -> String {
    "https://groupietrackers.herokuapp.com/api".to_string()
}

fn default_user_agent() -> String {
    "groupie/0.1.0".to_string()
}
