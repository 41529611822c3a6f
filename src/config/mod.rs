use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::auth::Role;
use crate::errors::Result;


/// Address of the server under test. The driver speaks plain HTTP to a
/// fixed loopback host and port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_http_port(),
        }
    }
}

/// Basic-auth credential pair for one role, as written in the harness YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub role: Role,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarnessConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub credentials: Vec<Credential>,
}

/// The externally loaded API specification. Only `basePath` is consumed:
/// the prefix every resource-oriented call lives under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSpec {
    #[serde(rename = "basePath")]
    pub base_path: String,
}

impl Default for ApiSpec {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    9088
}

fn default_base_path() -> String {
    "/api/v1".to_string()
}

pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<HarnessConfig> {
    let f = File::open(path)?;
    Ok(serde_yaml::from_reader(f)?)
}

/// Load the swagger document the control plane serves, keeping the part the
/// driver needs.
pub fn load_spec_from_path<P: AsRef<Path>>(path: P) -> Result<ApiSpec> {
    let f = File::open(path)?;
    Ok(serde_json::from_reader(f)?)
}
