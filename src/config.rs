//! Dashboard configuration
//!
//! Every field has a default, so a YAML file only needs to name what it
//! changes:
//!
//! ```yaml
//! server:
//!   port: 9000
//! layout:
//!   seed: 7
//! ```

use crate::error::{DashboardError, DashboardResult};
use clinigraph_layout::SpringLayoutConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the YAML configuration file
pub const CONFIG_ENV: &str = "CLINIGRAPH_CONFIG";

/// Environment variable overriding the listening port
pub const PORT_ENV: &str = "CLINIGRAPH_PORT";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub server: ServerConfig,
    pub layout: LayoutSettings,
    pub chart: ChartSettings,
}

/// HTTP listener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Spring layout parameters for the network view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Optimal node distance, in layout units
    pub k: f64,
    pub iterations: usize,
    /// Seed of the initial placement; fixed so a selection always draws the same
    pub seed: u64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            k: 0.5,
            iterations: 50,
            seed: 42,
        }
    }
}

impl LayoutSettings {
    pub fn spring_config(&self) -> SpringLayoutConfig {
        SpringLayoutConfig {
            k: Some(self.k),
            iterations: self.iterations,
            seed: self.seed,
            ..Default::default()
        }
    }
}

/// Chart sizes, in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub radar_size: f64,
    pub network_width: f64,
    pub network_height: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            radar_size: 600.0,
            network_width: 900.0,
            network_height: 700.0,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> DashboardResult<Self> {
        let config: DashboardConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML configuration file
    pub fn load(path: &Path) -> DashboardResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Configuration from [`CONFIG_ENV`] (or defaults), then [`PORT_ENV`]
    pub fn from_env() -> DashboardResult<Self> {
        Self::from_env_or(None)
    }

    /// Like [`from_env`](Self::from_env), but `path` wins over [`CONFIG_ENV`].
    /// [`PORT_ENV`] applies either way.
    pub fn from_env_or(path: Option<&Path>) -> DashboardResult<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let port = std::env::var(PORT_ENV).ok();
        Self::resolve(path.or(env_path.as_deref()), port.as_deref())
    }

    /// Load `path` (or defaults) and apply the port override
    pub fn resolve(path: Option<&Path>, port: Option<&str>) -> DashboardResult<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.with_port_override(port)
    }

    /// Replace the port when `port` is given
    pub fn with_port_override(mut self, port: Option<&str>) -> DashboardResult<Self> {
        if let Some(port) = port {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| DashboardError::Config(format!("invalid port '{}'", port)))?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if !(self.layout.k.is_finite() && self.layout.k > 0.0) {
            return Err(DashboardError::Config(format!(
                "layout.k must be a positive number, got {}",
                self.layout.k
            )));
        }
        let sizes = [
            ("chart.radar_size", self.chart.radar_size),
            ("chart.network_width", self.chart.network_width),
            ("chart.network_height", self.chart.network_height),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value >= 100.0) {
                return Err(DashboardError::Config(format!(
                    "{} must be at least 100 pixels, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// `address:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.address, self.server.port)
    }
}
