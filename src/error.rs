//! Error types shared across the dashboard

use thiserror::Error;

/// Errors that can occur while validating input or rendering the dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(#[from] clinigraph_layout::LayoutError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DashboardError {
    /// Whether the error was caused by a user selection rather than by the server
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DashboardError::UnknownProfile(_) | DashboardError::UnknownCategory(_)
        )
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
