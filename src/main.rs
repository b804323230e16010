use clinigraph::{Dashboard, DashboardConfig, Dataset, HttpServer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Clinigraph v{}", clinigraph::version());
    println!("==========================================");
    println!();

    // An explicit path wins over CLINIGRAPH_CONFIG
    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = DashboardConfig::from_env_or(path.as_deref())?;

    let dataset = Arc::new(Dataset::builtin());
    info!(
        profiles = dataset.profile_count(),
        axes = dataset.axes().len(),
        "Dataset loaded"
    );

    let dashboard = Arc::new(Dashboard::new(dataset, config));
    let server = HttpServer::new(dashboard);

    println!("✅ Dashboard ready. Press Ctrl+C to stop.");
    println!();

    server.start().await
}
