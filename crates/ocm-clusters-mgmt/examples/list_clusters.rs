//! Lists the ready clusters of the account and the newest installable version.
//!
//! ```sh
//! OCM_TOKEN=... RUST_LOG=ocm_client=debug cargo run --example list_clusters
//! ```

use anyhow::Context;
use ocm_client::{Connection, ConnectionOptions};
use ocm_clusters_mgmt::ClustersMgmtClient;
use ocm_clusters_mgmt::model::Version;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let connection = Connection::new(ConnectionOptions::default())?;
    let v1 = ClustersMgmtClient::new(connection).v1();

    let clusters = v1
        .clusters()
        .list()
        .search("state = 'ready'")
        .order("name asc")
        .send_all(100)
        .await
        .context("Failed to list clusters")?;

    for cluster in &clusters {
        println!(
            "{:<36} {:<30} {}",
            cluster.id.as_deref().unwrap_or("-"),
            cluster.name.as_deref().unwrap_or("-"),
            cluster.api_url().unwrap_or("-"),
        );
    }

    let versions = v1
        .versions()
        .list()
        .search("enabled = 'true' AND channel_group = 'stable'")
        .send_all(100)
        .await
        .context("Failed to list versions")?;
    if let Some(latest) = Version::latest(&versions) {
        println!("Latest version: {}", latest.raw_id.as_deref().unwrap_or("-"));
    }

    Ok(())
}
