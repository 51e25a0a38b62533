//! # Clusters Management
//!
//! Client for the `clusters_mgmt/v1` service of the OpenShift Cluster Manager.
//!
//! Resource clients mirror the URL structure of the API: each one is a cheap handle
//! holding the [`Connection`] and its path, and hands out typed requests from
//! [`ocm_client`] that are configured and then sent.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ocm_client::{Connection, ConnectionOptions};
//! use ocm_clusters_mgmt::ClustersMgmtClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ocm_client::OcmError> {
//!     let connection = Connection::new(ConnectionOptions::default())?;
//!     let clusters = ClustersMgmtClient::new(connection).v1().clusters();
//!
//!     let cluster = clusters.find("my-cluster").await?;
//!     println!("{:?} is {:?}", cluster.name, cluster.state());
//!
//!     let ready = clusters
//!         .list()
//!         .search("state = 'ready'")
//!         .order("creation_timestamp desc")
//!         .send_all(100)
//!         .await?;
//!     println!("{} ready clusters", ready.len());
//!     Ok(())
//! }
//! ```

pub mod model;
pub mod v1;

use ocm_client::{Connection, ResourcePath};

/// Entry point to the clusters management service.
#[derive(Debug, Clone)]
pub struct ClustersMgmtClient {
    connection: Connection,
    path: ResourcePath,
}

impl ClustersMgmtClient {
    pub fn new(connection: Connection) -> Self {
        Self {
            connection,
            path: ResourcePath::new(["api", "clusters_mgmt"]),
        }
    }

    pub fn v1(&self) -> v1::Client {
        v1::Client::new(self.connection.clone(), self.path.child("v1"))
    }
}
