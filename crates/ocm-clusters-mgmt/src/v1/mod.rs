//! Resource clients of `/api/clusters_mgmt/v1`.

mod break_glass;
mod cluster;
mod clusters;
mod credentials;
mod delete_protection;
mod labels;
mod machine_pools;
mod migrations;
mod status;
mod versions;

pub use break_glass::{BreakGlassCredentialClient, BreakGlassCredentialsClient};
pub use cluster::{ClusterClient, ClusterDeleteRequest};
pub use clusters::ClustersClient;
pub use credentials::CredentialsClient;
pub use delete_protection::DeleteProtectionClient;
pub use labels::{LabelClient, LabelsClient};
pub use machine_pools::{MachinePoolClient, MachinePoolsClient};
pub use migrations::{MigrationClient, MigrationsClient};
pub use status::ClusterStatusClient;
pub use versions::{VersionClient, VersionsClient};

use ocm_client::{Connection, ResourcePath};

/// Root of version 1 of the service.
#[derive(Debug, Clone)]
pub struct Client {
    connection: Connection,
    path: ResourcePath,
}

impl Client {
    pub(crate) fn new(connection: Connection, path: ResourcePath) -> Self {
        Self { connection, path }
    }

    pub fn clusters(&self) -> ClustersClient {
        ClustersClient::new(self.connection.clone(), self.path.child("clusters"))
    }

    pub fn versions(&self) -> VersionsClient {
        VersionsClient::new(self.connection.clone(), self.path.child("versions"))
    }
}
