use ocm_client::{AddRequest, Connection, GetRequest, ListRequest, ResourcePath};

use crate::model::ClusterMigration;

/// Client for `/clusters/{id}/migrations`.
#[derive(Debug, Clone)]
pub struct MigrationsClient {
    connection: Connection,
    path: ResourcePath,
}

impl MigrationsClient {
    pub(crate) fn new(connection: Connection, path: ResourcePath) -> Self {
        Self { connection, path }
    }

    pub fn list(&self) -> ListRequest<ClusterMigration> {
        ListRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Requests a migration. Build the body with [`ClusterMigration::builder`], which
    /// insists on a migration type.
    pub fn add(&self) -> AddRequest<ClusterMigration> {
        AddRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn migration(&self, id: impl Into<String>) -> MigrationClient {
        MigrationClient {
            connection: self.connection.clone(),
            path: self.path.child(id),
        }
    }
}

/// Client for `/clusters/{id}/migrations/{id}`.
#[derive(Debug, Clone)]
pub struct MigrationClient {
    connection: Connection,
    path: ResourcePath,
}

impl MigrationClient {
    pub fn get(&self) -> GetRequest<ClusterMigration> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }
}
