use ocm_client::{Connection, GetRequest, ResourcePath};

use crate::model::ClusterCredentials;

/// Client for `/clusters/{id}/credentials`.
#[derive(Debug, Clone)]
pub struct CredentialsClient {
    connection: Connection,
    path: ResourcePath,
}

impl CredentialsClient {
    pub(crate) fn new(connection: Connection, path: ResourcePath) -> Self {
        Self { connection, path }
    }

    pub fn get(&self) -> GetRequest<ClusterCredentials> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }
}
