use ocm_client::{Connection, GetRequest, ListRequest, ResourcePath};

use crate::model::Version;

/// Client for `/versions`.
#[derive(Debug, Clone)]
pub struct VersionsClient {
    connection: Connection,
    path: ResourcePath,
}

impl VersionsClient {
    pub(crate) fn new(connection: Connection, path: ResourcePath) -> Self {
        Self { connection, path }
    }

    /// Lists versions. Filter with e.g. `enabled = 'true' AND channel_group = 'stable'`
    /// and pick the newest with [`Version::latest`].
    pub fn list(&self) -> ListRequest<Version> {
        ListRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn version(&self, id: impl Into<String>) -> VersionClient {
        VersionClient {
            connection: self.connection.clone(),
            path: self.path.child(id),
        }
    }
}

/// Client for `/versions/{id}`.
#[derive(Debug, Clone)]
pub struct VersionClient {
    connection: Connection,
    path: ResourcePath,
}

impl VersionClient {
    pub fn get(&self) -> GetRequest<Version> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }
}
