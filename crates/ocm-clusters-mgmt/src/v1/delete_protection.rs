use ocm_client::{Connection, GetRequest, ResourcePath, UpdateRequest};

use crate::model::DeleteProtection;

/// Client for `/clusters/{id}/delete_protection`.
#[derive(Debug, Clone)]
pub struct DeleteProtectionClient {
    connection: Connection,
    path: ResourcePath,
}

impl DeleteProtectionClient {
    pub(crate) fn new(connection: Connection, path: ResourcePath) -> Self {
        Self { connection, path }
    }

    pub fn get(&self) -> GetRequest<DeleteProtection> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn update(&self) -> UpdateRequest<DeleteProtection> {
        UpdateRequest::new(self.connection.clone(), self.path.clone())
    }
}
