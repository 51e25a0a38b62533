use ocm_client::{
    AddRequest, Connection, DeleteRequest, GetRequest, ListRequest, ResourcePath, UpdateRequest,
};

use crate::model::MachinePool;

/// Client for `/clusters/{id}/machine_pools`.
#[derive(Debug, Clone)]
pub struct MachinePoolsClient {
    connection: Connection,
    path: ResourcePath,
}

impl MachinePoolsClient {
    pub(crate) fn new(connection: Connection, path: ResourcePath) -> Self {
        Self { connection, path }
    }

    pub fn list(&self) -> ListRequest<MachinePool> {
        ListRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn add(&self) -> AddRequest<MachinePool> {
        AddRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn machine_pool(&self, id: impl Into<String>) -> MachinePoolClient {
        MachinePoolClient {
            connection: self.connection.clone(),
            path: self.path.child(id),
        }
    }
}

/// Client for `/clusters/{id}/machine_pools/{id}`.
#[derive(Debug, Clone)]
pub struct MachinePoolClient {
    connection: Connection,
    path: ResourcePath,
}

impl MachinePoolClient {
    pub fn get(&self) -> GetRequest<MachinePool> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn update(&self) -> UpdateRequest<MachinePool> {
        UpdateRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn delete(&self) -> DeleteRequest {
        DeleteRequest::new(self.connection.clone(), self.path.clone())
    }
}
