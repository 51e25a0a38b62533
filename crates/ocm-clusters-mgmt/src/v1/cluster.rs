use ocm_client::{
    ActionRequest, Connection, DeleteRequest, GetRequest, OcmError, ResourcePath, Response,
    UpdateRequest,
};

use super::break_glass::BreakGlassCredentialsClient;
use super::credentials::CredentialsClient;
use super::delete_protection::DeleteProtectionClient;
use super::labels::LabelsClient;
use super::machine_pools::MachinePoolsClient;
use super::migrations::MigrationsClient;
use super::status::ClusterStatusClient;
use crate::model::Cluster;

/// Client for `/clusters/{id}`.
#[derive(Debug, Clone)]
pub struct ClusterClient {
    connection: Connection,
    path: ResourcePath,
}

impl ClusterClient {
    pub(crate) fn new(connection: Connection, path: ResourcePath) -> Self {
        Self { connection, path }
    }

    pub fn get(&self) -> GetRequest<Cluster> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Changes the attributes set in the body, leaving the others untouched.
    pub fn update(&self) -> UpdateRequest<Cluster> {
        UpdateRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn delete(&self) -> ClusterDeleteRequest {
        ClusterDeleteRequest {
            request: DeleteRequest::new(self.connection.clone(), self.path.clone()),
        }
    }

    pub fn hibernate(&self) -> ActionRequest {
        ActionRequest::new(self.connection.clone(), self.path.child("hibernate"))
    }

    pub fn resume(&self) -> ActionRequest {
        ActionRequest::new(self.connection.clone(), self.path.child("resume"))
    }

    pub fn status(&self) -> ClusterStatusClient {
        ClusterStatusClient::new(self.connection.clone(), self.path.child("status"))
    }

    pub fn delete_protection(&self) -> DeleteProtectionClient {
        DeleteProtectionClient::new(
            self.connection.clone(),
            self.path.child("delete_protection"),
        )
    }

    pub fn labels(&self) -> LabelsClient {
        LabelsClient::new(
            self.connection.clone(),
            self.path.child("external_configuration").child("labels"),
        )
    }

    pub fn migrations(&self) -> MigrationsClient {
        MigrationsClient::new(self.connection.clone(), self.path.child("migrations"))
    }

    pub fn machine_pools(&self) -> MachinePoolsClient {
        MachinePoolsClient::new(self.connection.clone(), self.path.child("machine_pools"))
    }

    pub fn break_glass_credentials(&self) -> BreakGlassCredentialsClient {
        BreakGlassCredentialsClient::new(
            self.connection.clone(),
            self.path.child("break_glass_credentials"),
        )
    }

    pub fn credentials(&self) -> CredentialsClient {
        CredentialsClient::new(self.connection.clone(), self.path.child("credentials"))
    }
}

/// Deletion of a cluster with its uninstall options.
#[derive(Debug, Clone)]
pub struct ClusterDeleteRequest {
    request: DeleteRequest,
}

impl ClusterDeleteRequest {
    /// Ignore errors while cleaning up cloud resources.
    pub fn best_effort(self, best_effort: bool) -> Self {
        Self {
            request: self.request.parameter("best_effort", best_effort),
        }
    }

    /// When false the cluster is removed from OCM but its cloud resources are kept.
    pub fn deprovision(self, deprovision: bool) -> Self {
        Self {
            request: self.request.parameter("deprovision", deprovision),
        }
    }

    /// Validate the deletion without performing it.
    pub fn dry_run(self, dry_run: bool) -> Self {
        Self {
            request: self.request.parameter("dry_run", dry_run),
        }
    }

    pub fn parameter(self, name: &str, value: impl ToString) -> Self {
        Self {
            request: self.request.parameter(name, value),
        }
    }

    pub fn header(self, name: &str, value: &str) -> Self {
        Self {
            request: self.request.header(name, value),
        }
    }

    pub async fn send(&self) -> Result<Response<()>, OcmError> {
        self.request.send().await
    }
}
