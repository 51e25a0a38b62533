use ocm_client::{
    AddRequest, Connection, DeleteRequest, GetRequest, ListRequest, OcmError, ResourcePath,
};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::model::BreakGlassCredential;

/// Client for `/clusters/{id}/break_glass_credentials`.
#[derive(Debug, Clone)]
pub struct BreakGlassCredentialsClient {
    connection: Connection,
    path: ResourcePath,
}

impl BreakGlassCredentialsClient {
    pub(crate) fn new(connection: Connection, path: ResourcePath) -> Self {
        Self { connection, path }
    }

    pub fn list(&self) -> ListRequest<BreakGlassCredential> {
        ListRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn add(&self) -> AddRequest<BreakGlassCredential> {
        AddRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Revokes every credential of the cluster.
    pub fn delete(&self) -> DeleteRequest {
        DeleteRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn credential(&self, id: impl Into<String>) -> BreakGlassCredentialClient {
        BreakGlassCredentialClient {
            connection: self.connection.clone(),
            path: self.path.child(id),
        }
    }
}

/// Client for `/clusters/{id}/break_glass_credentials/{id}`.
#[derive(Debug, Clone)]
pub struct BreakGlassCredentialClient {
    connection: Connection,
    path: ResourcePath,
}

impl BreakGlassCredentialClient {
    pub fn get(&self) -> GetRequest<BreakGlassCredential> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Waits until the credential is issued and returns its kubeconfig.
    #[instrument(skip(self), fields(path = %self.path))]
    pub async fn poll_kubeconfig(
        &self,
        interval: Duration,
        timeout: Duration,
    ) -> Result<String, OcmError> {
        let response = self
            .get()
            .poll()
            .interval(interval)
            .predicate(|response| {
                response
                    .body()
                    .and_then(|credential| credential.issued_kubeconfig())
                    .is_some()
            })
            .start(timeout)
            .await?;

        debug!("Break glass credential issued");
        response
            .body()
            .and_then(|credential| credential.issued_kubeconfig())
            .map(str::to_string)
            .ok_or_else(|| OcmError::Decode("Issued credential has no kubeconfig".to_string()))
    }
}
