use ocm_client::search::any_of;
use ocm_client::{AddRequest, Connection, ListRequest, OcmError, ResourcePath};
use tracing::{debug, instrument};

use super::cluster::ClusterClient;
use crate::model::Cluster;

/// Client for `/clusters`.
#[derive(Debug, Clone)]
pub struct ClustersClient {
    connection: Connection,
    path: ResourcePath,
}

impl ClustersClient {
    pub(crate) fn new(connection: Connection, path: ResourcePath) -> Self {
        Self { connection, path }
    }

    pub fn list(&self) -> ListRequest<Cluster> {
        ListRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Provisions a new cluster. The answer carries the cluster as accepted by the
    /// server, usually in the `pending` or `validating` state.
    pub fn add(&self) -> AddRequest<Cluster> {
        AddRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn cluster(&self, id: impl Into<String>) -> ClusterClient {
        ClusterClient::new(self.connection.clone(), self.path.child(id))
    }

    /// Looks a cluster up by identifier, name or external identifier.
    ///
    /// Fails with [`OcmError::NotFound`] when nothing matches and with
    /// [`OcmError::Ambiguous`] when more than one cluster does.
    #[instrument(skip(self))]
    pub async fn find(&self, key: &str) -> Result<Cluster, OcmError> {
        let search = any_of([("id", key), ("name", key), ("external_id", key)]);
        let response = self.list().search(search).page(1).size(1).send().await?;
        debug!(total = response.total, "Cluster lookup");

        match response.total {
            0 => Err(OcmError::NotFound(format!(
                "There is no cluster with identifier or name '{key}'"
            ))),
            1 => response.items.into_iter().next().ok_or_else(|| {
                OcmError::NotFound(format!(
                    "There is no cluster with identifier or name '{key}'"
                ))
            }),
            total => Err(OcmError::Ambiguous(format!(
                "There are {total} clusters with identifier or name '{key}'"
            ))),
        }
    }

    /// True when at least one cluster matches the search expression.
    #[instrument(skip(self))]
    pub async fn exists(&self, search: &str) -> Result<bool, OcmError> {
        let response = self.list().search(search).page(1).size(1).send().await?;
        Ok(response.total > 0)
    }
}
