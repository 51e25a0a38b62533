use ocm_client::{Connection, GetRequest, OcmError, ResourcePath};
use std::time::Duration;
use tracing::{info, instrument};

use crate::model::{ClusterState, ClusterStatus};

/// Client for `/clusters/{id}/status`.
#[derive(Debug, Clone)]
pub struct ClusterStatusClient {
    connection: Connection,
    path: ResourcePath,
}

impl ClusterStatusClient {
    pub(crate) fn new(connection: Connection, path: ResourcePath) -> Self {
        Self { connection, path }
    }

    pub fn get(&self) -> GetRequest<ClusterStatus> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }

    /// Polls the status every `interval` until the cluster reaches `state`.
    #[instrument(skip(self), fields(path = %self.path))]
    pub async fn wait_for_state(
        &self,
        state: ClusterState,
        interval: Duration,
        timeout: Duration,
    ) -> Result<ClusterStatus, OcmError> {
        let expected = state.clone();
        let response = self
            .get()
            .poll()
            .interval(interval)
            .predicate(move |response| {
                response.body().and_then(|status| status.state.as_ref()) == Some(&expected)
            })
            .start(timeout)
            .await?;

        info!(%state, "Cluster reached state");
        response
            .into_body()
            .ok_or_else(|| OcmError::Decode("Cluster status response has no body".to_string()))
    }
}
