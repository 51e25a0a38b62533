use ocm_client::{
    AddRequest, Connection, DeleteRequest, GetRequest, ListRequest, OcmError, ResourcePath,
    UpdateRequest,
};
use tracing::instrument;

use crate::model::Label;

const LABEL_PAGE_SIZE: u32 = 100;

/// Client for `/clusters/{id}/external_configuration/labels`.
#[derive(Debug, Clone)]
pub struct LabelsClient {
    connection: Connection,
    path: ResourcePath,
}

impl LabelsClient {
    pub(crate) fn new(connection: Connection, path: ResourcePath) -> Self {
        Self { connection, path }
    }

    pub fn list(&self) -> ListRequest<Label> {
        ListRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn add(&self) -> AddRequest<Label> {
        AddRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn label(&self, id: impl Into<String>) -> LabelClient {
        LabelClient {
            connection: self.connection.clone(),
            path: self.path.child(id),
        }
    }

    /// Value of the label with the given key, if the cluster has one.
    #[instrument(skip(self))]
    pub async fn find_value(&self, key: &str) -> Result<Option<String>, OcmError> {
        let labels = self.list().send_all(LABEL_PAGE_SIZE).await?;
        Ok(labels
            .into_iter()
            .find(|label| label.key.as_deref() == Some(key))
            .and_then(|label| label.value))
    }
}

/// Client for `/clusters/{id}/external_configuration/labels/{id}`.
#[derive(Debug, Clone)]
pub struct LabelClient {
    connection: Connection,
    path: ResourcePath,
}

impl LabelClient {
    pub fn get(&self) -> GetRequest<Label> {
        GetRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn update(&self) -> UpdateRequest<Label> {
        UpdateRequest::new(self.connection.clone(), self.path.clone())
    }

    pub fn delete(&self) -> DeleteRequest {
        DeleteRequest::new(self.connection.clone(), self.path.clone())
    }
}
