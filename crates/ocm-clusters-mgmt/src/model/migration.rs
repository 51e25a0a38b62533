use chrono::{DateTime, Utc};
use ocm_client::OcmError;
use serde::{Deserialize, Serialize};

use super::enums::{ClusterMigrationStateValue, ClusterMigrationType};

value! {
    /// Internal subnets used by OVN-Kubernetes after the migration.
    pub struct SdnToOvnClusterMigration(SdnToOvnClusterMigrationBuilder) {
        join_ipv4: String,
        masquerade_ipv4: String,
        transit_ipv4: String,
    }
}

value! {
    pub struct ClusterMigrationState(ClusterMigrationStateBuilder) {
        value: ClusterMigrationStateValue,
        description: String,
    }
}

/// A network or platform migration of a cluster. Unlike the generated types its
/// builder refuses to build without a migration type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterMigration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ClusterMigrationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ClusterMigrationState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdn_to_ovn: Option<SdnToOvnClusterMigration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_timestamp: Option<DateTime<Utc>>,
}

impl ClusterMigration {
    pub const KIND: &'static str = "ClusterMigration";
    pub const LINK_KIND: &'static str = "ClusterMigrationLink";

    pub fn link(id: impl Into<String>) -> Self {
        Self {
            kind: Some(Self::LINK_KIND.to_string()),
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn is_link(&self) -> bool {
        self.kind.as_deref() == Some(Self::LINK_KIND)
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.href.is_none()
            && self.cluster_id.is_none()
            && self.r#type.is_none()
            && self.state.is_none()
            && self.sdn_to_ovn.is_none()
            && self.creation_timestamp.is_none()
            && self.updated_timestamp.is_none()
    }

    pub fn builder() -> ClusterMigrationBuilder {
        ClusterMigrationBuilder::default()
    }

    pub fn to_builder(&self) -> ClusterMigrationBuilder {
        ClusterMigrationBuilder {
            link: self.is_link(),
            migration: Self {
                kind: None,
                ..self.clone()
            },
        }
    }

    /// True once the server reports the migration as completed.
    pub fn is_completed(&self) -> bool {
        self.state.as_ref().and_then(|state| state.value.as_ref())
            == Some(&ClusterMigrationStateValue::Completed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClusterMigrationBuilder {
    link: bool,
    migration: ClusterMigration,
}

impl ClusterMigrationBuilder {
    pub fn link(mut self, link: bool) -> Self {
        self.link = link;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.migration.id = Some(id.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.migration.href = Some(href.into());
        self
    }

    pub fn cluster_id(mut self, cluster_id: impl Into<String>) -> Self {
        self.migration.cluster_id = Some(cluster_id.into());
        self
    }

    pub fn r#type(mut self, migration_type: impl Into<ClusterMigrationType>) -> Self {
        self.migration.r#type = Some(migration_type.into());
        self
    }

    pub fn state(mut self, state: impl Into<ClusterMigrationState>) -> Self {
        self.migration.state = Some(state.into());
        self
    }

    pub fn sdn_to_ovn(mut self, sdn_to_ovn: impl Into<SdnToOvnClusterMigration>) -> Self {
        self.migration.sdn_to_ovn = Some(sdn_to_ovn.into());
        self
    }

    pub fn creation_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.migration.creation_timestamp = Some(timestamp);
        self
    }

    pub fn updated_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.migration.updated_timestamp = Some(timestamp);
        self
    }

    /// Fails when no migration type was given, the server rejects such requests.
    pub fn build(self) -> Result<ClusterMigration, OcmError> {
        if self.migration.r#type.is_none() && !self.link {
            return Err(OcmError::Config(
                "Cluster migration type is required".to_string(),
            ));
        }
        let kind = if self.link {
            ClusterMigration::LINK_KIND
        } else {
            ClusterMigration::KIND
        };
        Ok(ClusterMigration {
            kind: Some(kind.to_string()),
            ..self.migration
        })
    }
}

impl TryFrom<ClusterMigrationBuilder> for ClusterMigration {
    type Error = OcmError;

    fn try_from(builder: ClusterMigrationBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
