//! # Model
//!
//! Types exchanged with `/api/clusters_mgmt/v1`.
//!
//! Every attribute is an `Option`: `None` means "not set" and is left out of the
//! JSON, `Some` is sent even when it holds a zero value. This matters for updates,
//! which are PATCH requests that change exactly the attributes present in the body.
//!
//! Objects with an identity (`kind`, `id`, `href`) can also be links, references
//! to existing objects that only carry an identifier:
//!
//! ```rust
//! use ocm_clusters_mgmt::model::{CloudRegion, Cluster, ClusterNodes, Product};
//!
//! let cluster = Cluster::builder()
//!     .name("my-cluster")
//!     .product(Product::link("rosa"))
//!     .region(CloudRegion::link("us-east-1"))
//!     .nodes(ClusterNodes::builder().compute(3))
//!     .build();
//! assert_eq!(cluster.kind.as_deref(), Some("Cluster"));
//! ```

#[macro_use]
mod macros;

mod aws;
mod cluster;
mod common;
mod credentials;
mod enums;
mod label;
mod list;
mod machine_pool;
mod migration;
mod network;
mod nodes;
mod status;
mod version;

pub use aws::{
    AuditLog, AuditLogBuilder, Aws, AwsBuilder, AwsEtcdEncryption, AwsEtcdEncryptionBuilder,
    AwsVolume, AwsVolumeBuilder, InstanceIamRoles, InstanceIamRolesBuilder, OidcConfig,
    OidcConfigBuilder, OperatorIamRole, OperatorIamRoleBuilder, Sts, StsBuilder,
};
pub use cluster::{Cluster, ClusterBuilder};
pub use common::{
    Ccs, CcsBuilder, CloudProvider, CloudProviderBuilder, CloudRegion, CloudRegionBuilder,
    ClusterApi, ClusterApiBuilder, ClusterConsole, ClusterConsoleBuilder, DeleteProtection,
    DeleteProtectionBuilder, Dns, DnsBuilder, ExternalAuthConfig, ExternalAuthConfigBuilder,
    Flavour, FlavourBuilder, Hypershift, HypershiftBuilder, Product, ProductBuilder,
    Subscription, SubscriptionBuilder, Value, ValueBuilder,
};
pub use credentials::{
    AdminCredentials, AdminCredentialsBuilder, BreakGlassCredential, BreakGlassCredentialBuilder,
    ClusterCredentials, ClusterCredentialsBuilder,
};
pub use enums::{
    BillingModel, BreakGlassCredentialStatus, ClusterHealthState, ClusterMigrationStateValue,
    ClusterMigrationType, ClusterState, ListeningMethod, TaintEffect,
};
pub use label::{Label, LabelBuilder};
pub use list::List;
pub use machine_pool::{MachinePool, MachinePoolBuilder, Taint, TaintBuilder};
pub use migration::{
    ClusterMigration, ClusterMigrationBuilder, ClusterMigrationState,
    ClusterMigrationStateBuilder, SdnToOvnClusterMigration, SdnToOvnClusterMigrationBuilder,
};
pub use network::{Network, NetworkBuilder, Proxy, ProxyBuilder};
pub use nodes::{
    ClusterNodes, ClusterNodesBuilder, MachinePoolAutoscaling, MachinePoolAutoscalingBuilder,
    MachinePoolSecurityGroupFilter, MachinePoolSecurityGroupFilterBuilder, MachineType,
    MachineTypeBuilder, RootVolume, RootVolumeBuilder,
};
pub use status::{ClusterStatus, ClusterStatusBuilder};
pub use version::{Version, VersionBuilder};
