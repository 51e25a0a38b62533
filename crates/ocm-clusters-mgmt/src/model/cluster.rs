use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::aws::Aws;
use super::common::{
    Ccs, CloudProvider, CloudRegion, ClusterApi, ClusterConsole, DeleteProtection, Dns,
    ExternalAuthConfig, Flavour, Hypershift, Product, Subscription, Value,
};
use super::enums::{BillingModel, ClusterHealthState, ClusterState};
use super::list::List;
use super::machine_pool::MachinePool;
use super::network::{Network, Proxy};
use super::nodes::ClusterNodes;
use super::status::ClusterStatus;
use super::version::Version;

object! {
    /// An OpenShift cluster managed by OCM.
    pub struct Cluster(ClusterBuilder) = "Cluster" {
        name: String,
        external_id: String,
        infra_id: String,
        domain_prefix: String,
        api: ClusterApi,
        aws: Aws,
        ccs: Ccs,
        dns: Dns,
        billing_model: BillingModel,
        cloud_provider: CloudProvider,
        console: ClusterConsole,
        creation_timestamp: DateTime<Utc>,
        expiration_timestamp: DateTime<Utc>,
        delete_protection: DeleteProtection,
        external_auth_config: ExternalAuthConfig,
        flavour: Flavour,
        health_state: ClusterHealthState,
        hypershift: Hypershift,
        load_balancer_quota: i32,
        machine_pools: List<MachinePool>,
        managed: bool,
        multi_az: bool,
        fips: bool,
        etcd_encryption: bool,
        disable_user_workload_monitoring: bool,
        multi_arch_enabled: bool,
        network: Network,
        node_drain_grace_period: Value,
        nodes: ClusterNodes,
        openshift_version: String,
        product: Product,
        properties: BTreeMap<String, String>,
        proxy: Proxy,
        region: CloudRegion,
        additional_trust_bundle: String,
        state: ClusterState,
        status: ClusterStatus,
        storage_quota: Value,
        subscription: Subscription,
        version: Version,
    }
}

impl Cluster {
    /// The cluster state, preferring the detailed status when the server sent it.
    pub fn state(&self) -> Option<&ClusterState> {
        self.status
            .as_ref()
            .and_then(|status| status.state.as_ref())
            .or(self.state.as_ref())
    }

    pub fn api_url(&self) -> Option<&str> {
        non_empty(self.api.as_ref().and_then(|api| api.url.as_deref()))
    }

    /// The web console URL, only present once the console is available.
    pub fn console_url(&self) -> Option<&str> {
        non_empty(self.console.as_ref().and_then(|console| console.url.as_deref()))
    }

    /// True for clusters with a hosted control plane.
    pub fn is_hypershift(&self) -> bool {
        self.hypershift
            .as_ref()
            .and_then(|hypershift| hypershift.enabled)
            .unwrap_or(false)
    }

    /// True for clusters that use AWS Security Token Service roles.
    pub fn is_sts(&self) -> bool {
        self.aws
            .as_ref()
            .and_then(|aws| aws.sts.as_ref())
            .is_some_and(|sts| sts.is_enabled())
    }

    /// The OIDC issuer, taken from the OIDC configuration when there is one.
    pub fn oidc_endpoint_url(&self) -> Option<&str> {
        let sts = self.aws.as_ref().and_then(|aws| aws.sts.as_ref())?;
        let from_config = sts
            .oidc_config
            .as_ref()
            .and_then(|config| config.issuer_url.as_deref());
        non_empty(from_config).or_else(|| non_empty(sts.oidc_endpoint_url.as_deref()))
    }

    /// True when the cluster uses an OIDC configuration that other clusters may share.
    pub fn is_oidc_config_reusable(&self) -> bool {
        self.aws
            .as_ref()
            .and_then(|aws| aws.sts.as_ref())
            .and_then(|sts| sts.oidc_config.as_ref())
            .and_then(|config| config.reusable)
            .unwrap_or(false)
    }

    pub fn is_delete_protected(&self) -> bool {
        self.delete_protection
            .as_ref()
            .and_then(|protection| protection.enabled)
            .unwrap_or(false)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
