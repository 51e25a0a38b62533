use std::collections::BTreeMap;

use super::aws::AwsVolume;
use super::common::{CloudProvider, Value};

value! {
    /// Node counts and compute settings of a cluster.
    pub struct ClusterNodes(ClusterNodesBuilder) {
        compute: i32,
        infra: i32,
        master: i32,
        availability_zones: Vec<String>,
        compute_labels: BTreeMap<String, String>,
        compute_machine_type: MachineType,
        compute_root_volume: RootVolume,
        autoscale_compute: MachinePoolAutoscaling,
        security_group_filters: Vec<MachinePoolSecurityGroupFilter>,
    }
}

object! {
    pub struct MachinePoolAutoscaling(MachinePoolAutoscalingBuilder) = "MachinePoolAutoscaling" {
        min_replicas: i32,
        max_replicas: i32,
    }
}

value! {
    pub struct MachinePoolSecurityGroupFilter(MachinePoolSecurityGroupFilterBuilder) {
        id: String,
        name: String,
    }
}

value! {
    pub struct RootVolume(RootVolumeBuilder) {
        aws: AwsVolume,
    }
}

object! {
    pub struct MachineType(MachineTypeBuilder) = "MachineType" {
        name: String,
        category: String,
        size: String,
        architecture: String,
        generic_name: String,
        ccs_only: bool,
        cpu: Value,
        memory: Value,
        cloud_provider: CloudProvider,
    }
}

impl ClusterNodes {
    /// Compute nodes requested, either as a fixed count or as the autoscaling minimum.
    pub fn min_compute(&self) -> Option<i32> {
        self.compute.or_else(|| {
            self.autoscale_compute
                .as_ref()
                .and_then(|autoscaling| autoscaling.min_replicas)
        })
    }
}
