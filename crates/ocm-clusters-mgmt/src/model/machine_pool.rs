use std::collections::BTreeMap;

use super::enums::TaintEffect;
use super::nodes::{MachinePoolAutoscaling, RootVolume};

object! {
    /// A group of compute nodes sharing an instance type and placement.
    pub struct MachinePool(MachinePoolBuilder) = "MachinePool" {
        replicas: i32,
        instance_type: String,
        autoscaling: MachinePoolAutoscaling,
        availability_zones: Vec<String>,
        subnets: Vec<String>,
        labels: BTreeMap<String, String>,
        taints: Vec<Taint>,
        root_volume: RootVolume,
    }
}

value! {
    pub struct Taint(TaintBuilder) {
        key: String,
        value: String,
        effect: TaintEffect,
    }
}

impl MachinePool {
    pub fn is_autoscaling(&self) -> bool {
        self.autoscaling.is_some()
    }
}
