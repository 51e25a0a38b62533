use std::collections::BTreeMap;

value! {
    /// AWS settings of a cluster.
    pub struct Aws(AwsBuilder) {
        account_id: String,
        access_key_id: String,
        secret_access_key: String,
        billing_account_id: String,
        subnet_ids: Vec<String>,
        private_link: bool,
        private_hosted_zone_id: String,
        private_hosted_zone_role_arn: String,
        additional_allowed_principals: Vec<String>,
        additional_compute_security_group_ids: Vec<String>,
        additional_infra_security_group_ids: Vec<String>,
        additional_control_plane_security_group_ids: Vec<String>,
        tags: BTreeMap<String, String>,
        audit_log: AuditLog,
        sts: Sts,
        etcd_encryption: AwsEtcdEncryption,
    }
}

value! {
    /// Security Token Service settings, present on clusters that use short lived
    /// credentials.
    pub struct Sts(StsBuilder) {
        enabled: bool,
        auto_mode: bool,
        managed_policies: bool,
        role_arn: String,
        support_role_arn: String,
        external_id: String,
        oidc_endpoint_url: String,
        operator_role_prefix: String,
        instance_iam_roles: InstanceIamRoles,
        operator_iam_roles: Vec<OperatorIamRole>,
        oidc_config: OidcConfig,
    }
}

value! {
    pub struct InstanceIamRoles(InstanceIamRolesBuilder) {
        master_role_arn: String,
        worker_role_arn: String,
    }
}

value! {
    pub struct OperatorIamRole(OperatorIamRoleBuilder) {
        name: String,
        namespace: String,
        role_arn: String,
        service_account: String,
    }
}

object! {
    pub struct OidcConfig(OidcConfigBuilder) = "OidcConfig" {
        issuer_url: String,
        managed: bool,
        reusable: bool,
        secret_arn: String,
        installer_role_arn: String,
    }
}

value! {
    pub struct AuditLog(AuditLogBuilder) {
        role_arn: String,
    }
}

value! {
    pub struct AwsEtcdEncryption(AwsEtcdEncryptionBuilder) {
        kms_key_arn: String,
    }
}

value! {
    pub struct AwsVolume(AwsVolumeBuilder) {
        /// Size in GiB.
        size: i32,
        iops: i32,
        throughput: i32,
    }
}

impl Sts {
    /// An STS cluster is one with an installer role.
    pub fn is_enabled(&self) -> bool {
        self.role_arn.as_deref().is_some_and(|arn| !arn.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_builders() {
        let aws = Aws::builder()
            .account_id("123456789012")
            .subnet_ids(vec!["subnet-1".to_string(), "subnet-2".to_string()])
            .sts(
                Sts::builder()
                    .role_arn("arn:aws:iam::123456789012:role/Installer")
                    .instance_iam_roles(
                        InstanceIamRoles::builder()
                            .worker_role_arn("arn:aws:iam::123456789012:role/Worker"),
                    ),
            )
            .build();

        assert_eq!(
            serde_json::to_value(&aws).unwrap(),
            json!({
                "account_id": "123456789012",
                "subnet_ids": ["subnet-1", "subnet-2"],
                "sts": {
                    "role_arn": "arn:aws:iam::123456789012:role/Installer",
                    "instance_iam_roles": {
                        "worker_role_arn": "arn:aws:iam::123456789012:role/Worker"
                    }
                }
            })
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let sts: Sts = serde_json::from_value(json!({
            "role_arn": "arn",
            "permission_boundary": "something new"
        }))
        .unwrap();
        assert_eq!(sts.role_arn.as_deref(), Some("arn"));
        assert!(sts.is_enabled());
    }

    #[test]
    fn test_empty_role_is_not_sts() {
        assert!(!Sts::builder().role_arn("").build().is_enabled());
        assert!(!Sts::default().is_enabled());
    }
}
