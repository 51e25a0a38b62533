use chrono::{DateTime, Utc};

use super::enums::BreakGlassCredentialStatus;

object! {
    /// A short lived kubeconfig for clusters that use an external authentication
    /// provider.
    pub struct BreakGlassCredential(BreakGlassCredentialBuilder) = "BreakGlassCredential" {
        username: String,
        kubeconfig: String,
        status: BreakGlassCredentialStatus,
        expiration_timestamp: DateTime<Utc>,
        revocation_timestamp: DateTime<Utc>,
    }
}

impl BreakGlassCredential {
    /// The kubeconfig, once the server has issued it.
    pub fn issued_kubeconfig(&self) -> Option<&str> {
        match self.status {
            Some(BreakGlassCredentialStatus::Issued) => self
                .kubeconfig
                .as_deref()
                .filter(|kubeconfig| !kubeconfig.is_empty()),
            _ => None,
        }
    }
}

object! {
    /// Admin credentials of a cluster installed with them.
    pub struct ClusterCredentials(ClusterCredentialsBuilder) = "ClusterCredentials" {
        kubeconfig: String,
        admin: AdminCredentials,
    }
}

value! {
    pub struct AdminCredentials(AdminCredentialsBuilder) {
        user: String,
        password: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kubeconfig_only_when_issued() {
        let pending: BreakGlassCredential = serde_json::from_value(json!({
            "kind": "BreakGlassCredential",
            "id": "c1",
            "username": "admin",
            "status": "created"
        }))
        .unwrap();
        assert_eq!(pending.issued_kubeconfig(), None);

        let issued = pending
            .to_builder()
            .status(BreakGlassCredentialStatus::Issued)
            .kubeconfig("apiVersion: v1")
            .build();
        assert_eq!(issued.issued_kubeconfig(), Some("apiVersion: v1"));
    }
}
