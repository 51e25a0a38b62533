use super::enums::ClusterState;

object! {
    /// Detailed status of a cluster, served under `/clusters/{id}/status`.
    pub struct ClusterStatus(ClusterStatusBuilder) = "ClusterStatus" {
        state: ClusterState,
        description: String,
        dns_ready: bool,
        oidc_ready: bool,
        provision_error_code: String,
        provision_error_message: String,
        limited_support_reason_count: i32,
        configuration_mode: String,
    }
}

impl ClusterStatus {
    /// The provisioning error as `code: message`, when the cluster reported one.
    pub fn provision_error(&self) -> Option<String> {
        let code = self.provision_error_code.as_deref().filter(|c| !c.is_empty());
        let message = self
            .provision_error_message
            .as_deref()
            .filter(|m| !m.is_empty());
        match (code, message) {
            (Some(code), Some(message)) => Some(format!("{code}: {message}")),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_from_json() {
        let status: ClusterStatus = serde_json::from_value(json!({
            "kind": "ClusterStatus",
            "id": "abc",
            "href": "/api/clusters_mgmt/v1/clusters/abc/status",
            "state": "error",
            "dns_ready": true,
            "provision_error_code": "OCM3055",
            "provision_error_message": "Invalid subnet"
        }))
        .unwrap();

        assert_eq!(status.state, Some(ClusterState::Error));
        assert_eq!(status.dns_ready, Some(true));
        assert_eq!(status.oidc_ready, None);
        assert_eq!(
            status.provision_error().as_deref(),
            Some("OCM3055: Invalid subnet")
        );
    }

    #[test]
    fn test_no_provision_error() {
        assert_eq!(ClusterStatus::default().provision_error(), None);
        let partial = ClusterStatus::builder().provision_error_code("OCM1").build();
        assert_eq!(partial.provision_error().as_deref(), Some("OCM1"));
    }
}
