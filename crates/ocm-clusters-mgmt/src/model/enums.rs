string_enum! {
    /// Overall state of a cluster.
    pub enum ClusterState {
        Error = "error",
        Hibernating = "hibernating",
        Installing = "installing",
        Pending = "pending",
        PoweringDown = "powering_down",
        Ready = "ready",
        Resuming = "resuming",
        Uninstalling = "uninstalling",
        Unknown = "unknown",
        Validating = "validating",
        Waiting = "waiting",
    }
}

impl ClusterState {
    /// States a cluster never leaves on its own.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Ready | Self::Error | Self::Hibernating)
    }
}

string_enum! {
    pub enum ClusterHealthState {
        Healthy = "healthy",
        Unhealthy = "unhealthy",
        Unknown = "unknown",
    }
}

string_enum! {
    pub enum BillingModel {
        Standard = "standard",
        Marketplace = "marketplace",
        MarketplaceAws = "marketplace-aws",
        MarketplaceAzure = "marketplace-azure",
        MarketplaceGcp = "marketplace-gcp",
        MarketplaceRhm = "marketplace-rhm",
    }
}

string_enum! {
    /// Whether the API or ingress is reachable from outside the cluster network.
    pub enum ListeningMethod {
        External = "external",
        Internal = "internal",
    }
}

string_enum! {
    pub enum ClusterMigrationType {
        SdnToOvn = "sdnToOvn",
    }
}

string_enum! {
    pub enum ClusterMigrationStateValue {
        Scheduled = "scheduled",
        InProgress = "in_progress",
        Completed = "completed",
    }
}

string_enum! {
    pub enum BreakGlassCredentialStatus {
        Created = "created",
        Issued = "issued",
        Expired = "expired",
        Failed = "failed",
        AwaitingRevocation = "awaiting_revocation",
        Revoked = "revoked",
    }
}

string_enum! {
    pub enum TaintEffect {
        NoSchedule = "NoSchedule",
        PreferNoSchedule = "PreferNoSchedule",
        NoExecute = "NoExecute",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value() {
        let state: ClusterState = serde_json::from_str(r#""powering_down""#).unwrap();
        assert_eq!(state, ClusterState::PoweringDown);
        assert_eq!(serde_json::to_string(&state).unwrap(), r#""powering_down""#);
    }

    #[test]
    fn test_unknown_value_is_kept() {
        let state: ClusterState = serde_json::from_str(r#""rebooting""#).unwrap();
        assert_eq!(state, ClusterState::Other("rebooting".to_string()));
        assert_eq!(state.to_string(), "rebooting");
        assert_eq!(serde_json::to_string(&state).unwrap(), r#""rebooting""#);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(TaintEffect::from("NoSchedule"), TaintEffect::NoSchedule);
        assert_eq!(
            TaintEffect::from("noschedule"),
            TaintEffect::Other("noschedule".to_string())
        );
    }

    #[test]
    fn test_final_states() {
        assert!(ClusterState::Ready.is_final());
        assert!(!ClusterState::Installing.is_final());
        assert!(!ClusterState::Other("x".to_string()).is_final());
    }
}
