use super::enums::ListeningMethod;

value! {
    /// A quantity with its unit, e.g. `{"value": 60, "unit": "minutes"}`.
    pub struct Value(ValueBuilder) {
        unit: String,
        value: f64,
    }
}

value! {
    pub struct ClusterApi(ClusterApiBuilder) {
        url: String,
        listening: ListeningMethod,
    }
}

value! {
    pub struct ClusterConsole(ClusterConsoleBuilder) {
        url: String,
    }
}

value! {
    pub struct Dns(DnsBuilder) {
        base_domain: String,
    }
}

value! {
    /// Customer cloud subscription settings.
    pub struct Ccs(CcsBuilder) {
        enabled: bool,
        disable_scp_checks: bool,
    }
}

value! {
    pub struct DeleteProtection(DeleteProtectionBuilder) {
        enabled: bool,
    }
}

value! {
    /// Hosted control plane settings.
    pub struct Hypershift(HypershiftBuilder) {
        enabled: bool,
    }
}

value! {
    pub struct ExternalAuthConfig(ExternalAuthConfigBuilder) {
        enabled: bool,
    }
}

object! {
    pub struct CloudProvider(CloudProviderBuilder) = "CloudProvider" {
        name: String,
        display_name: String,
    }
}

object! {
    pub struct CloudRegion(CloudRegionBuilder) = "CloudRegion" {
        name: String,
        display_name: String,
        enabled: bool,
        supports_multi_az: bool,
        supports_hypershift: bool,
        cloud_provider: CloudProvider,
    }
}

object! {
    pub struct Product(ProductBuilder) = "Product" {
        name: String,
    }
}

object! {
    pub struct Flavour(FlavourBuilder) = "Flavour" {
        name: String,
    }
}

object! {
    pub struct Subscription(SubscriptionBuilder) = "Subscription" {}
}
