value! {
    pub struct Network(NetworkBuilder) {
        /// `OVNKubernetes` or `OpenShiftSDN`.
        r#type: String,
        machine_cidr: String,
        service_cidr: String,
        pod_cidr: String,
        host_prefix: i32,
    }
}

value! {
    pub struct Proxy(ProxyBuilder) {
        http_proxy: String,
        https_proxy: String,
        no_proxy: String,
    }
}
