object! {
    /// A key/value pair attached to a cluster's external configuration.
    pub struct Label(LabelBuilder) = "Label" {
        key: String,
        value: String,
        internal: bool,
    }
}
