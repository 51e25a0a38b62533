use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A collection embedded in another object, e.g. the machine pools of a cluster.
///
/// The server often sends only the link (`kind` ending in `ListLink` and an
/// `href`), in which case `items` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(serialize = "T: Serialize", deserialize = "T: DeserializeOwned"))]
pub struct List<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<T>>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            kind: None,
            href: None,
            items: None,
        }
    }
}

impl<T> List<T> {
    pub fn is_link(&self) -> bool {
        self.kind.as_deref().is_some_and(|kind| kind.ends_with("ListLink"))
    }

    /// The embedded items, empty when only the link was sent.
    pub fn items(&self) -> &[T] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            kind: None,
            href: None,
            items: Some(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MachinePool;
    use serde_json::json;

    #[test]
    fn test_list_link() {
        let list: List<MachinePool> = serde_json::from_value(json!({
            "kind": "MachinePoolListLink",
            "href": "/api/clusters_mgmt/v1/clusters/abc/machine_pools"
        }))
        .unwrap();
        assert!(list.is_link());
        assert!(list.is_empty());
        assert_eq!(list.items(), &[] as &[MachinePool]);
    }

    #[test]
    fn test_list_with_items() {
        let list: List<MachinePool> = serde_json::from_value(json!({
            "kind": "MachinePoolList",
            "items": [{"kind": "MachinePool", "id": "workers", "replicas": 2}]
        }))
        .unwrap();
        assert!(!list.is_link());
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].replicas, Some(2));
    }

    #[test]
    fn test_from_vec_serializes_items_only() {
        let list = List::from(vec![MachinePool::link("workers")]);
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({"items": [{"kind": "MachinePoolLink", "id": "workers"}]})
        );
    }
}
