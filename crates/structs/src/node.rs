use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use changefeed_core::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DrainStrategy {
    /// Nanoseconds; negative forces an immediate drain.
    pub deadline: i64,
    pub ignore_system_jobs: bool,
}

/// A client node. Nodes are cluster-scoped and carry no namespace.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub datacenter: String,
    #[serde(default)]
    pub node_class: String,
    pub status: String,
    #[serde(default)]
    pub status_description: String,
    pub scheduling_eligibility: String,
    pub drain: bool,
    #[serde(default)]
    pub drain_strategy: Option<DrainStrategy>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Node {
    pub fn new(id: impl Into<String>, datacenter: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            datacenter: datacenter.into(),
            status: "initializing".to_string(),
            scheduling_eligibility: "eligible".to_string(),
            ..Self::default()
        }
    }
}

impl Entity for Node {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_are_cluster_scoped() {
        let node = Node::new("node-1", "dc1");
        assert_eq!(Entity::id(&node), "node-1");
        assert_eq!(node.namespace(), None);
    }

    #[test]
    fn drain_strategy_is_optional_on_the_wire() {
        let mut node = Node::new("node-1", "dc1");
        node.drain = true;
        node.drain_strategy = Some(DrainStrategy {
            deadline: 60_000_000_000,
            ignore_system_jobs: false,
        });

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["DrainStrategy"]["Deadline"], 60_000_000_000i64);

        let mut json = json;
        json.as_object_mut().unwrap().remove("DrainStrategy");
        let back: Node = serde_json::from_value(json).unwrap();
        assert!(back.drain_strategy.is_none());
    }
}
