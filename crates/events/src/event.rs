//! A single change feed event.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use changefeed_core::{Entity, Index};
use changefeed_structs::{Allocation, Deployment, Evaluation, Job, Node};

use crate::{EventType, NodeDrainEvent, Topic};

/// The domain object carried by an event.
///
/// Externally tagged on the wire (`{"Job": {...}}`, `{"Eval": {...}}`,
/// `{"Alloc": {...}}`, ...), so a subscriber can recover the concrete kind
/// without consulting the topic. The tags are part of the subscriber schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    Job(Arc<Job>),
    #[serde(rename = "Eval")]
    Evaluation(Arc<Evaluation>),
    /// Never carries the allocation's embedded job.
    #[serde(rename = "Alloc")]
    Allocation(Arc<Allocation>),
    Node(Arc<Node>),
    /// Published under the node topic.
    NodeDrain(Arc<NodeDrainEvent>),
    Deployment(Arc<Deployment>),
}

impl Payload {
    /// The only topic this payload kind may be published under.
    pub fn topic(&self) -> Topic {
        match self {
            Payload::Job(_) => Topic::Job,
            Payload::Evaluation(_) => Topic::Eval,
            Payload::Allocation(_) => Topic::Alloc,
            Payload::Node(_) | Payload::NodeDrain(_) => Topic::Node,
            Payload::Deployment(_) => Topic::Deployment,
        }
    }

    fn entity(&self) -> &dyn Entity {
        match self {
            Payload::Job(job) => &**job,
            Payload::Evaluation(eval) => &**eval,
            Payload::Allocation(alloc) => &**alloc,
            Payload::Node(node) => &**node,
            Payload::NodeDrain(drain) => &**drain,
            Payload::Deployment(deployment) => &**deployment,
        }
    }

    /// Identifier of the carried record.
    pub fn key(&self) -> &str {
        self.entity().id()
    }

    /// Namespace of the carried record, `None` for cluster-scoped records.
    pub fn namespace(&self) -> Option<&str> {
        self.entity().namespace()
    }

    pub fn as_job(&self) -> Option<&Job> {
        match self {
            Payload::Job(job) => Some(job),
            _ => None,
        }
    }

    pub fn as_evaluation(&self) -> Option<&Evaluation> {
        match self {
            Payload::Evaluation(eval) => Some(eval),
            _ => None,
        }
    }

    pub fn as_allocation(&self) -> Option<&Allocation> {
        match self {
            Payload::Allocation(alloc) => Some(alloc),
            _ => None,
        }
    }

    /// The node carried by a node or node-drain payload.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Payload::Node(node) => Some(node),
            Payload::NodeDrain(drain) => Some(&drain.node),
            _ => None,
        }
    }

    pub fn as_node_drain(&self) -> Option<&NodeDrainEvent> {
        match self {
            Payload::NodeDrain(drain) => Some(drain),
            _ => None,
        }
    }

    pub fn as_deployment(&self) -> Option<&Deployment> {
        match self {
            Payload::Deployment(deployment) => Some(deployment),
            _ => None,
        }
    }
}

/// A typed, topic-addressed event derived from one record change.
///
/// Notes:
/// - `topic` is derived from the payload at construction and cannot drift from it.
/// - An empty `namespace` means cluster-global.
/// - `filter_keys` carry related identifiers (parent job, deployment) so
///   subscribers can filter without decoding the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    topic: Topic,
    #[serde(rename = "Type")]
    event_type: EventType,
    index: Index,
    key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    namespace: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    filter_keys: Vec<String>,
    payload: Payload,
}

impl Event {
    pub fn new(
        event_type: EventType,
        index: Index,
        key: impl Into<String>,
        payload: Payload,
    ) -> Self {
        Self {
            topic: payload.topic(),
            event_type,
            index,
            key: key.into(),
            namespace: String::new(),
            filter_keys: Vec::new(),
            payload,
        }
    }

    /// Build an event keyed and namespaced by the payload's record.
    pub fn from_payload(event_type: EventType, index: Index, payload: Payload) -> Self {
        let key = payload.key().to_string();
        let namespace = payload.namespace().map(str::to_string).unwrap_or_default();
        Self::new(event_type, index, key, payload).with_namespace(namespace)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_filter_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// `None` when the event is cluster-global.
    pub fn namespace(&self) -> Option<&str> {
        if self.namespace.is_empty() {
            None
        } else {
            Some(&self.namespace)
        }
    }

    pub fn filter_keys(&self) -> &[String] {
        &self.filter_keys
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }
}
