//! Row-level mutations committed by the store.

use std::sync::Arc;

use changefeed_core::Index;
use changefeed_structs::{Allocation, Deployment, Evaluation, Job, Node};

use crate::MessageType;

/// Store table a change belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Table {
    Evals,
    Allocs,
    Jobs,
    Nodes,
    Deployment,
    /// Any table without a change feed topic (job summaries, indexes, ACLs, ...).
    Other(String),
}

impl Table {
    pub fn as_str(&self) -> &str {
        match self {
            Table::Evals => "evals",
            Table::Allocs => "allocs",
            Table::Jobs => "jobs",
            Table::Nodes => "nodes",
            Table::Deployment => "deployment",
            Table::Other(name) => name,
        }
    }

    /// Record kind stored in this table, `None` for tables without a topic.
    pub fn record_kind(&self) -> Option<RecordKind> {
        match self {
            Table::Evals => Some(RecordKind::Evaluation),
            Table::Allocs => Some(RecordKind::Allocation),
            Table::Jobs => Some(RecordKind::Job),
            Table::Nodes => Some(RecordKind::Node),
            Table::Deployment => Some(RecordKind::Deployment),
            Table::Other(_) => None,
        }
    }
}

impl From<&str> for Table {
    fn from(name: &str) -> Self {
        match name {
            "evals" => Table::Evals,
            "allocs" => Table::Allocs,
            "jobs" => Table::Jobs,
            "nodes" => Table::Nodes,
            "deployment" => Table::Deployment,
            other => Table::Other(other.to_string()),
        }
    }
}

impl core::fmt::Display for Table {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image of a row before or after a transaction.
///
/// Images are shared with every other reader of the transaction snapshot,
/// hence the `Arc`s: the translator may hand them on but never mutate them.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Job(Arc<Job>),
    Evaluation(Arc<Evaluation>),
    Allocation(Arc<Allocation>),
    Node(Arc<Node>),
    Deployment(Arc<Deployment>),
    /// Row of a table this crate does not model.
    Raw(serde_json::Value),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Job,
    Evaluation,
    Allocation,
    Node,
    Deployment,
    Raw,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Job => "Job",
            RecordKind::Evaluation => "Evaluation",
            RecordKind::Allocation => "Allocation",
            RecordKind::Node => "Node",
            RecordKind::Deployment => "Deployment",
            RecordKind::Raw => "raw row",
        }
    }
}

impl core::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Job(_) => RecordKind::Job,
            Record::Evaluation(_) => RecordKind::Evaluation,
            Record::Allocation(_) => RecordKind::Allocation,
            Record::Node(_) => RecordKind::Node,
            Record::Deployment(_) => RecordKind::Deployment,
            Record::Raw(_) => RecordKind::Raw,
        }
    }
}

macro_rules! impl_record_from {
    ($variant:ident, $t:ty) => {
        impl From<Arc<$t>> for Record {
            fn from(value: Arc<$t>) -> Self {
                Record::$variant(value)
            }
        }

        impl From<$t> for Record {
            fn from(value: $t) -> Self {
                Record::$variant(Arc::new(value))
            }
        }
    };
}

impl_record_from!(Job, Job);
impl_record_from!(Evaluation, Evaluation);
impl_record_from!(Allocation, Allocation);
impl_record_from!(Node, Node);
impl_record_from!(Deployment, Deployment);

impl From<serde_json::Value> for Record {
    fn from(value: serde_json::Value) -> Self {
        Record::Raw(value)
    }
}

/// One row-level mutation inside a transaction.
///
/// Follows the store's convention: an insert has no `before`, a delete has no
/// `after`, an update has both.
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    table: Table,
    before: Option<Record>,
    after: Option<Record>,
}

impl Change {
    pub fn new(table: impl Into<Table>, before: Option<Record>, after: Option<Record>) -> Self {
        Self {
            table: table.into(),
            before,
            after,
        }
    }

    /// Insert or update with only the resulting row known.
    pub fn upsert(table: impl Into<Table>, after: impl Into<Record>) -> Self {
        Self::new(table, None, Some(after.into()))
    }

    pub fn update(
        table: impl Into<Table>,
        before: impl Into<Record>,
        after: impl Into<Record>,
    ) -> Self {
        Self::new(table, Some(before.into()), Some(after.into()))
    }

    pub fn delete(table: impl Into<Table>, before: impl Into<Record>) -> Self {
        Self::new(table, Some(before.into()), None)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn before(&self) -> Option<&Record> {
        self.before.as_ref()
    }

    pub fn after(&self) -> Option<&Record> {
        self.after.as_ref()
    }

    pub fn created(&self) -> bool {
        self.before.is_none() && self.after.is_some()
    }

    pub fn deleted(&self) -> bool {
        self.before.is_some() && self.after.is_none()
    }
}

/// Every change committed by one transaction, in commit order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeSet {
    msg_type: MessageType,
    index: Index,
    changes: Vec<Change>,
}

impl ChangeSet {
    pub fn new(msg_type: MessageType, index: u64, changes: Vec<Change>) -> Self {
        Self {
            msg_type,
            index: Index::new(index),
            changes,
        }
    }

    pub fn msg_type(&self) -> MessageType {
        self.msg_type
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }
}
