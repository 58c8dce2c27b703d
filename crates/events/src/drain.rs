//! Node drain payload: the draining node plus a summary of what runs on it.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use changefeed_core::Entity;
use changefeed_structs::{Allocation, MigrateStrategy, Node};

/// One allocation being moved off a draining node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeDrainAllocDetails {
    #[serde(rename = "ID")]
    pub id: String,
    /// Migrate block of the allocation's task group, if the job sets one.
    #[serde(default)]
    pub migrate: Option<MigrateStrategy>,
}

/// Allocations of one job on the draining node, keyed by allocation ID.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobDrainDetails {
    /// Job type (`service`, `batch`, `system`); empty if the job was not embedded.
    #[serde(rename = "Type")]
    pub job_type: String,
    pub alloc_details: BTreeMap<String, NodeDrainAllocDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeDrainEvent {
    pub node: Arc<Node>,
    /// Keyed by job ID.
    pub job_allocs: BTreeMap<String, JobDrainDetails>,
}

impl NodeDrainEvent {
    /// Summarise the allocations placed on `node`, grouped by job.
    ///
    /// Allocations placed on other nodes are ignored. Job type and migrate
    /// strategy come from each allocation's embedded job.
    pub fn from_allocs<'a>(
        node: Arc<Node>,
        allocs: impl IntoIterator<Item = &'a Allocation>,
    ) -> Self {
        let mut job_allocs: BTreeMap<String, JobDrainDetails> = BTreeMap::new();

        for alloc in allocs.into_iter().filter(|a| a.node_id == node.id) {
            let job = alloc.job.as_deref();
            let details = job_allocs.entry(alloc.job_id.clone()).or_default();
            if details.job_type.is_empty() {
                if let Some(job) = job {
                    details.job_type = job.job_type.clone();
                }
            }

            let migrate = job
                .and_then(|job| job.task_groups.iter().find(|tg| tg.name == alloc.task_group))
                .and_then(|tg| tg.migrate.clone());

            details.alloc_details.insert(
                alloc.id.clone(),
                NodeDrainAllocDetails {
                    id: alloc.id.clone(),
                    migrate,
                },
            );
        }

        Self { node, job_allocs }
    }
}

impl Entity for NodeDrainEvent {
    fn id(&self) -> &str {
        &self.node.id
    }
}
