use serde::{Deserialize, Serialize};

use changefeed_core::Entity;

/// How allocations of a task group are moved off a draining node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MigrateStrategy {
    pub max_parallel: u32,
    pub health_check: String,
    /// Nanoseconds.
    pub min_healthy_time: i64,
    /// Nanoseconds.
    pub healthy_deadline: i64,
}

impl Default for MigrateStrategy {
    fn default() -> Self {
        Self {
            max_parallel: 1,
            health_check: "checks".to_string(),
            min_healthy_time: 10_000_000_000,
            healthy_deadline: 300_000_000_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskGroup {
    pub name: String,
    pub count: u32,
    #[serde(default)]
    pub migrate: Option<MigrateStrategy>,
}

/// A registered job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Job {
    #[serde(rename = "ID")]
    pub id: String,
    pub namespace: String,
    pub name: String,
    #[serde(rename = "Type")]
    pub job_type: String,
    pub priority: i32,
    pub status: String,
    pub stop: bool,
    #[serde(rename = "ParentID", default)]
    pub parent_id: String,
    #[serde(default)]
    pub datacenters: Vec<String>,
    #[serde(default)]
    pub task_groups: Vec<TaskGroup>,
    pub version: u64,
    pub create_index: u64,
    pub modify_index: u64,
    pub job_modify_index: u64,
}

impl Job {
    pub fn new(id: impl Into<String>, namespace: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            namespace: namespace.into(),
            job_type: "service".to_string(),
            priority: 50,
            status: "pending".to_string(),
            ..Self::default()
        }
    }
}

impl Entity for Job {
    fn id(&self) -> &str {
        &self.id
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }
}
