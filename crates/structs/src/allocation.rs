use std::sync::Arc;

use serde::{Deserialize, Serialize};

use changefeed_core::Entity;

use crate::job::Job;

/// A placement of a task group onto a node.
///
/// The embedded `job` is shared with the store snapshot that produced the
/// allocation; it is immutable through this type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Allocation {
    #[serde(rename = "ID")]
    pub id: String,
    pub namespace: String,
    #[serde(rename = "EvalID")]
    pub eval_id: String,
    pub name: String,
    #[serde(rename = "NodeID")]
    pub node_id: String,
    #[serde(rename = "JobID")]
    pub job_id: String,
    #[serde(default)]
    pub job: Option<Arc<Job>>,
    pub task_group: String,
    #[serde(rename = "DeploymentID", default)]
    pub deployment_id: String,
    pub desired_status: String,
    pub client_status: String,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Allocation {
    pub fn new(
        id: impl Into<String>,
        namespace: impl Into<String>,
        job_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            namespace: namespace.into(),
            job_id: job_id.into(),
            desired_status: "run".to_string(),
            client_status: "pending".to_string(),
            ..Self::default()
        }
    }

    /// Owned copy of this allocation without the embedded job.
    ///
    /// The receiver is left untouched; the copy shares nothing mutable with it.
    pub fn copy_skip_job(&self) -> Allocation {
        Allocation {
            job: None,
            ..self.clone()
        }
    }
}

impl Entity for Allocation {
    fn id(&self) -> &str {
        &self.id
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }
}
