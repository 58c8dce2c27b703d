use serde::{Deserialize, Serialize};

use changefeed_core::Entity;

/// A scheduling evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Evaluation {
    #[serde(rename = "ID")]
    pub id: String,
    pub namespace: String,
    pub priority: i32,
    #[serde(rename = "Type")]
    pub eval_type: String,
    pub triggered_by: String,
    #[serde(rename = "JobID")]
    pub job_id: String,
    #[serde(rename = "NodeID", default)]
    pub node_id: String,
    #[serde(rename = "DeploymentID", default)]
    pub deployment_id: String,
    pub status: String,
    #[serde(default)]
    pub status_description: String,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Evaluation {
    pub fn new(
        id: impl Into<String>,
        namespace: impl Into<String>,
        job_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            namespace: namespace.into(),
            job_id: job_id.into(),
            priority: 50,
            eval_type: "service".to_string(),
            triggered_by: "job-register".to_string(),
            status: "pending".to_string(),
            ..Self::default()
        }
    }
}

impl Entity for Evaluation {
    fn id(&self) -> &str {
        &self.id
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }
}
