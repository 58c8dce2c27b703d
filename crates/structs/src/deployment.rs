use serde::{Deserialize, Serialize};

use changefeed_core::Entity;

/// A rollout of a specific job version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deployment {
    #[serde(rename = "ID")]
    pub id: String,
    pub namespace: String,
    #[serde(rename = "JobID")]
    pub job_id: String,
    pub job_version: u64,
    pub status: String,
    #[serde(default)]
    pub status_description: String,
    pub create_index: u64,
    pub modify_index: u64,
}

impl Deployment {
    pub fn new(
        id: impl Into<String>,
        namespace: impl Into<String>,
        job_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            namespace: namespace.into(),
            job_id: job_id.into(),
            status: "running".to_string(),
            ..Self::default()
        }
    }
}

impl Entity for Deployment {
    fn id(&self) -> &str {
        &self.id
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }
}
