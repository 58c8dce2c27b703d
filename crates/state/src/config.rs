//! Translator configuration.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Environment variable selecting the [`DeletePolicy`].
pub const DELETE_POLICY_ENV: &str = "CHANGEFEED_DELETE_POLICY";

/// What a deleted row does to the rest of its change set.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeletePolicy {
    /// Stop at the first deletion and emit nothing for the whole change set.
    ///
    /// Matches what existing subscribers have always observed.
    #[default]
    DiscardBatch,
    /// Drop only the deleted row and keep translating the rest.
    SkipRecord,
}

impl DeletePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            DeletePolicy::DiscardBatch => "discard-batch",
            DeletePolicy::SkipRecord => "skip-record",
        }
    }
}

impl FromStr for DeletePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discard-batch" => Ok(DeletePolicy::DiscardBatch),
            "skip-record" => Ok(DeletePolicy::SkipRecord),
            _ => Err(ConfigError::InvalidDeletePolicy(s.to_string())),
        }
    }
}

impl core::fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub delete_policy: DeletePolicy,
}

impl TranslatorConfig {
    pub fn with_delete_policy(mut self, delete_policy: DeletePolicy) -> Self {
        self.delete_policy = delete_policy;
        self
    }

    /// Read configuration from the process environment.
    ///
    /// Invalid values are logged and replaced by defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let delete_policy = match lookup(DELETE_POLICY_ENV) {
            None => DeletePolicy::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err: ConfigError| {
                tracing::warn!(
                    "{err}; using {} for {DELETE_POLICY_ENV}",
                    DeletePolicy::default()
                );
                DeletePolicy::default()
            }),
        };

        Self { delete_policy }
    }
}
