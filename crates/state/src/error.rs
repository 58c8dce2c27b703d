//! Error types for translation, configuration and publishing.

use thiserror::Error;

use changefeed_core::Index;

use crate::{RecordKind, Table};

/// Translation failure. The whole change set is rejected; no partial batch
/// is ever returned alongside it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// A change's after image does not hold the record kind its table stores.
    #[error("transaction change for table {table} was not {expected} (found {found})")]
    UnexpectedRecord {
        table: Table,
        expected: RecordKind,
        found: &'static str,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid delete policy {0:?} (expected \"discard-batch\" or \"skip-record\")")]
    InvalidDeletePolicy(String),
}

/// Failure to get a change set from the store onto the bus.
#[derive(Debug, Error)]
pub enum PublishError<E>
where
    E: core::fmt::Debug,
{
    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error("event bus rejected batch at index {index}: {cause:?}")]
    Bus { index: Index, cause: E },
}
