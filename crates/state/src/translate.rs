//! Change set → event batch translation.
//!
//! One call translates one committed transaction:
//!
//! 1. **Classify** the write type into an event-type label. Unknown write
//!    types produce an empty batch.
//! 2. **Dispatch** every change by table, building at most one event each.
//!    Tables without a topic are skipped.
//! 3. **Assemble** the events, in change order, under the transaction index.
//!
//! A change whose after image is not the kind its table stores fails the
//! whole call. Deletions are never translated; what they do to the rest of
//! the change set is decided by [`DeletePolicy`].

use std::sync::Arc;

use tracing::{debug, trace};

use changefeed_core::Index;
use changefeed_events::{Event, EventBatch, EventType, Payload};

use crate::{
    Change, ChangeSet, DeletePolicy, Record, RecordKind, Table, TranslateError, TranslatorConfig,
};

/// Stateless translator from store change sets to change feed events.
///
/// Safe to share between threads; each call is independent.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate a committed change set into an event batch.
    ///
    /// Returns an empty batch (carrying the change set's index) when the
    /// write type is unrecognized, or when a deletion is met under
    /// [`DeletePolicy::DiscardBatch`].
    pub fn translate(&self, changes: &ChangeSet) -> Result<EventBatch, TranslateError> {
        let index = changes.index();

        let Some(event_type) = changes.msg_type().event_type() else {
            trace!(
                index = %index,
                msg_type = ?changes.msg_type(),
                "write type has no change feed events"
            );
            return Ok(EventBatch::empty(index));
        };

        let mut events = Vec::with_capacity(changes.len());
        for change in changes.iter() {
            let Some(expected) = change.table().record_kind() else {
                trace!(index = %index, table = %change.table(), "skipping change to table without topic");
                continue;
            };

            if change.deleted() {
                match self.config.delete_policy {
                    DeletePolicy::DiscardBatch => {
                        debug!(
                            index = %index,
                            table = %change.table(),
                            discarded = events.len(),
                            "deletion in change set; discarding batch"
                        );
                        return Ok(EventBatch::empty(index));
                    }
                    DeletePolicy::SkipRecord => {
                        trace!(index = %index, table = %change.table(), "skipping deleted row");
                        continue;
                    }
                }
            }

            events.push(event_from_change(change, expected, event_type, index)?);
        }

        debug!(
            index = %index,
            event_type = %event_type,
            changes = changes.len(),
            events = events.len(),
            "translated change set"
        );

        Ok(EventBatch::new(index, events))
    }
}

/// Translate with the default configuration.
pub fn events_from_changes(changes: &ChangeSet) -> Result<EventBatch, TranslateError> {
    Translator::default().translate(changes)
}

fn event_from_change(
    change: &Change,
    expected: RecordKind,
    event_type: EventType,
    index: Index,
) -> Result<Event, TranslateError> {
    let event = match (change.table(), change.after()) {
        (Table::Evals, Some(Record::Evaluation(eval))) => Event::from_payload(
            event_type,
            index,
            Payload::Evaluation(Arc::clone(eval)),
        ),

        (Table::Allocs, Some(Record::Allocation(after))) => {
            // Never mutate the snapshot image; the job is dropped from a copy.
            let alloc = after.copy_skip_job();
            let filter_keys = [alloc.job_id.clone(), alloc.deployment_id.clone()];

            Event::from_payload(event_type, index, Payload::Allocation(Arc::new(alloc)))
                .with_filter_keys(filter_keys)
        }

        (Table::Jobs, Some(Record::Job(job))) => {
            Event::from_payload(event_type, index, Payload::Job(Arc::clone(job)))
        }

        // Nodes are cluster-scoped: no namespace, no filter keys.
        (Table::Nodes, Some(Record::Node(node))) => {
            Event::from_payload(event_type, index, Payload::Node(Arc::clone(node)))
        }

        (Table::Deployment, Some(Record::Deployment(deployment))) => Event::from_payload(
            event_type,
            index,
            Payload::Deployment(Arc::clone(deployment)),
        )
        .with_filter_keys([deployment.job_id.clone()]),

        (table, after) => {
            return Err(TranslateError::UnexpectedRecord {
                table: table.clone(),
                expected,
                found: after.map_or("none", |record| record.kind().as_str()),
            });
        }
    };

    Ok(event)
}
