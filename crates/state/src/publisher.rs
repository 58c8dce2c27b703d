//! Caller side of the translator: translate a commit, hand the batch to the bus.

use tracing::{debug, trace};

use changefeed_events::EventBus;

use crate::{ChangeSet, PublishError, Translator};

/// Translates committed change sets and publishes the resulting batches.
///
/// Empty batches are not published. Callers that need batches in index
/// order must call [`publish`](Self::publish) in commit order.
#[derive(Debug)]
pub struct ChangePublisher<B> {
    translator: Translator,
    bus: B,
}

impl<B> ChangePublisher<B>
where
    B: EventBus,
{
    pub fn new(translator: Translator, bus: B) -> Self {
        Self { translator, bus }
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Translate `changes` and publish the batch.
    ///
    /// Returns the number of events published (zero when nothing was
    /// translatable).
    pub fn publish(&self, changes: &ChangeSet) -> Result<usize, PublishError<B::Error>> {
        let batch = self.translator.translate(changes)?;
        if batch.is_empty() {
            trace!(index = %batch.index(), "nothing to publish");
            return Ok(0);
        }

        let index = batch.index();
        let count = batch.len();
        self.bus
            .publish(batch)
            .map_err(|cause| PublishError::Bus { index, cause })?;

        debug!(index = %index, events = count, "published change feed batch");
        Ok(count)
    }
}
