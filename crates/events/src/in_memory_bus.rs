//! In-memory bus for tests and single-process wiring.

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use changefeed_core::Index;

use crate::EventBatch;
use crate::bus::{EventBus, Subscription};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InMemoryBusError {
    /// The bus state lock was poisoned by a panicking publisher.
    #[error("in-memory bus lock poisoned")]
    Poisoned,

    /// Batches must arrive in strictly increasing index order.
    #[error("batch index {found} does not follow last published index {last}")]
    OutOfOrder { last: Index, found: Index },
}

#[derive(Debug, Default)]
struct BusState {
    subscribers: Vec<mpsc::Sender<EventBatch>>,
    last_index: Option<Index>,
}

/// Fan-out bus backed by one mpsc channel per subscriber.
///
/// - No IO / no async
/// - Empty batches are accepted but not delivered
/// - A batch whose index does not exceed the last delivered one is rejected
/// - Subscribers whose receiver was dropped are pruned on the next delivery
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    state: Mutex<BusState>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscribers as of the last delivery.
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().map(|s| s.subscribers.len()).unwrap_or(0)
    }

    /// Index of the last batch delivered to subscribers.
    pub fn last_index(&self) -> Option<Index> {
        self.state.lock().ok().and_then(|s| s.last_index)
    }
}

impl EventBus for InMemoryEventBus {
    type Error = InMemoryBusError;

    fn publish(&self, batch: EventBatch) -> Result<(), Self::Error> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut state = self.state.lock().map_err(|_| InMemoryBusError::Poisoned)?;

        let found = batch.index();
        if let Some(last) = state.last_index {
            if found <= last {
                return Err(InMemoryBusError::OutOfOrder { last, found });
            }
        }
        state.last_index = Some(found);

        state.subscribers.retain(|tx| tx.send(batch.clone()).is_ok());

        Ok(())
    }

    fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock still yields a subscription; it never receives.
        if let Ok(mut state) = self.state.lock() {
            state.subscribers.push(tx);
        }

        Subscription::new(rx)
    }
}
