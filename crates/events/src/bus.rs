//! Broker seam: how translated batches leave this crate.
//!
//! The real fan-out (retention, per-topic ordering, backpressure, filtering
//! by topic or namespace) belongs to the broker. This module only fixes the
//! shape of the hand-off so the translator's caller can be written against a
//! trait and tested with [`InMemoryEventBus`](crate::InMemoryEventBus).

use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvError, RecvTimeoutError, TryRecvError};
use std::time::Duration;

use crate::{Event, EventBatch};

/// A subscriber's view of the published batches.
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// let subscription = bus.subscribe();
///
/// loop {
///     match subscription.recv_timeout(Duration::from_secs(1)) {
///         Ok(batch) => forward(batch)?,
///         Err(RecvTimeoutError::Timeout) => continue,
///         Err(RecvTimeoutError::Disconnected) => break,
///     }
/// }
/// ```
///
/// Intended for a single consuming thread.
#[derive(Debug)]
pub struct Subscription {
    receiver: Receiver<EventBatch>,
}

impl Subscription {
    pub fn new(receiver: Receiver<EventBatch>) -> Self {
        Self { receiver }
    }

    /// Block until the next batch is available.
    pub fn recv(&self) -> Result<EventBatch, RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a batch without blocking.
    pub fn try_recv(&self) -> Result<EventBatch, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a batch.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<EventBatch, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Every event currently queued, flattened across batches in index order.
    pub fn drain_events(&self) -> Vec<Event> {
        self.receiver.try_iter().flatten().collect()
    }
}

/// Hand-off of translated batches to the event broker.
///
/// `publish` may fail (bus closed, broker unavailable, batch out of order).
/// Translation is pure, so a caller that wants to retry re-reads the
/// transaction and translates again rather than caching the failed batch.
pub trait EventBus: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, batch: EventBatch) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription;
}

impl<B> EventBus for Arc<B>
where
    B: EventBus + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, batch: EventBatch) -> Result<(), Self::Error> {
        (**self).publish(batch)
    }

    fn subscribe(&self) -> Subscription {
        (**self).subscribe()
    }
}
