use serde::{Deserialize, Serialize};

use changefeed_core::Index;

use crate::Event;

/// All events produced from one committed transaction, in change order.
///
/// An empty batch is valid: the transaction touched nothing translatable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventBatch {
    index: Index,
    events: Vec<Event>,
}

impl EventBatch {
    pub fn new(index: Index, events: Vec<Event>) -> Self {
        Self { index, events }
    }

    pub fn empty(index: Index) -> Self {
        Self::new(index, Vec::new())
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl IntoIterator for EventBatch {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventBatch {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventType, Payload};
    use changefeed_structs::Job;
    use proptest::prelude::*;
    use std::sync::Arc;

    #[test]
    fn empty_batch_keeps_index() {
        let batch = EventBatch::empty(Index::new(5));
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
        assert_eq!(batch.index(), Index::new(5));
    }

    proptest! {
        /// Property: iteration yields events in insertion order.
        #[test]
        fn iteration_preserves_insertion_order(ids in prop::collection::vec("[a-z]{1,8}", 0..16)) {
            let index = Index::new(1);
            let events: Vec<Event> = ids
                .iter()
                .map(|id| {
                    let job = Arc::new(Job::new(id.clone(), "default"));
                    Event::new(EventType::JobRegistered, index, id.clone(), Payload::Job(job))
                })
                .collect();

            let batch = EventBatch::new(index, events);
            let keys: Vec<&str> = batch.iter().map(Event::key).collect();
            let expected: Vec<&str> = ids.iter().map(String::as_str).collect();
            prop_assert_eq!(keys, expected);
        }
    }
}
