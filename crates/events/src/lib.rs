//! Change feed events: the subscriber-facing schema and the broker seam.

pub mod batch;
pub mod bus;
pub mod drain;
pub mod event;
pub mod event_type;
pub mod in_memory_bus;
pub mod topic;

pub use batch::EventBatch;
pub use bus::{EventBus, Subscription};
pub use drain::{JobDrainDetails, NodeDrainAllocDetails, NodeDrainEvent};
pub use event::{Event, Payload};
pub use event_type::EventType;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use topic::Topic;
