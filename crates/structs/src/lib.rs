//! Records mutated by the state store.
//!
//! These mirror the store's row layout (PascalCase JSON field names) and are
//! treated as given: the change feed reads them, it never reshapes them
//! beyond what an event payload needs.

pub mod allocation;
pub mod deployment;
pub mod evaluation;
pub mod job;
pub mod node;

pub use allocation::Allocation;
pub use deployment::Deployment;
pub use evaluation::Evaluation;
pub use job::{Job, MigrateStrategy, TaskGroup};
pub use node::{DrainStrategy, Node};
