//! `changefeed-state` — turns committed store transactions into change feed events.
//!
//! The store calls [`Translator::translate`] once per commit with the full
//! [`ChangeSet`]; the resulting [`EventBatch`](changefeed_events::EventBatch)
//! is handed to the broker, directly or through a [`ChangePublisher`].

pub mod change;
pub mod config;
pub mod error;
pub mod message_type;
pub mod publisher;
pub mod translate;

pub use change::{Change, ChangeSet, Record, RecordKind, Table};
pub use config::{DeletePolicy, TranslatorConfig};
pub use error::{ConfigError, PublishError, TranslateError};
pub use message_type::{MessageType, UnknownTag};
pub use publisher::ChangePublisher;
pub use translate::{Translator, events_from_changes};
