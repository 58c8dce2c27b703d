//! `changefeed-core` — identity primitives shared by the change feed crates.
//!
//! This crate contains **pure** building blocks (no IO, no storage concerns).

pub mod entity;
pub mod index;

pub use entity::Entity;
pub use index::Index;
