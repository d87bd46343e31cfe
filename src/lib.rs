pub mod adapters;
pub mod config;
pub mod error;
pub mod ports;
pub mod render;
pub mod service;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod test_support;

pub use error::{DumpError, FieldUnavailable};
pub use render::{render, render_default};
pub use service::MessagingService;
pub use snapshot::{MessageSnapshot, SnapshotBuilder};
pub use types::message::{InboundPushEvent, NotificationPayload};
