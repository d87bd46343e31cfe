use crate::config::AppConfig;
use crate::error::DumpError;
use crate::ports::{LegacyExtras, LogSink};
use crate::render;
use crate::snapshot::SnapshotBuilder;
use crate::types::delivery::Delivery;
use crate::types::message::InboundPushEvent;

/// Listener for messaging-client callbacks. Every callback produces exactly
/// one line on the sink, tagged with the configured component tag.
#[derive(Debug, Clone)]
pub struct MessagingService<L, S> {
    tag: String,
    prefix: String,
    builder: SnapshotBuilder<L>,
    sink: S,
}

impl<L, S> MessagingService<L, S>
where
    L: LegacyExtras,
    S: LogSink,
{
    pub fn new(config: &AppConfig, extras: L, sink: S) -> Self {
        Self {
            tag: config.tag.clone(),
            prefix: config.prefix.clone(),
            builder: SnapshotBuilder::new(extras),
            sink,
        }
    }

    pub fn on_create(&self) {
        self.log("onCreate");
    }

    pub fn on_destroy(&self) {
        self.log("onDestroy");
    }

    pub fn on_new_token(&self, token: &str) {
        self.log(&format!("onNewToken: {token}"));
    }

    pub fn on_message_received(&self, event: Option<&InboundPushEvent>) -> Result<(), DumpError> {
        let snapshot = self.builder.build(event).inspect_err(|err| {
            tracing::warn!(tag = %self.tag, %err, "dropping message");
        })?;
        let dump = render::render(&snapshot, &self.prefix);
        self.log(&format!("onMessageReceived: {dump}"));
        Ok(())
    }

    pub fn dispatch(&self, delivery: &Delivery) -> Result<(), DumpError> {
        match delivery {
            Delivery::Created => self.on_create(),
            Delivery::Destroyed => self.on_destroy(),
            Delivery::Message { message } => self.on_message_received(message.as_ref())?,
            Delivery::NewToken { token } => self.on_new_token(token),
        }
        Ok(())
    }

    fn log(&self, message: &str) {
        self.sink.write(&self.tag, message);
    }
}
