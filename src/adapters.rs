use crate::error::FieldUnavailable;
use crate::ports;
use crate::types::message::InboundPushEvent;

/// Reads legacy extras from the bundle carried on the event.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundleExtras;

impl ports::LegacyExtras for BundleExtras {
    fn lookup_legacy_extra(
        &self,
        event: &InboundPushEvent,
        key: &str,
    ) -> Result<Option<String>, FieldUnavailable> {
        let bundle = event
            .bundle
            .as_ref()
            .ok_or_else(|| FieldUnavailable::new(key, "message carries no extras bundle"))?;
        Ok(bundle.get_string(key).map(str::to_string))
    }
}

/// Emits every line as an `info` event with the component tag attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ports::LogSink for TracingSink {
    fn write(&self, tag: &str, message: &str) {
        tracing::info!(target: "pushdump", tag, "{message}");
    }
}
