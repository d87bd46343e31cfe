use crate::error::FieldUnavailable;
use crate::types::message::InboundPushEvent;

/// Key name of this crate's message model. The Firebase client SDK keeps the
/// same flag under `gcm.n.e`, of which `notification.n.e` is the old alias.
pub const ENABLE_NOTIFICATION: &str = "enable_notification";
/// Deprecated alias of [`ENABLE_NOTIFICATION`] still set by older senders.
pub const ENABLE_NOTIFICATION_OLD: &str = "notification.n.e";

/// Narrow access to the message's internal extras container.
///
/// `Ok(None)` means the container is readable but holds no string under
/// `key`. An `Err` means the container itself could not be reached.
pub trait LegacyExtras: Send + Sync {
    fn lookup_legacy_extra(
        &self,
        event: &InboundPushEvent,
        key: &str,
    ) -> Result<Option<String>, FieldUnavailable>;
}
