use crate::error::DumpError;
use crate::ports::{ENABLE_NOTIFICATION, ENABLE_NOTIFICATION_OLD, LegacyExtras};
use crate::types::message::{
    InboundPushEvent, NotificationPayload, PRIORITY_HIGH, PRIORITY_NORMAL, PRIORITY_UNKNOWN,
};

const ENABLE_NOTIFICATION_LABEL: &str = "enable_notification(ENABLE_NOTIFICATION)";
const ENABLE_NOTIFICATION_OLD_LABEL: &str = "notification.n.e(ENABLE_NOTIFICATION (OLD))";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Absent,
    Text(String),
    Integer(i64),
    Flag(bool),
    List(Vec<String>),
    Priority {
        raw: i32,
        symbol: Option<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: FieldValue,
}

impl Field {
    fn new(label: &'static str, value: FieldValue) -> Self {
        Self { label, value }
    }
}

/// Structural copy of one inbound message, in canonical field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSnapshot {
    header: Vec<Field>,
    data: Vec<(String, String)>,
    details: Vec<Field>,
    notification: Option<Vec<Field>>,
    legacy_extras: [Field; 2],
}

impl MessageSnapshot {
    /// senderId, from, to.
    pub fn header(&self) -> &[Field] {
        &self.header
    }

    pub fn data(&self) -> &[(String, String)] {
        &self.data
    }

    /// collapseKey through priority.
    pub fn details(&self) -> &[Field] {
        &self.details
    }

    pub fn notification(&self) -> Option<&[Field]> {
        self.notification.as_deref()
    }

    pub fn legacy_extras(&self) -> &[Field; 2] {
        &self.legacy_extras
    }
}

pub fn priority_symbol(raw: i32) -> Option<&'static str> {
    match raw {
        PRIORITY_UNKNOWN => Some("PRIORITY_UNKNOWN"),
        PRIORITY_HIGH => Some("PRIORITY_HIGH"),
        PRIORITY_NORMAL => Some("PRIORITY_NORMAL"),
        _ => None,
    }
}

/// Turns inbound events into snapshots. The extras lookup is fixed at
/// construction and reused for every event.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder<L> {
    extras: L,
}

impl<L: LegacyExtras> SnapshotBuilder<L> {
    pub fn new(extras: L) -> Self {
        Self { extras }
    }

    pub fn build(&self, event: Option<&InboundPushEvent>) -> Result<MessageSnapshot, DumpError> {
        let event = event.ok_or(DumpError::InvalidInput)?;

        let header = vec![
            Field::new("getSenderId", text(event.sender_id.as_deref())),
            Field::new("getFrom", text(event.from.as_deref())),
            Field::new("to", text(event.to.as_deref())),
        ];

        let data = event
            .data
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        let details = vec![
            Field::new("getCollapseKey", text(event.collapse_key.as_deref())),
            Field::new("getMessageId", text(event.message_id.as_deref())),
            Field::new("getMessageType", text(event.message_type.as_deref())),
            Field::new("getSentTime", FieldValue::Integer(event.sent_time)),
            Field::new("getTtl", FieldValue::Integer(event.ttl.into())),
            Field::new(
                "getOriginalPriority",
                FieldValue::Integer(event.original_priority.into()),
            ),
            Field::new(
                "getPriority",
                FieldValue::Priority {
                    raw: event.priority,
                    symbol: priority_symbol(event.priority),
                },
            ),
        ];

        let notification = event.notification.as_ref().map(notification_fields);

        let legacy_extras = [
            Field::new(
                ENABLE_NOTIFICATION_LABEL,
                self.legacy_extra(event, ENABLE_NOTIFICATION),
            ),
            Field::new(
                ENABLE_NOTIFICATION_OLD_LABEL,
                self.legacy_extra(event, ENABLE_NOTIFICATION_OLD),
            ),
        ];

        Ok(MessageSnapshot {
            header,
            data,
            details,
            notification,
            legacy_extras,
        })
    }

    fn legacy_extra(&self, event: &InboundPushEvent, key: &str) -> FieldValue {
        match self.extras.lookup_legacy_extra(event, key) {
            Ok(value) => text(value.as_deref()),
            Err(err) => {
                tracing::debug!(%err, "legacy extra unavailable");
                FieldValue::Absent
            }
        }
    }
}

fn notification_fields(notification: &NotificationPayload) -> Vec<Field> {
    vec![
        Field::new("getTitle", text(notification.title.as_deref())),
        Field::new(
            "getTitleLocalizationKey",
            text(notification.title_localization_key.as_deref()),
        ),
        Field::new(
            "getTitleLocalizationArgs",
            list(notification.title_localization_args.as_deref()),
        ),
        Field::new("getBody", text(notification.body.as_deref())),
        Field::new(
            "getBodyLocalizationKey",
            text(notification.body_localization_key.as_deref()),
        ),
        Field::new(
            "getBodyLocalizationArgs",
            list(notification.body_localization_args.as_deref()),
        ),
        Field::new("getIcon", text(notification.icon.as_deref())),
        Field::new("getImageUrl", text(notification.image_url.as_deref())),
        Field::new("getSound", text(notification.sound.as_deref())),
        Field::new("getTag", text(notification.tag.as_deref())),
        Field::new("getColor", text(notification.color.as_deref())),
        Field::new("getClickAction", text(notification.click_action.as_deref())),
        Field::new("getChannelId", text(notification.channel_id.as_deref())),
        Field::new("getLink", text(notification.link.as_deref())),
        Field::new("getTicker", text(notification.ticker.as_deref())),
        Field::new("getSticky", FieldValue::Flag(notification.sticky)),
        Field::new("getLocalOnly", FieldValue::Flag(notification.local_only)),
        Field::new("getDefaultSound", FieldValue::Flag(notification.default_sound)),
        Field::new(
            "getDefaultVibrateSettings",
            FieldValue::Flag(notification.default_vibrate_settings),
        ),
        Field::new(
            "getDefaultLightSettings",
            FieldValue::Flag(notification.default_light_settings),
        ),
        Field::new(
            "getNotificationPriority",
            integer(notification.notification_priority.map(i64::from)),
        ),
        Field::new(
            "getVisibility",
            integer(notification.visibility.map(i64::from)),
        ),
        Field::new(
            "getNotificationCount",
            integer(notification.notification_count.map(i64::from)),
        ),
        Field::new("getEventTime", integer(notification.event_time)),
        Field::new("getLightSettings", list(notification.light_settings.as_deref())),
        Field::new(
            "getVibrateTimings",
            list(notification.vibrate_timings.as_deref()),
        ),
    ]
}

fn text(value: Option<&str>) -> FieldValue {
    match value {
        Some(value) => FieldValue::Text(value.to_string()),
        None => FieldValue::Absent,
    }
}

fn integer(value: Option<i64>) -> FieldValue {
    match value {
        Some(value) => FieldValue::Integer(value),
        None => FieldValue::Absent,
    }
}

fn list<T: ToString>(values: Option<&[T]>) -> FieldValue {
    match values {
        Some(values) => FieldValue::List(values.iter().map(ToString::to_string).collect()),
        None => FieldValue::Absent,
    }
}
