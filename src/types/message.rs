use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

pub const PRIORITY_UNKNOWN: i32 = 0;
pub const PRIORITY_HIGH: i32 = 1;
pub const PRIORITY_NORMAL: i32 = 2;

/// Inbound push message as handed over by the messaging client.
///
/// The `bundle` is the client's internal extras container. The core never
/// reads it directly; see [`crate::ports::LegacyExtras`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InboundPushEvent {
    pub sender_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub data: DataPayload,
    pub collapse_key: Option<String>,
    pub message_id: Option<String>,
    pub message_type: Option<String>,
    pub sent_time: i64,
    pub ttl: i32,
    pub original_priority: i32,
    pub priority: i32,
    pub notification: Option<NotificationPayload>,
    pub bundle: Option<Bundle>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPayload {
    pub title: Option<String>,
    pub title_localization_key: Option<String>,
    pub title_localization_args: Option<Vec<String>>,
    pub body: Option<String>,
    pub body_localization_key: Option<String>,
    pub body_localization_args: Option<Vec<String>>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub sound: Option<String>,
    pub tag: Option<String>,
    pub color: Option<String>,
    pub click_action: Option<String>,
    pub channel_id: Option<String>,
    pub link: Option<String>,
    pub ticker: Option<String>,
    pub sticky: bool,
    pub local_only: bool,
    pub default_sound: bool,
    pub default_vibrate_settings: bool,
    pub default_light_settings: bool,
    pub notification_priority: Option<i32>,
    pub visibility: Option<i32>,
    pub notification_count: Option<i32>,
    pub event_time: Option<i64>,
    pub light_settings: Option<Vec<i32>>,
    pub vibrate_timings: Option<Vec<i64>>,
}

/// String payload of a message. Keys are unique and iteration follows
/// delivery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataPayload {
    entries: Vec<(String, String)>,
}

impl DataPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `key`. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for DataPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = DataPayload::new();
        for (key, value) in iter {
            payload.insert(key, value);
        }
        payload
    }
}

impl<'de> Deserialize<'de> for DataPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DataPayloadVisitor;

        impl<'de> Visitor<'de> for DataPayloadVisitor {
            type Value = DataPayload;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of string keys to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, String)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    if entries.iter().any(|(existing, _)| *existing == key) {
                        return Err(de::Error::custom(format!("duplicate data key '{key}'")));
                    }
                    entries.push((key, value));
                }
                Ok(DataPayload { entries })
            }
        }

        deserializer.deserialize_map(DataPayloadVisitor)
    }
}

/// Internal extras container carried next to the public message fields.
/// Values are untyped; only string values are visible through
/// [`Bundle::get_string`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bundle {
    entries: Vec<(String, serde_json::Value)>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .and_then(|(_, value)| value.as_str())
    }
}

impl<'de> Deserialize<'de> for Bundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BundleVisitor;

        impl<'de> Visitor<'de> for BundleVisitor {
            type Value = Bundle;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of extras")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut bundle = Bundle::new();
                while let Some((key, value)) = map.next_entry::<String, serde_json::Value>()? {
                    bundle.put(key, value);
                }
                Ok(bundle)
            }
        }

        deserializer.deserialize_map(BundleVisitor)
    }
}
