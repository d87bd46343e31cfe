//! Text rendering of [`MessageSnapshot`]s.
//!
//! Output is deterministic for a given snapshot and prefix. Every line ends in
//! `\n` except the closing `}`. Values are written verbatim; an embedded
//! newline in a value is not escaped.

use crate::snapshot::{Field, FieldValue, MessageSnapshot};

/// Literal written for absent values, including absent sequences.
pub const ABSENT: &str = "null";

const LIST_SEPARATOR: &str = ", ";
const INDENT: &str = "  ";

pub fn render_default(snapshot: &MessageSnapshot) -> String {
    render(snapshot, "")
}

pub fn render(snapshot: &MessageSnapshot, prefix: &str) -> String {
    let inner = format!("{prefix}{INDENT}");
    let inner2 = format!("{inner}{INDENT}");
    let mut out = String::new();

    out.push_str(prefix);
    out.push_str("RemoteMessage{\n");

    push_fields(&mut out, &inner, snapshot.header());

    push_header(&mut out, &inner, "getData");
    for (key, value) in snapshot.data() {
        push_line(&mut out, &inner2, key, value);
    }

    push_fields(&mut out, &inner, snapshot.details());

    push_header(&mut out, &inner, "getNotification");
    if let Some(fields) = snapshot.notification() {
        push_fields(&mut out, &inner2, fields);
    }

    push_header(&mut out, &inner, "bundle");
    push_fields(&mut out, &inner2, snapshot.legacy_extras());

    out.push('}');
    out
}

pub fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Absent => ABSENT.to_string(),
        FieldValue::Text(text) => text.clone(),
        FieldValue::Integer(number) => number.to_string(),
        FieldValue::Flag(flag) => flag.to_string(),
        FieldValue::List(values) => values.join(LIST_SEPARATOR),
        FieldValue::Priority { raw, symbol } => format!("{raw}({})", symbol.unwrap_or("")),
    }
}

fn push_fields(out: &mut String, indent: &str, fields: &[Field]) {
    for field in fields {
        push_line(out, indent, field.label, &format_value(&field.value));
    }
}

fn push_header(out: &mut String, indent: &str, label: &str) {
    out.push_str(indent);
    out.push_str(label);
    out.push_str(":\n");
}

fn push_line(out: &mut String, indent: &str, label: &str, value: &str) {
    out.push_str(indent);
    out.push_str(label);
    out.push_str(": ");
    out.push_str(value);
    out.push('\n');
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use crate::adapters::BundleExtras;
    use crate::ports::ENABLE_NOTIFICATION;
    use crate::snapshot::SnapshotBuilder;
    use crate::types::message::{Bundle, InboundPushEvent, NotificationPayload, PRIORITY_HIGH};

    fn snapshot_of(event: &InboundPushEvent) -> MessageSnapshot {
        SnapshotBuilder::new(BundleExtras)
            .build(Some(event))
            .expect("build snapshot")
    }

    fn full_notification() -> NotificationPayload {
        NotificationPayload {
            title: Some("Title".to_string()),
            title_localization_key: Some("title_key".to_string()),
            title_localization_args: Some(vec!["t1".to_string(), "t2".to_string()]),
            body: Some("Body".to_string()),
            body_localization_key: Some("body_key".to_string()),
            body_localization_args: Some(vec!["b1".to_string()]),
            icon: Some("ic_stat".to_string()),
            image_url: Some("https://img.example/a.png".to_string()),
            sound: Some("default".to_string()),
            tag: Some("tag-1".to_string()),
            color: Some("#ff0000".to_string()),
            click_action: Some("OPEN".to_string()),
            channel_id: Some("general".to_string()),
            link: Some("app://open".to_string()),
            ticker: Some("Ticker".to_string()),
            sticky: true,
            local_only: false,
            default_sound: true,
            default_vibrate_settings: false,
            default_light_settings: true,
            notification_priority: Some(1),
            visibility: Some(0),
            notification_count: Some(3),
            event_time: Some(1_700_000_000_000),
            light_settings: Some(vec![-16711936, 1000, 500]),
            vibrate_timings: Some(vec![0, 250, 250]),
        }
    }

    #[test]
    fn render__should_dump_minimal_event() {
        // Given
        let event = InboundPushEvent {
            sender_id: Some("123".to_string()),
            from: Some("push@example".to_string()),
            data: [("k", "v")].into_iter().collect(),
            ..InboundPushEvent::default()
        };

        // When
        let text = render_default(&snapshot_of(&event));

        // Then
        let expected = "RemoteMessage{\n\
            \x20 getSenderId: 123\n\
            \x20 getFrom: push@example\n\
            \x20 to: null\n\
            \x20 getData:\n\
            \x20   k: v\n\
            \x20 getCollapseKey: null\n\
            \x20 getMessageId: null\n\
            \x20 getMessageType: null\n\
            \x20 getSentTime: 0\n\
            \x20 getTtl: 0\n\
            \x20 getOriginalPriority: 0\n\
            \x20 getPriority: 0(PRIORITY_UNKNOWN)\n\
            \x20 getNotification:\n\
            \x20 bundle:\n\
            \x20   enable_notification(ENABLE_NOTIFICATION): null\n\
            \x20   notification.n.e(ENABLE_NOTIFICATION (OLD)): null\n\
            }";
        assert_eq!(text, expected);
    }

    #[test]
    fn render__should_be_deterministic() {
        // Given
        let event = InboundPushEvent {
            sender_id: Some("s".to_string()),
            data: [("x", "1"), ("y", "2")].into_iter().collect(),
            notification: Some(full_notification()),
            ..InboundPushEvent::default()
        };

        // When
        let first = render(&snapshot_of(&event), "\t");
        let second = render(&snapshot_of(&event), "\t");

        // Then
        assert_eq!(first, second);
    }

    #[test]
    fn render__should_apply_prefix_to_every_nested_line() {
        // Given
        let event = InboundPushEvent {
            data: [("k", "v")].into_iter().collect(),
            ..InboundPushEvent::default()
        };

        // When
        let text = render(&snapshot_of(&event), "    ");

        // Then
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    RemoteMessage{");
        assert_eq!(lines[1], "      getSenderId: null");
        assert!(lines.contains(&"        k: v"));
        assert_eq!(*lines.last().expect("last line"), "}");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn render__should_keep_notification_header_empty_when_absent() {
        // Given
        let event = InboundPushEvent::default();

        // When
        let text = render_default(&snapshot_of(&event));

        // Then
        assert!(text.contains("  getNotification:\n  bundle:\n"));
    }

    #[test]
    fn render__should_list_all_notification_fields_in_order() {
        // Given
        let event = InboundPushEvent {
            notification: Some(full_notification()),
            ..InboundPushEvent::default()
        };

        // When
        let text = render_default(&snapshot_of(&event));

        // Then
        let start = text.find("  getNotification:\n").expect("notification header");
        let end = text.find("  bundle:\n").expect("bundle header");
        let section: Vec<&str> = text[start..end].lines().skip(1).collect();
        assert_eq!(
            section,
            vec![
                "    getTitle: Title",
                "    getTitleLocalizationKey: title_key",
                "    getTitleLocalizationArgs: t1, t2",
                "    getBody: Body",
                "    getBodyLocalizationKey: body_key",
                "    getBodyLocalizationArgs: b1",
                "    getIcon: ic_stat",
                "    getImageUrl: https://img.example/a.png",
                "    getSound: default",
                "    getTag: tag-1",
                "    getColor: #ff0000",
                "    getClickAction: OPEN",
                "    getChannelId: general",
                "    getLink: app://open",
                "    getTicker: Ticker",
                "    getSticky: true",
                "    getLocalOnly: false",
                "    getDefaultSound: true",
                "    getDefaultVibrateSettings: false",
                "    getDefaultLightSettings: true",
                "    getNotificationPriority: 1",
                "    getVisibility: 0",
                "    getNotificationCount: 3",
                "    getEventTime: 1700000000000",
                "    getLightSettings: -16711936, 1000, 500",
                "    getVibrateTimings: 0, 250, 250",
            ]
        );
    }

    #[test]
    fn render__should_distinguish_absent_and_empty_sequences() {
        // Given
        let event = InboundPushEvent {
            notification: Some(NotificationPayload {
                title_localization_args: Some(Vec::new()),
                ..NotificationPayload::default()
            }),
            ..InboundPushEvent::default()
        };

        // When
        let text = render_default(&snapshot_of(&event));

        // Then
        assert!(text.contains("    getTitleLocalizationArgs: \n"));
        assert!(text.contains("    getBodyLocalizationArgs: null\n"));
        assert!(text.contains("    getVibrateTimings: null\n"));
    }

    #[test]
    fn render__should_format_priority_symbols() {
        // Given
        let high = InboundPushEvent {
            priority: PRIORITY_HIGH,
            ..InboundPushEvent::default()
        };
        let unknown = InboundPushEvent {
            priority: 999,
            ..InboundPushEvent::default()
        };

        // When
        let high_text = render_default(&snapshot_of(&high));
        let unknown_text = render_default(&snapshot_of(&unknown));

        // Then
        assert!(high_text.contains("  getPriority: 1(PRIORITY_HIGH)\n"));
        assert!(unknown_text.contains("  getPriority: 999()\n"));
    }

    #[test]
    fn render__should_not_sort_data_entries() {
        // Given
        let event = InboundPushEvent {
            data: [("b", "2"), ("a", "1")].into_iter().collect(),
            ..InboundPushEvent::default()
        };

        // When
        let text = render_default(&snapshot_of(&event));

        // Then
        assert!(text.contains("  getData:\n    b: 2\n    a: 1\n  getCollapseKey"));
    }

    #[test]
    fn render__should_always_emit_two_bundle_lines() {
        // Given
        let mut bundle = Bundle::new();
        bundle.put(ENABLE_NOTIFICATION, "1");
        let with_bundle = InboundPushEvent {
            bundle: Some(bundle),
            ..InboundPushEvent::default()
        };
        let without_bundle = InboundPushEvent::default();

        for (event, current) in [(&with_bundle, "1"), (&without_bundle, "null")] {
            // When
            let text = render_default(&snapshot_of(event));

            // Then
            let bundle_section = &text[text.find("  bundle:\n").expect("bundle header")..];
            let lines: Vec<&str> = bundle_section.lines().collect();
            assert_eq!(lines.len(), 4);
            assert_eq!(
                lines[1],
                format!("    enable_notification(ENABLE_NOTIFICATION): {current}")
            );
            assert_eq!(lines[2], "    notification.n.e(ENABLE_NOTIFICATION (OLD)): null");
            assert_eq!(lines[3], "}");
        }
    }

    #[test]
    fn render__should_pass_embedded_newlines_through() {
        // Given
        let event = InboundPushEvent {
            message_id: Some("line1\nline2".to_string()),
            ..InboundPushEvent::default()
        };

        // When
        let text = render_default(&snapshot_of(&event));

        // Then
        assert!(text.contains("  getMessageId: line1\nline2\n"));
    }
}
