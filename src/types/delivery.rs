use serde::Deserialize;

use crate::types::message::InboundPushEvent;

/// One callback from the messaging client, in the shape used by replay
/// streams (one JSON object per line, tagged by `type`).
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Delivery {
    Created,
    Destroyed,
    Message { message: Option<InboundPushEvent> },
    NewToken { token: String },
}
