use crate::protocol::MessageType;

/// The envelope written in front of every message payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    /// Name of the method being called, or answered.
    pub name: String,

    pub message_type: MessageType,

    /// Correlates a reply with the call that caused it. A reply must carry
    /// the same value as its request.
    pub seq_id: i32,
}

impl MessageHeader {
    pub fn new(name: impl Into<String>, message_type: MessageType, seq_id: i32) -> Self {
        Self {
            name: name.into(),
            message_type,
            seq_id,
        }
    }
}
