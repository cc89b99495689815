/// Per-client behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RpcClientConfig {
    /// Send one-way calls with a `MessageType::Oneway` envelope instead of
    /// `MessageType::Call`.
    ///
    /// One-way calls never read a reply. A peer that answers a `Call`
    /// envelope anyway leaves that reply on the channel, where the next
    /// two-way call reads it and fails validation. Peers that honor
    /// `Oneway` do not reply at all.
    pub oneway_message_type: bool,
}
