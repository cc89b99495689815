use crate::{
    protocol::ProtocolError,
    rpc::{ApplicationException, ApplicationExceptionKind},
};
use std::fmt;

/// Every way a call can fail, from the perspective of the caller.
#[derive(Debug)]
pub enum RpcCallError {
    /// Reading, writing or flushing the channel failed. The channel should be
    /// considered unusable.
    Transport(ProtocolError),
    /// The reply did not belong to this call (wrong method name, wrong
    /// sequence ID) or had an unexpected message type. Detected locally;
    /// nothing after the reply envelope was consumed.
    Violation(ApplicationException),
    /// The peer answered with an exception instead of a result. The exchange
    /// itself completed normally.
    Remote(ApplicationException),
    /// A previous call panicked while holding the channel, so its state
    /// is unknown.
    ChannelPoisoned,
}

impl RpcCallError {
    /// The exception carried by `Violation` or `Remote`.
    pub fn exception(&self) -> Option<&ApplicationException> {
        match self {
            RpcCallError::Violation(e) | RpcCallError::Remote(e) => Some(e),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<ApplicationExceptionKind> {
        self.exception().map(|e| e.kind)
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, RpcCallError::Remote(_))
    }
}

impl fmt::Display for RpcCallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcCallError::Transport(e) => write!(f, "Transport error: {}", e),
            RpcCallError::Violation(e) => write!(f, "Protocol violation: {}", e),
            RpcCallError::Remote(e) => write!(f, "Remote exception ({:?}): {}", e.kind, e),
            RpcCallError::ChannelPoisoned => write!(f, "Channel lock poisoned"),
        }
    }
}

impl std::error::Error for RpcCallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpcCallError::Transport(e) => Some(e),
            RpcCallError::Violation(e) | RpcCallError::Remote(e) => Some(e),
            RpcCallError::ChannelPoisoned => None,
        }
    }
}

impl From<ProtocolError> for RpcCallError {
    fn from(e: ProtocolError) -> Self {
        RpcCallError::Transport(e)
    }
}
