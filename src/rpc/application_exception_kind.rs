use num_enum::{FromPrimitive, IntoPrimitive};

/// Category of an `ApplicationException`.
///
/// Codes not listed here decode as `Unknown` so a newer peer can never make
/// an exception undecodable.
#[repr(i32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, FromPrimitive, IntoPrimitive)]
pub enum ApplicationExceptionKind {
    #[num_enum(default)]
    Unknown = 0,
    UnknownMethod = 1,
    InvalidMessageType = 2,
    WrongMethodName = 3,
    BadSequenceId = 4,
    MissingResult = 5,
    InternalError = 6,
    ProtocolError = 7,
    InvalidTransform = 8,
    InvalidProtocol = 9,
    UnsupportedClientType = 10,
}

impl ApplicationExceptionKind {
    #[inline]
    pub fn value(self) -> i32 {
        self.into()
    }

    /// Fallback text used when an exception arrives without a message.
    pub fn description(self) -> &'static str {
        match self {
            ApplicationExceptionKind::Unknown => "Unknown application exception",
            ApplicationExceptionKind::UnknownMethod => "Unknown method",
            ApplicationExceptionKind::InvalidMessageType => "Invalid message type",
            ApplicationExceptionKind::WrongMethodName => "Wrong method name",
            ApplicationExceptionKind::BadSequenceId => "Bad sequence identifier",
            ApplicationExceptionKind::MissingResult => "Missing result",
            ApplicationExceptionKind::InternalError => "Internal error",
            ApplicationExceptionKind::ProtocolError => "Protocol error",
            ApplicationExceptionKind::InvalidTransform => "Invalid transform",
            ApplicationExceptionKind::InvalidProtocol => "Invalid protocol",
            ApplicationExceptionKind::UnsupportedClientType => "Unsupported client type",
        }
    }
}
