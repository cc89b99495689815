use std::fmt;
use std::io;

/// Errors raised by the message/serialization layer while reading or writing
/// a channel. These are terminal for the call that hit them.
#[derive(Debug)]
pub enum ProtocolError {
    /// The underlying byte stream failed (including unexpected EOF).
    Io(io::Error),
    /// Bytes were read but do not form a valid value (bad UTF-8, unknown
    /// type byte, undecodable payload, ...).
    InvalidData(String),
    /// A message header carried an unsupported version word, or no version
    /// word at all while strict reads are enabled.
    BadVersion(i32),
    /// A length prefix was negative.
    NegativeSize(i32),
    /// A length prefix exceeded the configured maximum.
    SizeLimit { size: usize, max: usize },
    /// `skip` recursed deeper than the configured maximum.
    DepthLimit,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Io(e) => write!(f, "I/O error: {}", e),
            ProtocolError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            ProtocolError::BadVersion(word) => {
                write!(f, "Bad message version: {:#010x}", *word as u32)
            }
            ProtocolError::NegativeSize(size) => write!(f, "Negative length prefix: {}", size),
            ProtocolError::SizeLimit { size, max } => {
                write!(f, "Length {} exceeds limit of {} bytes", size, max)
            }
            ProtocolError::DepthLimit => write!(f, "Maximum skip depth exceeded"),
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ProtocolError {
    fn from(e: io::Error) -> Self {
        ProtocolError::Io(e)
    }
}
