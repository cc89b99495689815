use crate::constants::DEFAULT_MAX_STRING_LENGTH;

/// Tunables shared by `BinaryInputProtocol` and `BinaryOutputProtocol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryProtocolConfig {
    /// Reject message headers that lack a version word.
    pub strict_read: bool,

    /// Write the versioned header form. When `false`, the older
    /// name-first header is written instead.
    pub strict_write: bool,

    /// Largest string or binary value, in bytes, accepted on read.
    pub max_string_length: usize,
}

impl Default for BinaryProtocolConfig {
    fn default() -> Self {
        Self {
            strict_read: false,
            strict_write: true,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
        }
    }
}
