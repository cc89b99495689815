// Binary protocol envelope constants

/// Version word written in front of every strict message header.
/// The low byte carries the `MessageType`.
pub const BINARY_PROTOCOL_VERSION_1: i32 = 0x8001_0000u32 as i32;

/// Mask isolating the version bits of a strict message header word.
pub const BINARY_PROTOCOL_VERSION_MASK: i32 = 0xffff_0000u32 as i32;

/// Mask isolating the message type byte of a strict message header word.
pub const BINARY_PROTOCOL_TYPE_MASK: i32 = 0x0000_00ff;

/// Upper bound, in bytes, for a single string or binary value read off the
/// wire. Lengths above this are rejected before any allocation happens.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 16 * 1024 * 1024;

/// Maximum nesting depth `skip` will descend into when discarding an
/// unrecognized field (structs inside lists inside maps, etc.).
pub const DEFAULT_MAX_SKIP_DEPTH: usize = 64;

/// Struct name used when writing an `ApplicationException`.
pub const APPLICATION_EXCEPTION_STRUCT_NAME: &str = "TApplicationException";

/// The first sequence identifier a freshly created client issues is
/// `DEFAULT_INITIAL_SEQUENCE_ID + 1`.
pub const DEFAULT_INITIAL_SEQUENCE_ID: i32 = 0;
