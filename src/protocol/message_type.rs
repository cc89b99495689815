use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The kind carried in a message envelope.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, TryFromPrimitive, IntoPrimitive)]
pub enum MessageType {
    Call = 1,
    Reply = 2,
    Exception = 3,
    Oneway = 4,
}

impl MessageType {
    #[inline]
    pub fn value(self) -> u8 {
        self.into()
    }
}
