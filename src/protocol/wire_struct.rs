use crate::protocol::{InputProtocol, OutputProtocol, ProtocolError};

/// A payload that knows how to put itself on, and take itself off, a
/// channel. Call arguments, call results and exceptions all implement this;
/// the call core never looks inside them.
///
/// `read` fills `self` in place so a caller-owned result struct can be handed
/// to a call and inspected afterwards.
pub trait WireStruct {
    fn write(&self, oprot: &mut dyn OutputProtocol) -> Result<(), ProtocolError>;

    fn read(&mut self, iprot: &mut dyn InputProtocol) -> Result<(), ProtocolError>;
}
