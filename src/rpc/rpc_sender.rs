use crate::protocol::{MessageType, OutputProtocol, ProtocolError, WireStruct};

/// Writes one complete request (envelope, arguments, end marker) and flushes
/// it to the transport. The first failing step aborts the rest and its error
/// is returned unchanged.
pub fn send<O>(
    oprot: &mut O,
    seq_id: i32,
    method: &str,
    message_type: MessageType,
    args: &dyn WireStruct,
) -> Result<(), ProtocolError>
where
    O: OutputProtocol,
{
    oprot.write_message_begin(method, message_type, seq_id)?;
    args.write(oprot)?;
    oprot.write_message_end()?;
    oprot.flush()
}
