use crate::{
    protocol::{InputProtocol, MessageType, WireStruct},
    rpc::{ApplicationException, ApplicationExceptionKind, RpcCallError},
};

/// Reads one reply and checks that it answers the call identified by
/// `method` and `seq_id`.
///
/// Name and sequence checks run before the message type is looked at: a reply
/// meant for another call is rejected even if it carries an exception or a
/// result. On any rejection `result` is left untouched.
pub fn recv<I>(
    iprot: &mut I,
    seq_id: i32,
    method: &str,
    result: &mut dyn WireStruct,
) -> Result<(), RpcCallError>
where
    I: InputProtocol,
{
    let header = iprot.read_message_begin()?;

    if header.name != method {
        tracing::warn!(
            "Reply for `{}` received while awaiting `{}` (seq {})",
            header.name,
            method,
            seq_id
        );
        return Err(violation(
            ApplicationExceptionKind::WrongMethodName,
            format!("{}: wrong method name", method),
        ));
    }

    if header.seq_id != seq_id {
        tracing::warn!(
            "Reply for `{}` carried seq {} while awaiting seq {}",
            method,
            header.seq_id,
            seq_id
        );
        return Err(violation(
            ApplicationExceptionKind::BadSequenceId,
            format!("{}: out of order sequence response", method),
        ));
    }

    match header.message_type {
        MessageType::Reply => {}
        MessageType::Exception => {
            let mut exception = ApplicationException::default();
            exception.read(iprot)?;
            iprot.read_message_end()?;

            tracing::debug!(
                "`{}` (seq {}) raised {:?}: {}",
                method,
                seq_id,
                exception.kind,
                exception
            );
            return Err(RpcCallError::Remote(exception));
        }
        other => {
            tracing::warn!("Reply for `{}` had message type {:?}", method, other);
            return Err(violation(
                ApplicationExceptionKind::InvalidMessageType,
                format!("{}: invalid message type", method),
            ));
        }
    }

    result.read(iprot)?;
    iprot.read_message_end()?;

    Ok(())
}

fn violation(kind: ApplicationExceptionKind, message: String) -> RpcCallError {
    RpcCallError::Violation(ApplicationException::new(kind, message))
}
