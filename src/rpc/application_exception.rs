use crate::{
    constants::APPLICATION_EXCEPTION_STRUCT_NAME,
    protocol::{FieldType, InputProtocol, OutputProtocol, ProtocolError, WireStruct},
    rpc::ApplicationExceptionKind,
};
use std::fmt;

const MESSAGE_FIELD_ID: i16 = 1;
const KIND_FIELD_ID: i16 = 2;

/// A structured error carried in place of a normal call result.
///
/// Built locally when a reply fails validation, or decoded from the channel
/// when the peer answers with an `Exception` envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationException {
    pub kind: ApplicationExceptionKind,
    pub message: String,
}

impl ApplicationException {
    pub fn new(kind: ApplicationExceptionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Default for ApplicationException {
    fn default() -> Self {
        Self::new(ApplicationExceptionKind::Unknown, String::new())
    }
}

impl fmt::Display for ApplicationException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind.description())
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ApplicationException {}

impl WireStruct for ApplicationException {
    fn write(&self, oprot: &mut dyn OutputProtocol) -> Result<(), ProtocolError> {
        oprot.write_struct_begin(APPLICATION_EXCEPTION_STRUCT_NAME)?;

        if !self.message.is_empty() {
            oprot.write_field_begin("message", FieldType::String, MESSAGE_FIELD_ID)?;
            oprot.write_string(&self.message)?;
            oprot.write_field_end()?;
        }

        oprot.write_field_begin("type", FieldType::I32, KIND_FIELD_ID)?;
        oprot.write_i32(self.kind.value())?;
        oprot.write_field_end()?;

        oprot.write_field_stop()?;
        oprot.write_struct_end()
    }

    fn read(&mut self, iprot: &mut dyn InputProtocol) -> Result<(), ProtocolError> {
        iprot.read_struct_begin()?;

        loop {
            let field = iprot.read_field_begin()?;
            match (field.id, field.field_type) {
                (_, FieldType::Stop) => break,
                (MESSAGE_FIELD_ID, FieldType::String) => self.message = iprot.read_string()?,
                (KIND_FIELD_ID, FieldType::I32) => {
                    self.kind = ApplicationExceptionKind::from(iprot.read_i32()?)
                }
                (_, other) => iprot.skip(other)?,
            }
            iprot.read_field_end()?;
        }

        iprot.read_struct_end()
    }
}
