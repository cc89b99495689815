use crate::protocol::{FieldType, InputProtocol, OutputProtocol, ProtocolError, WireStruct};
use bitcode::{DecodeOwned, Encode};

const PAYLOAD_FIELD_ID: i16 = 1;

/// Schemaless call payload: any `bitcode` value carried as a single binary
/// field.
///
/// Handy when both ends are Rust and share the value type, so no per-field
/// struct definition is needed. A missing payload field leaves `value` as it
/// was before the read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BitcodeStruct<T> {
    pub value: T,
}

impl<T> BitcodeStruct<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> WireStruct for BitcodeStruct<T>
where
    T: Encode + DecodeOwned,
{
    fn write(&self, oprot: &mut dyn OutputProtocol) -> Result<(), ProtocolError> {
        oprot.write_struct_begin("BitcodeStruct")?;
        oprot.write_field_begin("payload", FieldType::String, PAYLOAD_FIELD_ID)?;
        oprot.write_binary(&bitcode::encode(&self.value))?;
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
                (PAYLOAD_FIELD_ID, FieldType::String) => {
                    let bytes = iprot.read_binary()?;
                    self.value = bitcode::decode::<T>(&bytes)
                        .map_err(|e| ProtocolError::InvalidData(e.to_string()))?;
                }
                (_, other) => iprot.skip(other)?,
            }
            iprot.read_field_end()?;
        }

        iprot.read_struct_end()
    }
}
