use crate::constants::DEFAULT_MAX_SKIP_DEPTH;
use crate::protocol::{
    FieldHeader, FieldType, ListHeader, MapHeader, MessageHeader, MessageType, ProtocolError,
};

/// The write half of a message-oriented channel.
///
/// A complete outbound message is `write_message_begin`, the payload struct,
/// `write_message_end`, then `flush`. Nothing is guaranteed to have reached
/// the transport until `flush` returns.
pub trait OutputProtocol {
    fn write_message_begin(
        &mut self,
        name: &str,
        message_type: MessageType,
        seq_id: i32,
    ) -> Result<(), ProtocolError>;
    fn write_message_end(&mut self) -> Result<(), ProtocolError>;

    fn write_struct_begin(&mut self, name: &str) -> Result<(), ProtocolError>;
    fn write_struct_end(&mut self) -> Result<(), ProtocolError>;
    fn write_field_begin(
        &mut self,
        name: &str,
        field_type: FieldType,
        id: i16,
    ) -> Result<(), ProtocolError>;
    fn write_field_end(&mut self) -> Result<(), ProtocolError>;
    fn write_field_stop(&mut self) -> Result<(), ProtocolError>;

    fn write_list_begin(&mut self, header: ListHeader) -> Result<(), ProtocolError>;
    fn write_list_end(&mut self) -> Result<(), ProtocolError>;
    fn write_set_begin(&mut self, header: ListHeader) -> Result<(), ProtocolError>;
    fn write_set_end(&mut self) -> Result<(), ProtocolError>;
    fn write_map_begin(&mut self, header: MapHeader) -> Result<(), ProtocolError>;
    fn write_map_end(&mut self) -> Result<(), ProtocolError>;

    fn write_bool(&mut self, value: bool) -> Result<(), ProtocolError>;
    fn write_byte(&mut self, value: i8) -> Result<(), ProtocolError>;
    fn write_i16(&mut self, value: i16) -> Result<(), ProtocolError>;
    fn write_i32(&mut self, value: i32) -> Result<(), ProtocolError>;
    fn write_i64(&mut self, value: i64) -> Result<(), ProtocolError>;
    fn write_double(&mut self, value: f64) -> Result<(), ProtocolError>;
    fn write_string(&mut self, value: &str) -> Result<(), ProtocolError>;
    fn write_binary(&mut self, value: &[u8]) -> Result<(), ProtocolError>;

    fn flush(&mut self) -> Result<(), ProtocolError>;
}

/// The read half of a message-oriented channel.
pub trait InputProtocol {
    fn read_message_begin(&mut self) -> Result<MessageHeader, ProtocolError>;
    fn read_message_end(&mut self) -> Result<(), ProtocolError>;

    fn read_struct_begin(&mut self) -> Result<(), ProtocolError>;
    fn read_struct_end(&mut self) -> Result<(), ProtocolError>;
    fn read_field_begin(&mut self) -> Result<FieldHeader, ProtocolError>;
    fn read_field_end(&mut self) -> Result<(), ProtocolError>;

    fn read_list_begin(&mut self) -> Result<ListHeader, ProtocolError>;
    fn read_list_end(&mut self) -> Result<(), ProtocolError>;
    fn read_set_begin(&mut self) -> Result<ListHeader, ProtocolError>;
    fn read_set_end(&mut self) -> Result<(), ProtocolError>;
    fn read_map_begin(&mut self) -> Result<MapHeader, ProtocolError>;
    fn read_map_end(&mut self) -> Result<(), ProtocolError>;

    fn read_bool(&mut self) -> Result<bool, ProtocolError>;
    fn read_byte(&mut self) -> Result<i8, ProtocolError>;
    fn read_i16(&mut self) -> Result<i16, ProtocolError>;
    fn read_i32(&mut self) -> Result<i32, ProtocolError>;
    fn read_i64(&mut self) -> Result<i64, ProtocolError>;
    fn read_double(&mut self) -> Result<f64, ProtocolError>;
    fn read_string(&mut self) -> Result<String, ProtocolError>;
    fn read_binary(&mut self) -> Result<Vec<u8>, ProtocolError>;

    /// Reads and discards one value of the given type, including any nested
    /// structs or containers.
    fn skip(&mut self, field_type: FieldType) -> Result<(), ProtocolError> {
        skip_field(self, field_type, DEFAULT_MAX_SKIP_DEPTH)
    }
}

/// Reads and discards a value of `field_type`, descending at most
/// `max_depth` levels into nested structs and containers.
pub fn skip_field<P>(
    iprot: &mut P,
    field_type: FieldType,
    max_depth: usize,
) -> Result<(), ProtocolError>
where
    P: InputProtocol + ?Sized,
{
    if max_depth == 0 {
        return Err(ProtocolError::DepthLimit);
    }

    match field_type {
        FieldType::Bool => iprot.read_bool().map(|_| ()),
        FieldType::Byte => iprot.read_byte().map(|_| ()),
        FieldType::I16 => iprot.read_i16().map(|_| ()),
        FieldType::I32 => iprot.read_i32().map(|_| ()),
        FieldType::I64 => iprot.read_i64().map(|_| ()),
        FieldType::Double => iprot.read_double().map(|_| ()),
        // Binary rather than string: skipped bytes need not be UTF-8.
        FieldType::String => iprot.read_binary().map(|_| ()),
        FieldType::Struct => {
            iprot.read_struct_begin()?;
            loop {
                let field = iprot.read_field_begin()?;
                if field.is_stop() {
                    break;
                }
                skip_field(iprot, field.field_type, max_depth - 1)?;
                iprot.read_field_end()?;
            }
            iprot.read_struct_end()
        }
        FieldType::Map => {
            let header = iprot.read_map_begin()?;
            for _ in 0..header.size {
                skip_field(iprot, header.key_type, max_depth - 1)?;
                skip_field(iprot, header.value_type, max_depth - 1)?;
            }
            iprot.read_map_end()
        }
        FieldType::Set => {
            let header = iprot.read_set_begin()?;
            for _ in 0..header.size {
                skip_field(iprot, header.element_type, max_depth - 1)?;
            }
            iprot.read_set_end()
        }
        FieldType::List => {
            let header = iprot.read_list_begin()?;
            for _ in 0..header.size {
                skip_field(iprot, header.element_type, max_depth - 1)?;
            }
            iprot.read_list_end()
        }
        FieldType::Stop | FieldType::Void => Err(ProtocolError::InvalidData(format!(
            "Cannot skip a value of type {:?}",
            field_type
        ))),
    }
}
