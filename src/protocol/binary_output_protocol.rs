use crate::{
    constants::BINARY_PROTOCOL_VERSION_1,
    protocol::{
        BinaryProtocolConfig, FieldType, ListHeader, MapHeader, MessageType, OutputProtocol,
        ProtocolError,
    },
};
use std::io::Write;

/// Writes messages in the big-endian binary encoding onto any `Write`.
///
/// Wrap the writer in a `BufWriter` for socket transports; `flush` forwards
/// to the writer's own `flush`.
pub struct BinaryOutputProtocol<W: Write> {
    writer: W,
    config: BinaryProtocolConfig,
}

impl<W: Write> BinaryOutputProtocol<W> {
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, BinaryProtocolConfig::default())
    }

    pub fn with_config(writer: W, config: BinaryProtocolConfig) -> Self {
        Self { writer, config }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    #[inline]
    fn write_len(&mut self, len: usize) -> Result<(), ProtocolError> {
        let len = i32::try_from(len).map_err(|_| ProtocolError::SizeLimit {
            size: len,
            max: i32::MAX as usize,
        })?;
        self.write_i32(len)
    }
}

impl<W: Write> OutputProtocol for BinaryOutputProtocol<W> {
    fn write_message_begin(
        &mut self,
        name: &str,
        message_type: MessageType,
        seq_id: i32,
    ) -> Result<(), ProtocolError> {
        if self.config.strict_write {
            self.write_i32(BINARY_PROTOCOL_VERSION_1 | message_type.value() as i32)?;
            self.write_string(name)?;
        } else {
            self.write_string(name)?;
            self.write_byte(message_type.value() as i8)?;
        }
        self.write_i32(seq_id)
    }

    fn write_message_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn write_struct_begin(&mut self, _name: &str) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn write_struct_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn write_field_begin(
        &mut self,
        _name: &str,
        field_type: FieldType,
        id: i16,
    ) -> Result<(), ProtocolError> {
        self.write_byte(u8::from(field_type) as i8)?;
        self.write_i16(id)
    }

    fn write_field_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn write_field_stop(&mut self) -> Result<(), ProtocolError> {
        self.write_byte(u8::from(FieldType::Stop) as i8)
    }

    fn write_list_begin(&mut self, header: ListHeader) -> Result<(), ProtocolError> {
        self.write_byte(u8::from(header.element_type) as i8)?;
        self.write_i32(header.size)
    }

    fn write_list_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn write_set_begin(&mut self, header: ListHeader) -> Result<(), ProtocolError> {
        self.write_list_begin(header)
    }

    fn write_set_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn write_map_begin(&mut self, header: MapHeader) -> Result<(), ProtocolError> {
        self.write_byte(u8::from(header.key_type) as i8)?;
        self.write_byte(u8::from(header.value_type) as i8)?;
        self.write_i32(header.size)
    }

    fn write_map_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn write_bool(&mut self, value: bool) -> Result<(), ProtocolError> {
        self.write_byte(value as i8)
    }

    fn write_byte(&mut self, value: i8) -> Result<(), ProtocolError> {
        Ok(self.writer.write_all(&value.to_be_bytes())?)
    }

    fn write_i16(&mut self, value: i16) -> Result<(), ProtocolError> {
        Ok(self.writer.write_all(&value.to_be_bytes())?)
    }

    fn write_i32(&mut self, value: i32) -> Result<(), ProtocolError> {
        Ok(self.writer.write_all(&value.to_be_bytes())?)
    }

    fn write_i64(&mut self, value: i64) -> Result<(), ProtocolError> {
        Ok(self.writer.write_all(&value.to_be_bytes())?)
    }

    fn write_double(&mut self, value: f64) -> Result<(), ProtocolError> {
        Ok(self.writer.write_all(&value.to_bits().to_be_bytes())?)
    }

    fn write_string(&mut self, value: &str) -> Result<(), ProtocolError> {
        self.write_binary(value.as_bytes())
    }

    fn write_binary(&mut self, value: &[u8]) -> Result<(), ProtocolError> {
        self.write_len(value.len())?;
        Ok(self.writer.write_all(value)?)
    }

    fn flush(&mut self) -> Result<(), ProtocolError> {
        Ok(self.writer.flush()?)
    }
}
