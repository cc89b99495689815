use crate::{
    constants::{BINARY_PROTOCOL_TYPE_MASK, BINARY_PROTOCOL_VERSION_1, BINARY_PROTOCOL_VERSION_MASK},
    protocol::{
        BinaryProtocolConfig, FieldHeader, FieldType, InputProtocol, ListHeader, MapHeader,
        MessageHeader, MessageType, ProtocolError,
    },
};
use std::io::Read;

/// Reads messages in the big-endian binary encoding from any `Read`.
///
/// Both header forms are accepted: the versioned form (negative first word)
/// and the older name-first form, unless `strict_read` is set.
pub struct BinaryInputProtocol<R: Read> {
    reader: R,
    config: BinaryProtocolConfig,
}

impl<R: Read> BinaryInputProtocol<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, BinaryProtocolConfig::default())
    }

    pub fn with_config(reader: R, config: BinaryProtocolConfig) -> Self {
        Self { reader, config }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ProtocolError> {
        let mut buf = [0u8; N];
        self.reader.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn read_field_type(&mut self) -> Result<FieldType, ProtocolError> {
        let raw = self.read_byte()? as u8;
        FieldType::try_from(raw)
            .map_err(|_| ProtocolError::InvalidData(format!("Unknown field type: {}", raw)))
    }

    fn read_message_type(raw: u8) -> Result<MessageType, ProtocolError> {
        MessageType::try_from(raw)
            .map_err(|_| ProtocolError::InvalidData(format!("Unknown message type: {}", raw)))
    }

    /// Validates a length prefix against the configured limit.
    fn checked_len(&self, len: i32) -> Result<usize, ProtocolError> {
        if len < 0 {
            return Err(ProtocolError::NegativeSize(len));
        }
        let len = len as usize;
        if len > self.config.max_string_length {
            return Err(ProtocolError::SizeLimit {
                size: len,
                max: self.config.max_string_length,
            });
        }
        Ok(len)
    }

    fn read_bytes_of_len(&mut self, len: usize) -> Result<Vec<u8>, ProtocolError> {
        let mut buf = vec![0u8; len];
        self.reader.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn utf8_string(bytes: Vec<u8>) -> Result<String, ProtocolError> {
        String::from_utf8(bytes).map_err(|e| ProtocolError::InvalidData(e.to_string()))
    }

    fn read_collection_size(&mut self) -> Result<i32, ProtocolError> {
        let size = self.read_i32()?;
        if size < 0 {
            return Err(ProtocolError::NegativeSize(size));
        }
        Ok(size)
    }
}

impl<R: Read> InputProtocol for BinaryInputProtocol<R> {
    fn read_message_begin(&mut self) -> Result<MessageHeader, ProtocolError> {
        let word = self.read_i32()?;

        if word < 0 {
            let version = word & BINARY_PROTOCOL_VERSION_MASK;
            if version != BINARY_PROTOCOL_VERSION_1 {
                return Err(ProtocolError::BadVersion(word));
            }
            let message_type = Self::read_message_type((word & BINARY_PROTOCOL_TYPE_MASK) as u8)?;
            let name = self.read_string()?;
            let seq_id = self.read_i32()?;
            return Ok(MessageHeader {
                name,
                message_type,
                seq_id,
            });
        }

        if self.config.strict_read {
            return Err(ProtocolError::BadVersion(word));
        }

        // Old header form: the first word is the name length.
        let len = self.checked_len(word)?;
        let name = Self::utf8_string(self.read_bytes_of_len(len)?)?;
        let message_type = Self::read_message_type(self.read_byte()? as u8)?;
        let seq_id = self.read_i32()?;

        Ok(MessageHeader {
            name,
            message_type,
            seq_id,
        })
    }

    fn read_message_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn read_struct_begin(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn read_struct_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn read_field_begin(&mut self) -> Result<FieldHeader, ProtocolError> {
        let field_type = self.read_field_type()?;
        if field_type == FieldType::Stop {
            return Ok(FieldHeader::stop());
        }
        let id = self.read_i16()?;
        Ok(FieldHeader::new(field_type, id))
    }

    fn read_field_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn read_list_begin(&mut self) -> Result<ListHeader, ProtocolError> {
        let element_type = self.read_field_type()?;
        let size = self.read_collection_size()?;
        Ok(ListHeader { element_type, size })
    }

    fn read_list_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn read_set_begin(&mut self) -> Result<ListHeader, ProtocolError> {
        self.read_list_begin()
    }

    fn read_set_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn read_map_begin(&mut self) -> Result<MapHeader, ProtocolError> {
        let key_type = self.read_field_type()?;
        let value_type = self.read_field_type()?;
        let size = self.read_collection_size()?;
        Ok(MapHeader {
            key_type,
            value_type,
            size,
        })
    }

    fn read_map_end(&mut self) -> Result<(), ProtocolError> {
        Ok(())
    }

    fn read_bool(&mut self) -> Result<bool, ProtocolError> {
        Ok(self.read_byte()? != 0)
    }

    fn read_byte(&mut self) -> Result<i8, ProtocolError> {
        Ok(i8::from_be_bytes(self.read_array()?))
    }

    fn read_i16(&mut self) -> Result<i16, ProtocolError> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    fn read_i32(&mut self) -> Result<i32, ProtocolError> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    fn read_i64(&mut self) -> Result<i64, ProtocolError> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    fn read_double(&mut self) -> Result<f64, ProtocolError> {
        Ok(f64::from_bits(u64::from_be_bytes(self.read_array()?)))
    }

    fn read_string(&mut self) -> Result<String, ProtocolError> {
        let bytes = self.read_binary()?;
        Self::utf8_string(bytes)
    }

    fn read_binary(&mut self) -> Result<Vec<u8>, ProtocolError> {
        let raw_len = self.read_i32()?;
        let len = self.checked_len(raw_len)?;
        self.read_bytes_of_len(len)
    }
}
