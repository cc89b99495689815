mod binary_input_protocol;
mod binary_output_protocol;
mod binary_protocol_config;
mod collection_header;
mod field_header;
mod field_type;
mod message_header;
mod message_type;
mod protocol_error;
mod protocol_trait;
mod wire_struct;

pub use binary_input_protocol::BinaryInputProtocol;
pub use binary_output_protocol::BinaryOutputProtocol;
pub use binary_protocol_config::BinaryProtocolConfig;
pub use collection_header::{ListHeader, MapHeader};
pub use field_header::FieldHeader;
pub use field_type::FieldType;
pub use message_header::MessageHeader;
pub use message_type::MessageType;
pub use protocol_error::ProtocolError;
pub use protocol_trait::{InputProtocol, OutputProtocol, skip_field};
pub use wire_struct::WireStruct;
