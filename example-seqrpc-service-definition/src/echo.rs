use seqrpc::protocol::{FieldType, InputProtocol, OutputProtocol, ProtocolError, WireStruct};

pub struct Echo;

impl Echo {
    pub const METHOD_NAME: &'static str = "echo";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EchoArgs {
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EchoResult {
    pub payload: Vec<u8>,
}

// Both sides carry a single binary field, only the field ID differs.
fn write_payload(
    oprot: &mut dyn OutputProtocol,
    struct_name: &str,
    field_id: i16,
    payload: &[u8],
) -> Result<(), ProtocolError> {
    oprot.write_struct_begin(struct_name)?;
    oprot.write_field_begin("payload", FieldType::String, field_id)?;
    oprot.write_binary(payload)?;
    oprot.write_field_end()?;
    oprot.write_field_stop()?;
    oprot.write_struct_end()
}

fn read_payload(
    iprot: &mut dyn InputProtocol,
    field_id: i16,
    payload: &mut Vec<u8>,
) -> Result<(), ProtocolError> {
    iprot.read_struct_begin()?;
    loop {
        let field = iprot.read_field_begin()?;
        match (field.id, field.field_type) {
            (_, FieldType::Stop) => break,
            (id, FieldType::String) if id == field_id => *payload = iprot.read_binary()?,
            (_, other) => iprot.skip(other)?,
        }
        iprot.read_field_end()?;
    }
    iprot.read_struct_end()
}

impl WireStruct for EchoArgs {
    fn write(&self, oprot: &mut dyn OutputProtocol) -> Result<(), ProtocolError> {
        write_payload(oprot, "echo_args", 1, &self.payload)
    }

    fn read(&mut self, iprot: &mut dyn InputProtocol) -> Result<(), ProtocolError> {
        read_payload(iprot, 1, &mut self.payload)
    }
}

impl WireStruct for EchoResult {
    fn write(&self, oprot: &mut dyn OutputProtocol) -> Result<(), ProtocolError> {
        write_payload(oprot, "echo_result", 0, &self.payload)
    }

    fn read(&mut self, iprot: &mut dyn InputProtocol) -> Result<(), ProtocolError> {
        read_payload(iprot, 0, &mut self.payload)
    }
}
