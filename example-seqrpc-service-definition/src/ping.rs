use seqrpc::protocol::{FieldType, InputProtocol, OutputProtocol, ProtocolError, WireStruct};

/// Fieldless call, usable both one-way and two-way.
pub struct Ping;

impl Ping {
    pub const METHOD_NAME: &'static str = "ping";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PingArgs;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PingResult;

fn write_empty(oprot: &mut dyn OutputProtocol, struct_name: &str) -> Result<(), ProtocolError> {
    oprot.write_struct_begin(struct_name)?;
    oprot.write_field_stop()?;
    oprot.write_struct_end()
}

impl WireStruct for PingArgs {
    fn write(&self, oprot: &mut dyn OutputProtocol) -> Result<(), ProtocolError> {
        write_empty(oprot, "ping_args")
    }

    fn read(&mut self, iprot: &mut dyn InputProtocol) -> Result<(), ProtocolError> {
        iprot.skip(FieldType::Struct)
    }
}

impl WireStruct for PingResult {
    fn write(&self, oprot: &mut dyn OutputProtocol) -> Result<(), ProtocolError> {
        write_empty(oprot, "ping_result")
    }

    fn read(&mut self, iprot: &mut dyn InputProtocol) -> Result<(), ProtocolError> {
        iprot.skip(FieldType::Struct)
    }
}
