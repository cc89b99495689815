use seqrpc::protocol::{FieldType, InputProtocol, OutputProtocol, ProtocolError, WireStruct};

pub struct Add;

impl Add {
    pub const METHOD_NAME: &'static str = "add";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddArgs {
    pub a: i32,
    pub b: i32,
}

impl WireStruct for AddArgs {
    fn write(&self, oprot: &mut dyn OutputProtocol) -> Result<(), ProtocolError> {
        oprot.write_struct_begin("add_args")?;
        oprot.write_field_begin("a", FieldType::I32, 1)?;
        oprot.write_i32(self.a)?;
        oprot.write_field_end()?;
        oprot.write_field_begin("b", FieldType::I32, 2)?;
        oprot.write_i32(self.b)?;
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
                (1, FieldType::I32) => self.a = iprot.read_i32()?,
                (2, FieldType::I32) => self.b = iprot.read_i32()?,
                (_, other) => iprot.skip(other)?,
            }
            iprot.read_field_end()?;
        }
        iprot.read_struct_end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddResult {
    pub value: i32,
}

impl WireStruct for AddResult {
    fn write(&self, oprot: &mut dyn OutputProtocol) -> Result<(), ProtocolError> {
        oprot.write_struct_begin("add_result")?;
        oprot.write_field_begin("success", FieldType::I32, 0)?;
        oprot.write_i32(self.value)?;
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
                (0, FieldType::I32) => self.value = iprot.read_i32()?,
                (_, other) => iprot.skip(other)?,
            }
            iprot.read_field_end()?;
        }
        iprot.read_struct_end()
    }
}
