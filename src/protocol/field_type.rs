use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Wire type tag of a struct field or container element.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, TryFromPrimitive, IntoPrimitive)]
pub enum FieldType {
    Stop = 0,
    Void = 1,
    Bool = 2,
    Byte = 3,
    Double = 4,
    I16 = 6,
    I32 = 8,
    I64 = 10,
    /// Also used for binary values.
    String = 11,
    Struct = 12,
    Map = 13,
    Set = 14,
    List = 15,
}
