use crate::protocol::FieldType;

/// Header of a list or set: element type plus element count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ListHeader {
    pub element_type: FieldType,
    pub size: i32,
}

/// Header of a map: key type, value type and entry count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MapHeader {
    pub key_type: FieldType,
    pub value_type: FieldType,
    pub size: i32,
}
