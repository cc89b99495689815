use crate::protocol::FieldType;

/// Identifies the next field inside a struct. A `field_type` of
/// `FieldType::Stop` marks the end of the struct; `id` is then meaningless.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldHeader {
    pub field_type: FieldType,
    pub id: i16,
}

impl FieldHeader {
    pub fn new(field_type: FieldType, id: i16) -> Self {
        Self { field_type, id }
    }

    pub fn stop() -> Self {
        Self {
            field_type: FieldType::Stop,
            id: 0,
        }
    }

    #[inline]
    pub fn is_stop(&self) -> bool {
        self.field_type == FieldType::Stop
    }
}
