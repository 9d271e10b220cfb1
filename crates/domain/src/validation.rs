use serde::Serialize;

/// One violated rule, addressed by the JSON name of the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_id() -> Self {
        Self::new("id", "A pokemon with this Id already exists")
    }
}
