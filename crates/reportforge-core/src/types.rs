use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Recognized field type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Integer,
    Guid,
    Enum,
    Object,
    Array,
    Duration,
    DateTime,
    Date,
}

impl FieldType {
    pub const ALL: [FieldType; 9] = [
        FieldType::String,
        FieldType::Integer,
        FieldType::Guid,
        FieldType::Enum,
        FieldType::Object,
        FieldType::Array,
        FieldType::Duration,
        FieldType::DateTime,
        FieldType::Date,
    ];

    /// Canonical lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Guid => "guid",
            FieldType::Enum => "enum",
            FieldType::Object => "object",
            FieldType::Array => "array",
            FieldType::Duration => "duration",
            FieldType::DateTime => "datetime",
            FieldType::Date => "date",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    /// Tags match case-insensitively; unknown tags keep their original spelling
    /// in the error.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.to_ascii_lowercase();
        FieldType::ALL
            .into_iter()
            .find(|field_type| field_type.as_str() == normalized)
            .ok_or_else(|| Error::UnsupportedType(value.to_string()))
    }
}
