use schemars::JsonSchema;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::{Deserialize, Serialize};

/// One field of a schema document, as supplied by the caller.
///
/// `field_type` is kept as the raw tag so unknown types surface as
/// `UnsupportedType` during resolution instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldNode {
    /// Output key for the generated value.
    #[serde(alias = "fieldName")]
    pub name: String,
    /// Type tag (`string`, `integer`, `guid`, `enum`, `object`, `array`,
    /// `duration`, `datetime`, `date`), matched case-insensitively.
    #[serde(rename = "type", alias = "fieldType")]
    pub field_type: String,
    /// Candidate literals for `enum` fields.
    #[serde(
        rename = "enumValues",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub enum_values: Option<Vec<String>>,
    /// Element structure for `object` and `array` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Vec<FieldNode>>,
}

impl FieldNode {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            enum_values: None,
            schema: None,
        }
    }

    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_schema(mut self, schema: Vec<FieldNode>) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// A field whose type tag and payload have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub name: String,
    pub kind: FieldKind,
}

impl ResolvedField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Closed set of generatable kinds, each carrying the payload it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Guid,
    Enum(Vec<String>),
    Object(Vec<ResolvedField>),
    Array(Vec<ResolvedField>),
    Duration,
    DateTime,
    Date,
}

/// Emit the JSON Schema for a schema document (an array of field nodes).
pub fn schema_document_json_schema() -> RootSchema {
    schema_for!(Vec<FieldNode>)
}
