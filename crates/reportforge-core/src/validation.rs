use crate::error::{Error, Result};
use crate::schema::{FieldKind, FieldNode, ResolvedField};
use crate::types::FieldType;

/// Resolve a schema document into checked fields.
///
/// This checks:
/// - every field has a non-empty name
/// - every type tag is recognized
/// - `enum` fields carry at least one value
/// - `object`/`array` fields carry a non-empty nested schema
///
/// Resolution stops at the first invalid field in declaration order.
/// Duplicate names are not rejected.
pub fn resolve_schema(schema: &[FieldNode]) -> Result<Vec<ResolvedField>> {
    resolve_fields(schema, None)
}

fn resolve_fields(schema: &[FieldNode], parent: Option<&str>) -> Result<Vec<ResolvedField>> {
    schema
        .iter()
        .map(|node| resolve_field(node, parent))
        .collect()
}

fn resolve_field(node: &FieldNode, parent: Option<&str>) -> Result<ResolvedField> {
    let path = match parent {
        Some(parent) => format!("{parent}.{}", node.name),
        None => node.name.clone(),
    };
    if node.name.is_empty() {
        let location = match parent {
            Some(parent) => format!(" under '{parent}'"),
            None => String::new(),
        };
        return Err(Error::InvalidSchema(format!(
            "field name must not be empty{location}"
        )));
    }
    let field_type: FieldType = node.field_type.parse()?;

    let kind = match field_type {
        FieldType::String => FieldKind::String,
        FieldType::Integer => FieldKind::Integer,
        FieldType::Guid => FieldKind::Guid,
        FieldType::Duration => FieldKind::Duration,
        FieldType::DateTime => FieldKind::DateTime,
        FieldType::Date => FieldKind::Date,
        FieldType::Enum => match node.enum_values.as_deref() {
            Some(values) if !values.is_empty() => FieldKind::Enum(values.to_vec()),
            _ => {
                return Err(Error::InvalidSchema(format!(
                    "enum values are required for field '{path}'"
                )));
            }
        },
        FieldType::Object => FieldKind::Object(resolve_nested(node, &path, field_type)?),
        FieldType::Array => {
            let element_path = format!("{path}[]");
            FieldKind::Array(resolve_nested(node, &element_path, field_type)?)
        }
    };

    Ok(ResolvedField {
        name: node.name.clone(),
        kind,
    })
}

fn resolve_nested(
    node: &FieldNode,
    path: &str,
    field_type: FieldType,
) -> Result<Vec<ResolvedField>> {
    match node.schema.as_deref() {
        Some(schema) if !schema.is_empty() => resolve_fields(schema, Some(path)),
        _ => Err(Error::InvalidSchema(format!(
            "schema is required for {field_type} field '{}'",
            path.trim_end_matches("[]")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nested_kinds_in_declaration_order() {
        let schema = vec![
            FieldNode::new("id", "GUID"),
            FieldNode::new("status", "Enum").with_enum_values(["open", "closed"]),
            FieldNode::new("items", "array").with_schema(vec![
                FieldNode::new("n", "integer"),
                FieldNode::new("owner", "object")
                    .with_schema(vec![FieldNode::new("email", "string")]),
            ]),
        ];

        let resolved = resolve_schema(&schema).expect("schema resolves");

        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0], ResolvedField::new("id", FieldKind::Guid));
        assert_eq!(
            resolved[1].kind,
            FieldKind::Enum(vec!["open".to_string(), "closed".to_string()])
        );
        let FieldKind::Array(elements) = &resolved[2].kind else {
            panic!("items should resolve to an array");
        };
        assert_eq!(elements[0], ResolvedField::new("n", FieldKind::Integer));
        assert_eq!(
            elements[1].kind,
            FieldKind::Object(vec![ResolvedField::new("email", FieldKind::String)])
        );
    }

    #[test]
    fn enum_without_values_is_invalid() {
        let schema = vec![FieldNode::new("status", "enum").with_enum_values(Vec::<String>::new())];
        let err = resolve_schema(&schema).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid schema: enum values are required for field 'status'"
        );

        let schema = vec![FieldNode::new("status", "enum")];
        assert!(matches!(
            resolve_schema(&schema),
            Err(Error::InvalidSchema(_))
        ));
    }

    #[test]
    fn composite_without_schema_reports_nested_path() {
        let schema = vec![FieldNode::new("items", "array").with_schema(vec![
            FieldNode::new("meta", "object").with_schema(Vec::new()),
        ])];
        let err = resolve_schema(&schema).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid schema: schema is required for object field 'items[].meta'"
        );

        let schema = vec![FieldNode::new("items", "array")];
        let err = resolve_schema(&schema).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid schema: schema is required for array field 'items'"
        );
    }

    #[test]
    fn unknown_type_fails_before_later_fields() {
        let schema = vec![
            FieldNode::new("position", "vector3"),
            FieldNode::new("status", "enum"),
        ];
        assert_eq!(
            resolve_schema(&schema),
            Err(Error::UnsupportedType("vector3".to_string()))
        );
    }

    #[test]
    fn empty_field_name_is_invalid() {
        let schema = vec![FieldNode::new("", "string")];
        assert_eq!(
            resolve_schema(&schema),
            Err(Error::InvalidSchema("field name must not be empty".to_string()))
        );

        let schema = vec![
            FieldNode::new("owner", "object").with_schema(vec![FieldNode::new("", "integer")]),
        ];
        assert_eq!(
            resolve_schema(&schema),
            Err(Error::InvalidSchema(
                "field name must not be empty under 'owner'".to_string()
            ))
        );
    }

    #[test]
    fn payloads_on_scalar_types_are_ignored() {
        let schema = vec![
            FieldNode::new("name", "string")
                .with_enum_values(["ignored"])
                .with_schema(vec![FieldNode::new("x", "bogus")]),
        ];
        let resolved = resolve_schema(&schema).expect("scalar payloads ignored");
        assert_eq!(resolved[0].kind, FieldKind::String);
    }
}
