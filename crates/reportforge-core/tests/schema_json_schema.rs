use reportforge_core::schema_document_json_schema;

#[test]
fn json_schema_describes_field_nodes() {
    let generated = schema_document_json_schema();
    let json = serde_json::to_value(&generated).expect("serialize generated schema");

    assert_eq!(json["type"], "array");
    assert_eq!(json["items"]["$ref"], "#/definitions/FieldNode");

    let node = &json["definitions"]["FieldNode"];
    let properties = node["properties"]
        .as_object()
        .expect("field node properties");
    for key in ["name", "type", "enumValues", "schema"] {
        assert!(properties.contains_key(key), "missing property {key}");
    }

    let required: Vec<&str> = node["required"]
        .as_array()
        .expect("required list")
        .iter()
        .filter_map(|value| value.as_str())
        .collect();
    assert!(required.contains(&"name"));
    assert!(required.contains(&"type"));
    assert!(!required.contains(&"enumValues"));
}
