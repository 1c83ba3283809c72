use std::env;

use reportforge_core::FieldNode;
use reportforge_generate::{GenerateOptions, GenerationEngine, OutputFormat, write_batch};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let count = env::args()
        .nth(1)
        .map(|arg| arg.parse::<i64>())
        .transpose()?
        .unwrap_or(3);

    let schema = vec![
        FieldNode::new("id", "guid"),
        FieldNode::new("name", "string"),
        FieldNode::new("status", "enum").with_enum_values(["active", "archived"]),
        FieldNode::new("tasks", "array").with_schema(vec![
            FieldNode::new("title", "string"),
            FieldNode::new("estimate", "duration"),
        ]),
        FieldNode::new("createdAt", "datetime"),
    ];

    let mut engine = GenerationEngine::new(GenerateOptions::default());
    let batch = engine.generate(count, &schema)?;
    write_batch(std::io::stdout().lock(), &batch, OutputFormat::Json, true)?;
    Ok(())
}
