pub mod primitives;

use rand::RngCore;

use reportforge_core::{Error, FieldKind, ResolvedField, Result};

use crate::clock::Clock;
use crate::model::{GeneratedValue, Record};

/// Shared inputs for value generation beyond the random source.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub clock: &'a dyn Clock,
}

/// Generate one value for a field kind, recursing into nested schemas.
pub fn generate_value(
    kind: &FieldKind,
    ctx: &GeneratorContext<'_>,
    rng: &mut dyn RngCore,
) -> Result<GeneratedValue> {
    match kind {
        FieldKind::String => Ok(GeneratedValue::Text(primitives::random_string(rng))),
        FieldKind::Integer => Ok(GeneratedValue::Int(primitives::random_integer(rng))),
        FieldKind::Guid => Ok(GeneratedValue::Text(primitives::random_guid(rng))),
        FieldKind::Enum(values) => Ok(GeneratedValue::Text(primitives::pick_enum(values, rng)?)),
        FieldKind::Object(schema) => {
            require_schema(schema, "object")?;
            Ok(GeneratedValue::Record(generate_record(schema, ctx, rng)?))
        }
        FieldKind::Array(schema) => {
            require_schema(schema, "array")?;
            let len = primitives::array_len(rng);
            let records = (0..len)
                .map(|_| generate_record(schema, ctx, rng))
                .collect::<Result<Vec<_>>>()?;
            Ok(GeneratedValue::Records(records))
        }
        FieldKind::Duration => Ok(GeneratedValue::Text(primitives::random_duration(rng))),
        FieldKind::DateTime => Ok(GeneratedValue::Text(primitives::format_datetime(
            &ctx.clock.now(),
        ))),
        FieldKind::Date => Ok(GeneratedValue::Text(primitives::format_date(
            &ctx.clock.now(),
        ))),
    }
}

/// Generate one record with a value for every field, in declaration order.
pub fn generate_record(
    schema: &[ResolvedField],
    ctx: &GeneratorContext<'_>,
    rng: &mut dyn RngCore,
) -> Result<Record> {
    let mut record = Record::new();
    for field in schema {
        let value = generate_value(&field.kind, ctx, rng)?;
        record.insert(field.name.clone(), value);
    }
    Ok(record)
}

fn require_schema(schema: &[ResolvedField], kind: &str) -> Result<()> {
    if schema.is_empty() {
        return Err(Error::InvalidSchema(format!(
            "schema is required for {kind} type"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::clock::FixedClock;

    fn fixed_clock() -> FixedClock {
        FixedClock(
            DateTime::parse_from_rfc3339("2024-05-17T09:30:15.250-03:00").expect("valid datetime"),
        )
    }

    #[test]
    fn dispatches_scalar_kinds() {
        let clock = fixed_clock();
        let ctx = GeneratorContext { clock: &clock };
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let date = generate_value(&FieldKind::Date, &ctx, &mut rng).expect("date");
        assert_eq!(date.as_str(), Some("2024-05-17"));

        let datetime = generate_value(&FieldKind::DateTime, &ctx, &mut rng).expect("datetime");
        assert_eq!(datetime.as_str(), Some("2024-05-17T09:30:15.250-03:00"));

        let integer = generate_value(&FieldKind::Integer, &ctx, &mut rng).expect("integer");
        assert!(integer.as_i64().is_some());

        let duration = generate_value(&FieldKind::Duration, &ctx, &mut rng).expect("duration");
        assert!(duration.as_str().is_some());
    }

    #[test]
    fn composite_kinds_reject_empty_schema() {
        let clock = fixed_clock();
        let ctx = GeneratorContext { clock: &clock };
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let err = generate_value(&FieldKind::Object(Vec::new()), &ctx, &mut rng).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid schema: schema is required for object type"
        );
        assert!(matches!(
            generate_value(&FieldKind::Array(Vec::new()), &ctx, &mut rng),
            Err(Error::InvalidSchema(_))
        ));
        assert!(matches!(
            generate_value(&FieldKind::Enum(Vec::new()), &ctx, &mut rng),
            Err(Error::InvalidSchema(_))
        ));
    }

    #[test]
    fn nested_error_aborts_the_record() {
        let clock = fixed_clock();
        let ctx = GeneratorContext { clock: &clock };
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let schema = vec![
            ResolvedField::new("ok", FieldKind::String),
            ResolvedField::new(
                "nested",
                FieldKind::Object(vec![ResolvedField::new("bad", FieldKind::Enum(Vec::new()))]),
            ),
        ];

        assert!(generate_record(&schema, &ctx, &mut rng).is_err());
    }

    #[test]
    fn arrays_hold_one_to_four_shaped_records() {
        let clock = fixed_clock();
        let ctx = GeneratorContext { clock: &clock };
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let kind = FieldKind::Array(vec![
            ResolvedField::new("n", FieldKind::Integer),
            ResolvedField::new("label", FieldKind::String),
        ]);

        for _ in 0..200 {
            let value = generate_value(&kind, &ctx, &mut rng).expect("array");
            let records = value.as_records().expect("records");
            assert!((1..=4).contains(&records.len()));
            for record in records {
                assert_eq!(record.keys().collect::<Vec<_>>(), vec!["n", "label"]);
            }
        }
    }
}
