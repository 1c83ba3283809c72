use std::fmt;
use std::time::Instant;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use reportforge_core::{Error, FieldNode, ResolvedField, Result, resolve_schema};

use crate::clock::{Clock, SystemClock};
use crate::generators::{GeneratorContext, generate_record};
use crate::model::{BatchResult, GenerateOptions};

/// Operation exposed to transport front ends.
pub trait ReportService {
    fn generate(&mut self, count: i64, schema: &[FieldNode]) -> Result<BatchResult>;
}

/// Entry point for generating record batches from a schema.
///
/// The engine owns its random source; give each concurrent unit of work its
/// own engine.
pub struct GenerationEngine {
    options: GenerateOptions,
    rng: Box<dyn RngCore + Send>,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for GenerationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationEngine")
            .field("options", &self.options)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self::with_parts(options, rng, SystemClock)
    }

    pub fn with_parts(
        options: GenerateOptions,
        rng: impl RngCore + Send + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            options,
            rng: Box::new(rng),
            clock: Box::new(clock),
        }
    }

    /// Resolve `schema` and generate `count` records.
    pub fn generate(&mut self, count: i64, schema: &[FieldNode]) -> Result<BatchResult> {
        let count = usize::try_from(count).map_err(|_| {
            let err = Error::InvalidArgument(format!(
                "record count must be non-negative, got {count}"
            ));
            warn!(error = %err, "batch rejected");
            err
        })?;
        let resolved = resolve_schema(schema).inspect_err(|err| {
            warn!(error = %err, "batch rejected");
        })?;
        self.generate_batch(count, &resolved)
    }

    /// Generate `count` independent records from an already resolved schema.
    pub fn generate_batch(&mut self, count: usize, schema: &[ResolvedField]) -> Result<BatchResult> {
        if let Some(max) = self.options.max_records {
            if count as u64 > max {
                let err = Error::InvalidArgument(format!(
                    "record count {count} exceeds the configured maximum of {max}"
                ));
                warn!(error = %err, "batch rejected");
                return Err(err);
            }
        }

        let start = Instant::now();
        info!(count, fields = schema.len(), "batch generation started");

        let ctx = GeneratorContext {
            clock: self.clock.as_ref(),
        };
        let rng: &mut dyn RngCore = self.rng.as_mut();
        let mut records = Vec::new();
        for index in 0..count {
            let record = generate_record(schema, &ctx, rng).inspect_err(|err| {
                warn!(index, error = %err, "batch aborted");
            })?;
            debug!(index, fields = record.len(), "record generated");
            records.push(record);
        }

        info!(
            records = records.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "batch generation completed"
        );

        Ok(BatchResult {
            report_entry: records,
        })
    }
}

impl ReportService for GenerationEngine {
    fn generate(&mut self, count: i64, schema: &[FieldNode]) -> Result<BatchResult> {
        GenerationEngine::generate(self, count, schema)
    }
}
