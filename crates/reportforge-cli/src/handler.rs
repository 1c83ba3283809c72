use reportforge_core::FieldNode;
use reportforge_generate::{BatchResult, ReportService};

/// Outcome of a generate request as seen by the caller.
#[derive(Debug, PartialEq, Eq)]
pub enum GenerateResponse {
    Ok(BatchResult),
    /// The request was rejected; carries the error message.
    BadRequest(String),
}

/// Run a generate request, turning any core error into a rejection.
pub fn handle_generate(
    service: &mut dyn ReportService,
    count: i64,
    schema: &[FieldNode],
) -> GenerateResponse {
    match service.generate(count, schema) {
        Ok(batch) => GenerateResponse::Ok(batch),
        Err(err) => {
            tracing::warn!(event = "request_rejected", error = %err);
            GenerateResponse::BadRequest(err.to_string())
        }
    }
}
