use thiserror::Error;

/// Errors raised while rendering a report.
///
/// In-memory writers never fail in practice; `Io` exists so that a failing
/// sink is propagated instead of dropped.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid findings document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
