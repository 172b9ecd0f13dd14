//! Error types and exit codes for rumo
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown capital, region or map table entry)

use thiserror::Error;

/// Exit codes reported by the rumo binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown capital/region, missing table entry (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during rumo operations
#[derive(Error, Debug)]
pub enum RumoError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("best-first search needs a heuristic")]
    MissingHeuristic,

    // Data errors (exit code 3)
    #[error("unknown capital: {name}")]
    UnknownCapital { name: String },

    #[error("unknown region code: {code}")]
    UnknownRegion { code: String },

    #[error("no travel cost recorded for {from} - {to}")]
    MissingBorderCost { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RumoError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RumoError::UnknownFormat(_)
            | RumoError::UsageError(_)
            | RumoError::MissingHeuristic => ExitCode::Usage,

            RumoError::UnknownCapital { .. }
            | RumoError::UnknownRegion { .. }
            | RumoError::MissingBorderCost { .. } => ExitCode::Data,

            RumoError::Json(_) | RumoError::Io(_) => ExitCode::Failure,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            RumoError::UnknownFormat(_) => "unknown_format",
            RumoError::UsageError(_) => "usage_error",
            RumoError::MissingHeuristic => "missing_heuristic",
            RumoError::UnknownCapital { .. } => "unknown_capital",
            RumoError::UnknownRegion { .. } => "unknown_region",
            RumoError::MissingBorderCost { .. } => "missing_border_cost",
            RumoError::Json(_) => "json_error",
            RumoError::Io(_) => "io_error",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for rumo operations
pub type Result<T> = std::result::Result<T, RumoError>;
