// crates/gate-core/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::max_results::{MAX_RESULTS_MAX, MAX_RESULTS_MIN};

/// Exit status shared by every validation failure.
pub const VALIDATION_EXIT_CODE: u8 = 1;

/// Errors raised while validating a request or delegating it to the container.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("expected 3 arguments, got {found}")]
    Arity { found: usize },

    #[error("max_results must be an integer")]
    Format,

    #[error("max_results must be between {} and {}", MAX_RESULTS_MIN, MAX_RESULTS_MAX)]
    Range,

    #[error("cannot create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start container runtime '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("external processor exited with status {code}")]
    Delegation { code: i32 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GateError {
    /// Process exit status the CLI reports for this error.
    ///
    /// Spawn failures follow the shell convention: 127 when the runtime is
    /// missing, 126 when it exists but cannot be executed.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Arity { .. }
            | Self::Format
            | Self::Range
            | Self::OutputDir { .. }
            | Self::Json(_) => VALIDATION_EXIT_CODE,
            Self::Spawn { source, .. } => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    127
                } else {
                    126
                }
            }
            Self::Delegation { code } => clamp_status(*code),
        }
    }

    /// True for errors caused by the arguments themselves.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Arity { .. } | Self::Format | Self::Range
        )
    }
}

fn clamp_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(VALIDATION_EXIT_CODE)
}

pub type Result<T> = std::result::Result<T, GateError>;
