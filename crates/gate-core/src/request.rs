// crates/gate-core/src/request.rs
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::Result;
use crate::max_results::{MaxResults, parse_max_results};

/// A validated processor request. Nothing has touched the filesystem yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateRequest {
    /// Forwarded verbatim, empty and non-UTF-8 values included.
    pub query: OsString,
    pub max_results: MaxResults,
    /// As given on the command line; resolved later.
    pub output_dir: PathBuf,
}

impl GateRequest {
    /// Validate raw argument text.
    ///
    /// # Errors
    /// Returns [`crate::GateError::Format`] or [`crate::GateError::Range`] for a bad `max_results`.
    pub fn from_raw(
        query: impl Into<OsString>,
        max_results: &str,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        Ok(Self {
            query: query.into(),
            max_results: parse_max_results(max_results)?,
            output_dir: output_dir.into(),
        })
    }
}
