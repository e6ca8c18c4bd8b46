// crates/gate-core/src/max_results.rs
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{GateError, Result};

pub const MAX_RESULTS_MIN: u32 = 1;
pub const MAX_RESULTS_MAX: u32 = 100;

/// Number of results requested from the processor, always within
/// [`MAX_RESULTS_MIN`, `MAX_RESULTS_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MaxResults(u32);

impl MaxResults {
    pub fn new(value: u32) -> Option<Self> {
        (MAX_RESULTS_MIN..=MAX_RESULTS_MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MaxResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MaxResults {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self> {
        parse_max_results(s)
    }
}

fn digits_only(s: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("digit pattern compiles"));
    re.is_match(s)
}

/// Parse `max_results` from its command-line text.
///
/// The format check runs first: anything but plain ASCII digits is a
/// [`GateError::Format`]. A digit string outside the inclusive range,
/// including one too large for `u64`, is a [`GateError::Range`].
///
/// # Errors
/// Returns `Format` or `Range` as described above.
pub fn parse_max_results(s: &str) -> Result<MaxResults> {
    if !digits_only(s) {
        tracing::debug!(input = s, "max_results is not a plain integer");
        return Err(GateError::Format);
    }
    s.parse::<u64>()
        .ok()
        .and_then(|v| u32::try_from(v).ok())
        .and_then(MaxResults::new)
        .ok_or_else(|| {
            tracing::debug!(input = s, "max_results out of range");
            GateError::Range
        })
}
