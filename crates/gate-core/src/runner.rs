// crates/gate-core/src/runner.rs
use std::process::{Command, ExitStatus};

use crate::container::ContainerInvocation;
use crate::error::{GateError, Result};

/// Exit status of the delegated process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub code: i32,
}

impl ExitOutcome {
    pub const SUCCESS: Self = Self { code: 0 };

    pub fn new(code: i32) -> Self {
        Self { code }
    }

    #[inline]
    pub fn success(self) -> bool {
        self.code == 0
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::new(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::new(128 + signal);
            }
        }
        Self::new(1)
    }
}

/// Launches a container and waits for it.
pub trait ContainerRunner {
    /// # Errors
    /// Returns [`GateError::Spawn`] when the runtime cannot be started.
    fn run(&self, invocation: &ContainerInvocation) -> Result<ExitOutcome>;
}

/// Runs the invocation as a child process with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ContainerRunner for ProcessRunner {
    fn run(&self, invocation: &ContainerInvocation) -> Result<ExitOutcome> {
        tracing::info!(command = %invocation.display_command(), "starting processor container");
        let status = Command::new(&invocation.program)
            .args(invocation.args())
            .status()
            .map_err(|source| GateError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        Ok(status.into())
    }
}
