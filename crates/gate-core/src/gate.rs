// crates/gate-core/src/gate.rs
use crate::config::GateConfig;
use crate::container::ContainerInvocation;
use crate::error::{GateError, Result};
use crate::output_dir::{ensure_output_dir, logical_absolute};
use crate::request::GateRequest;
use crate::runner::{ContainerRunner, ExitOutcome, ProcessRunner};

/// Turns validated requests into processor runs.
#[derive(Debug, Clone)]
pub struct Gate<R = ProcessRunner> {
    config: GateConfig,
    runner: R,
}

impl Gate<ProcessRunner> {
    pub fn new(config: GateConfig) -> Self {
        Self::with_runner(config, ProcessRunner)
    }
}

impl<R: ContainerRunner> Gate<R> {
    pub fn with_runner(config: GateConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Invocation that [`Gate::run`] would launch, with no side effects.
    pub fn plan(&self, request: &GateRequest) -> ContainerInvocation {
        let host_dir = logical_absolute(&request.output_dir);
        ContainerInvocation::new(&self.config, request, &host_dir)
    }

    /// Create the output directory, launch the processor and wait for it.
    ///
    /// # Errors
    /// - [`GateError::OutputDir`] if the directory cannot be created
    /// - [`GateError::Spawn`] if the runtime cannot be started
    /// - [`GateError::Delegation`] if the processor exits non-zero
    pub fn run(&self, request: &GateRequest) -> Result<ExitOutcome> {
        tracing::debug!(
            query = %request.query.to_string_lossy(),
            max_results = request.max_results.get(),
            output_dir = %request.output_dir.display(),
            "request validated"
        );
        let host_dir = ensure_output_dir(&request.output_dir)?;
        let invocation = ContainerInvocation::new(&self.config, request, &host_dir);

        let outcome = self.runner.run(&invocation)?;
        if outcome.success() {
            Ok(outcome)
        } else {
            tracing::warn!(code = outcome.code, "processor container failed");
            Err(GateError::Delegation { code: outcome.code })
        }
    }
}
