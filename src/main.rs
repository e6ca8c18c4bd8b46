// src/main.rs
use std::process::ExitCode;

use arxiv_gate::args::{self, EXAMPLE, Parsed, USAGE};
use arxiv_gate::{app, logging};
use arxiv_gate_core::GateConfig;
use arxiv_gate_core::error::{GateError, VALIDATION_EXIT_CODE};

fn main() -> ExitCode {
    let config = GateConfig::from_env();
    logging::init(config.log_level);

    let args = match args::parse_from(std::env::args_os()) {
        Parsed::Run(args) => args,
        Parsed::Info(info) => {
            if let Err(err) = info.print() {
                tracing::debug!(error = %err, "could not print help");
            }
            return ExitCode::SUCCESS;
        }
        Parsed::Usage(err) => {
            eprintln!("Error: {err}");
            eprintln!("{USAGE}");
            eprintln!("{EXAMPLE}");
            return ExitCode::from(err.exit_code());
        }
    };

    match app::run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<GateError>() {
            // the processor already reported its own failure
            Some(gate @ GateError::Delegation { .. }) => ExitCode::from(gate.exit_code()),
            Some(gate) => {
                eprintln!("Error: {gate}");
                ExitCode::from(gate.exit_code())
            }
            None => {
                eprintln!("Error: {err:#}");
                ExitCode::from(VALIDATION_EXIT_CODE)
            }
        },
    }
}
