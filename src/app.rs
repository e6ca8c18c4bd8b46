// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use arxiv_gate_core::{Gate, GateConfig, GateRequest};

use crate::args::Args;

/// Layer command-line flags over the environment-derived config.
pub fn resolve_config(config: GateConfig, args: &Args) -> GateConfig {
    config
        .with_runtime(args.runtime.clone())
        .with_image(args.image.clone())
        .with_container_name(args.name.clone())
}

pub fn run(args: Args, config: GateConfig) -> Result<()> {
    let config = resolve_config(config, &args);
    let max_results = args.max_results.to_string_lossy();
    let request = GateRequest::from_raw(args.query, &max_results, args.output_dir)?;
    let gate = Gate::new(config);

    if args.dry_run {
        let plan = gate.plan(&request).to_json()?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{plan}").context("failed to write dry-run plan")?;
        return Ok(());
    }

    gate.run(&request)?;
    Ok(())
}
