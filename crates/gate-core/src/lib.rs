// crates/gate-core/src/lib.rs
//! Validation and container delegation for `arxiv_gate`.
//!
//! A request is validated into a [`GateRequest`], then a [`Gate`] creates the
//! output directory and runs the processor image through a [`ContainerRunner`].

pub mod config;
pub mod container;
pub mod error;
pub mod gate;
pub mod max_results;
pub mod output_dir;
pub mod request;
pub mod runner;

pub use config::GateConfig;
pub use container::ContainerInvocation;
pub use error::{GateError, Result};
pub use gate::Gate;
pub use max_results::{MaxResults, parse_max_results};
pub use output_dir::{ensure_output_dir, logical_absolute};
pub use request::GateRequest;
pub use runner::{ContainerRunner, ExitOutcome, ProcessRunner};
