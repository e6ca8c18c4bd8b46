// src/lib.rs
pub mod app;
pub mod args;
pub mod logging;
