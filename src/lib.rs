//! TypeScript client module generator.
//!
//! Turns a declarative api description (modules carrying type definitions
//! and function signatures) into a per-module TypeScript source tree with
//! correctly deduplicated, correctly scoped import statements. See
//! [`api`] for the pipeline and [`generate_client`] for the filesystem
//! entry point.

#![forbid(unsafe_code)]
#![deny(warnings, unused_must_use, dead_code, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

pub mod api;
mod error;
mod generator;

pub use api::description::ApiDescription;
pub use api::{
    DirectorySink, GenerateConfig, MemorySink, OutputSink, Render, Rendered, TsRenderer, generate,
};
pub use error::GenerateError;
pub use generator::generate_client;
