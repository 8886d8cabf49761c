//! Pipeline entry point.
//!
//! This module is a thin wrapper around the generation passes. The
//! pipeline is:
//! 1. Ingest: api description -> flat universe
//! 2. Resolve: per-entity closures, per-module dependency aggregates
//! 3. Render: collaborator invocation, module templates
//! 4. Emit: per-module files through the output sink

use crate::api::description::ApiDescription;
use crate::api::ir::emit::GenerateConfig;
use crate::api::ir::render::Render;
use crate::api::ir::sink::OutputSink;
use crate::api::ir::{emit, ingest, render, resolve};
use crate::error::GenerateError;

/// Run the full generation pipeline for one api description.
pub fn generate(
    description: &ApiDescription,
    config: &GenerateConfig,
    renderer: &dyn Render,
    sink: &mut dyn OutputSink,
) -> Result<(), GenerateError> {
    let mut universe = ingest::flatten(description);
    resolve::prepare_dependencies(&mut universe);
    render::prepare_sources(&mut universe, renderer)?;
    emit::emit(&universe, config, sink)
}
