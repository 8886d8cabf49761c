//! Core generation passes.
//!
//! This module defines the four-stage pipeline over the flattened
//! type/function universe:
//! 1. `ingest`: api description -> flat universe, entities tagged with
//!    their owning module
//! 2. `resolve`: transitive closure of named type references, per-module
//!    dependency aggregation
//! 3. `render`: collaborator invocation storing source text and
//!    descriptions on the entities
//! 4. `emit`: per-module `types.ts`/`index.ts` assembly through the
//!    output sink
//!
//! ## Module Structure
//!
//! - `model`: domain records (`Universe`, `ModuleUnit`, `TypeDef`,
//!   `FunctionDef`)
//! - `ingest`: flattening pass
//! - `resolve`: dependency resolution and aggregation
//! - `render`: the `Render` seam and the default `TsRenderer`
//! - `emit`: file assembly and the emission pass
//! - `sink`: the `OutputSink` seam (`DirectorySink`, `MemorySink`)
//! - `utils`: shared emission helpers

pub mod emit;
pub mod ingest;
pub mod model;
pub mod render;
pub mod resolve;
pub mod sink;
pub mod utils;
