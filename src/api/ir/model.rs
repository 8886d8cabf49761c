//! Domain records for one generation run.
//!
//! Ingestion flattens the module tree into a [`Universe`]; the resolver
//! annotates entities with their resolved definitions and modules with
//! their aggregated dependencies; the render pass fills in source text and
//! formatted descriptions. From then on everything is read-only and the
//! emitter consumes it. Nothing here persists across runs.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::api::description::{ParamDescription, TypeShape};

/// Module tag marking an entity as re-exported from the package root
/// rather than from a sibling module's files.
pub const CUSTOM_MODULE: &str = "custom";

/// Resolved closure of named definitions: name -> owning module, in
/// first-discovery order.
pub type Definitions = IndexMap<String, String>;

/// Callback producing a module's full `index` file body from the
/// concatenated function source text.
pub type ModuleTemplate = Box<dyn Fn(&str) -> String>;

/// The full set of ingested entities across all modules: the search space
/// for dependency resolution and the worklist for rendering and emission.
pub struct Universe {
    /// Modules in declaration order.
    pub modules: Vec<ModuleUnit>,
    /// All type definitions, in declaration order across modules.
    pub types: Vec<TypeDef>,
    /// All function signatures, in declaration order across modules.
    pub functions: Vec<FunctionDef>,
}

impl Universe {
    /// Lookup table from type name to index in `types`.
    ///
    /// Names are assumed globally unique; if the description violates that,
    /// the last-ingested definition wins here while both copies remain in
    /// the flat collection.
    pub fn type_lookup(&self) -> IndexMap<String, usize> {
        self.types
            .iter()
            .enumerate()
            .map(|(index, ty)| (ty.name.clone(), index))
            .collect()
    }
}

impl fmt::Debug for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Universe")
            .field("modules", &self.modules)
            .field("types", &self.types)
            .field("functions", &self.functions)
            .finish()
    }
}

/// One module, with its per-module dependency aggregates.
pub struct ModuleUnit {
    /// Module name; output subdirectory name.
    pub name: String,
    /// One-line summary.
    pub summary: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Other-module name -> type names this module must import from it.
    /// Both levels iterate in first-insert order.
    pub type_dependencies: IndexMap<String, IndexSet<String>>,
    /// Name -> owning-module tag for every definition reachable from this
    /// module's functions. Routing (`"custom"` to the package root,
    /// everything else to `./types`) happens at emission.
    pub function_dependencies: Definitions,
    /// File-template callback built by the render pass.
    pub template: Option<ModuleTemplate>,
}

impl ModuleUnit {
    /// A fresh module record with empty aggregates.
    pub fn new(name: String, summary: Option<String>, description: Option<String>) -> Self {
        Self {
            name,
            summary,
            description,
            type_dependencies: IndexMap::new(),
            function_dependencies: Definitions::new(),
            template: None,
        }
    }
}

impl fmt::Debug for ModuleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleUnit")
            .field("name", &self.name)
            .field("type_dependencies", &self.type_dependencies)
            .field("function_dependencies", &self.function_dependencies)
            .finish_non_exhaustive()
    }
}

/// A type definition tagged with its owning module.
#[derive(Debug, Clone)]
pub struct TypeDef {
    /// Type name; unique across the type universe.
    pub name: String,
    /// Owning module name.
    pub module: String,
    /// One-line summary.
    pub summary: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Structural shape.
    pub shape: TypeShape,
    /// Resolved transitive closure of named types this type references,
    /// excluding itself. Populated by the resolver.
    pub definitions: Definitions,
    /// Rendered source text. Populated by the render pass.
    pub source: String,
    /// Rendered description, ready for doc-block wrapping. Populated by
    /// the render pass.
    pub formatted_description: String,
}

impl TypeDef {
    /// A fresh definition with empty annotations.
    pub fn new(
        name: String,
        module: String,
        summary: Option<String>,
        description: Option<String>,
        shape: TypeShape,
    ) -> Self {
        Self {
            name,
            module,
            summary,
            description,
            shape,
            definitions: Definitions::new(),
            source: String::new(),
            formatted_description: String::new(),
        }
    }
}

/// A function signature tagged with its owning module.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    /// Function name.
    pub name: String,
    /// Owning module name; may be the [`CUSTOM_MODULE`] sentinel.
    pub module: String,
    /// One-line summary.
    pub summary: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Parameters, in declaration order.
    pub params: Vec<ParamDescription>,
    /// Result shape, if any.
    pub result: Option<TypeShape>,
    /// Resolved transitive closure of named types this function references.
    /// Populated by the resolver.
    pub definitions: Definitions,
    /// Rendered source text. Populated by the render pass.
    pub source: String,
    /// Rendered description; for functions this already carries its comment
    /// markers and is concatenated as-is at emission. Populated by the
    /// render pass.
    pub formatted_description: String,
}

impl FunctionDef {
    /// A fresh definition with empty annotations.
    pub fn new(
        name: String,
        module: String,
        summary: Option<String>,
        description: Option<String>,
        params: Vec<ParamDescription>,
        result: Option<TypeShape>,
    ) -> Self {
        Self {
            name,
            module,
            summary,
            description,
            params,
            result,
            definitions: Definitions::new(),
            source: String::new(),
            formatted_description: String::new(),
        }
    }
}
