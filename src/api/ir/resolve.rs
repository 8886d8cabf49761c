//! Dependency resolution over the type universe.
//!
//! For every type and every function this computes the transitive closure
//! of named type definitions reachable from its structural shape,
//! deduplicated by name in first-discovery order. Traversal tracks a
//! visited-name set, so mutually recursive definitions terminate and a
//! definition is visited at most once. An entity's own name is excluded
//! from its closure.
//!
//! The per-module aggregation then produces, for each module, the
//! cross-module import sets the emitter consumes.

use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use crate::api::description::TypeShape;

use super::model::{Definitions, TypeDef, Universe};

/// Resolve the closure of named definitions reachable from `roots`.
///
/// `self_name` is the resolving entity's own name, excluded from the
/// result; functions pass `None`. A reference to a name missing from the
/// universe is skipped, leaving the closure incomplete rather than failing
/// the run.
pub fn resolve<'shape>(
    roots: impl IntoIterator<Item = &'shape TypeShape>,
    self_name: Option<&str>,
    types: &[TypeDef],
    lookup: &IndexMap<String, usize>,
) -> Definitions {
    let mut visited = IndexSet::new();
    if let Some(name) = self_name {
        visited.insert(name.to_string());
    }

    let mut definitions = Definitions::new();
    for root in roots {
        walk(root, self_name, types, lookup, &mut visited, &mut definitions);
    }
    definitions
}

fn walk(
    shape: &TypeShape,
    self_name: Option<&str>,
    types: &[TypeDef],
    lookup: &IndexMap<String, usize>,
    visited: &mut IndexSet<String>,
    definitions: &mut Definitions,
) {
    match shape {
        TypeShape::Primitive { .. } => {}
        TypeShape::Ref { name } => {
            if !visited.insert(name.clone()) {
                return;
            }
            match lookup.get(name) {
                Some(&index) => {
                    let def = &types[index];
                    definitions.insert(def.name.clone(), def.module.clone());
                    walk(&def.shape, self_name, types, lookup, visited, definitions);
                }
                None => {
                    warn!(
                        reference = %name,
                        entity = self_name.unwrap_or("<function>"),
                        "type reference not found in universe; closure left incomplete"
                    );
                }
            }
        }
        TypeShape::Array { item } => {
            walk(item, self_name, types, lookup, visited, definitions);
        }
        TypeShape::Union { variants } => {
            for variant in variants {
                walk(variant, self_name, types, lookup, visited, definitions);
            }
        }
        TypeShape::Struct { fields } => {
            for field in fields {
                walk(&field.shape, self_name, types, lookup, visited, definitions);
            }
        }
    }
}

/// Annotate every entity with its resolved closure, then aggregate each
/// module's cross-module dependencies.
pub fn prepare_dependencies(universe: &mut Universe) {
    let lookup = universe.type_lookup();

    let type_closures: Vec<Definitions> = universe
        .types
        .iter()
        .map(|ty| {
            resolve(
                std::iter::once(&ty.shape),
                Some(&ty.name),
                &universe.types,
                &lookup,
            )
        })
        .collect();
    for (ty, definitions) in universe.types.iter_mut().zip(type_closures) {
        ty.definitions = definitions;
    }

    let function_closures: Vec<Definitions> = universe
        .functions
        .iter()
        .map(|function| {
            let roots: Vec<&TypeShape> = function
                .params
                .iter()
                .map(|param| &param.shape)
                .chain(function.result.as_ref())
                .collect();
            resolve(roots, None, &universe.types, &lookup)
        })
        .collect();
    for (function, definitions) in universe.functions.iter_mut().zip(function_closures) {
        function.definitions = definitions;
    }

    aggregate_modules(universe);
}

/// Per-module aggregation.
///
/// Types: keep only definitions owned by *other* modules, bucketed by the
/// owning module, names in first-insert order: "which type names must I
/// import from whom". Functions: union of all definitions, name -> owning
/// module, with no top-level bucketing; routing happens at emission using
/// each definition's module tag.
fn aggregate_modules(universe: &mut Universe) {
    let Universe {
        modules,
        types,
        functions,
    } = universe;

    for module in modules.iter_mut() {
        let mut type_dependencies: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for ty in types.iter().filter(|ty| ty.module == module.name) {
            for (name, owner) in &ty.definitions {
                if *owner != module.name {
                    type_dependencies
                        .entry(owner.clone())
                        .or_default()
                        .insert(name.clone());
                }
            }
        }

        let mut function_dependencies = Definitions::new();
        for function in functions.iter().filter(|f| f.module == module.name) {
            for (name, owner) in &function.definitions {
                function_dependencies.insert(name.clone(), owner.clone());
            }
        }

        module.type_dependencies = type_dependencies;
        module.function_dependencies = function_dependencies;
    }
}
