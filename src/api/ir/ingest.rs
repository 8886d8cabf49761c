//! Flattening of the api description into the type/function universe.
//!
//! Pure transform: modules, types and functions come out in declaration
//! order, every type and function tagged with the name of its owning
//! module. Nothing is renamed or deduplicated here; a description carrying
//! two entities with the same name in different modules keeps both copies.

use crate::api::description::ApiDescription;

use super::model::{FunctionDef, ModuleUnit, TypeDef, Universe};

/// Flatten the module tree into three flat, order-preserving collections.
pub fn flatten(description: &ApiDescription) -> Universe {
    let mut modules = Vec::with_capacity(description.modules.len());
    let mut types = Vec::new();
    let mut functions = Vec::new();

    for module in &description.modules {
        modules.push(ModuleUnit::new(
            module.name.clone(),
            module.summary.clone(),
            module.description.clone(),
        ));

        for ty in &module.types {
            types.push(TypeDef::new(
                ty.name.clone(),
                module.name.clone(),
                ty.summary.clone(),
                ty.description.clone(),
                ty.shape.clone(),
            ));
        }

        for function in &module.functions {
            functions.push(FunctionDef::new(
                function.name.clone(),
                module.name.clone(),
                function.summary.clone(),
                function.description.clone(),
                function.params.clone(),
                function.result.clone(),
            ));
        }
    }

    Universe {
        modules,
        types,
        functions,
    }
}
