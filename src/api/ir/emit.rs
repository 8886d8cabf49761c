//! Per-module file assembly and emission.
//!
//! For every module two files are written: `types.ts` (the module's type
//! declarations, prefixed with one import line per other module it depends
//! on) and `index.ts` (the module class body produced by the module
//! template, prefixed with the package-root client import and the
//! function-dependency imports). Emission is a full replace of the output
//! root; the generated tree is a pure function of the description.

use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::error::GenerateError;

use super::model::{CUSTOM_MODULE, ModuleUnit, Universe};
use super::sink::OutputSink;
use super::utils::{doc_block, join_names};

/// File name of a module's type declarations.
pub const TYPES_FILE: &str = "types.ts";
/// File name of a module's client class.
pub const INDEX_FILE: &str = "index.ts";

/// Generation-wide configuration.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Name of the package-root client type imported by every module's
    /// `index.ts`, present even when no method references it.
    pub client_symbol: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            client_symbol: "ApiClient".to_string(),
        }
    }
}

/// Write the full output tree for a resolved, rendered universe.
pub fn emit(
    universe: &Universe,
    config: &GenerateConfig,
    sink: &mut dyn OutputSink,
) -> Result<(), GenerateError> {
    sink.replace_root()?;

    for module in &universe.modules {
        sink.create_module_dir(&module.name)?;

        let types_body = types_file(module, universe);
        let index_body = index_file(module, universe, config)?;

        let dir = PathBuf::from(&module.name);
        sink.write_file(&dir.join(TYPES_FILE), &types_body)?;
        sink.write_file(&dir.join(INDEX_FILE), &index_body)?;

        debug!(
            module = %module.name,
            types_len = types_body.len(),
            index_len = index_body.len(),
            "Module files emitted."
        );
    }

    Ok(())
}

/// The `types.ts` body: cross-module imports, then every owned type's doc
/// block and source in ingestion order.
fn types_file(module: &ModuleUnit, universe: &Universe) -> String {
    let mut out = String::new();

    for (other, names) in &module.type_dependencies {
        out.push_str(&format!(
            "import {{ {} }} from '../{other}/types';\n",
            join_names(names)
        ));
    }

    let rendered: Vec<String> = universe
        .types
        .iter()
        .filter(|ty| ty.module == module.name)
        .map(|ty| format!("{} {}", doc_block(&ty.formatted_description), ty.source))
        .collect();
    out.push_str(&rendered.join("\n"));

    out
}

/// The `index.ts` body: the package-root client import (carrying any
/// `"custom"`-tagged dependency names), one `./types` import block per
/// remaining dependency bucket, then the module template applied to the
/// concatenated function sources.
///
/// Function dependencies resolve against the *current* module's own types
/// file path, unlike type-to-type imports, which reference the other
/// module's directory.
fn index_file(
    module: &ModuleUnit,
    universe: &Universe,
    config: &GenerateConfig,
) -> Result<String, GenerateError> {
    let mut buckets: IndexMap<&str, IndexSet<&str>> = IndexMap::new();
    for (name, owner) in &module.function_dependencies {
        buckets
            .entry(owner.as_str())
            .or_default()
            .insert(name.as_str());
    }

    let mut root_names: Vec<&str> = Vec::new();
    let mut type_imports = String::new();
    for (owner, names) in &buckets {
        if *owner == CUSTOM_MODULE {
            root_names.extend(names.iter().copied());
        } else {
            let listed: Vec<&str> = names.iter().copied().collect();
            type_imports.push_str(&format!(
                "import {{ \n{}\n }} from './types';\n",
                listed.join(",\n")
            ));
        }
    }

    let mut out = if root_names.is_empty() {
        format!("import {{ {} }} from \"../..\";\n", config.client_symbol)
    } else {
        format!(
            "import {{ {}, {} }} from \"../..\";\n",
            config.client_symbol,
            root_names.join(", ")
        )
    };
    out.push_str(&type_imports);

    let functions_source: Vec<String> = universe
        .functions
        .iter()
        .filter(|function| function.module == module.name)
        .map(|function| format!("{} {}", function.formatted_description, function.source))
        .collect();

    let template = module
        .template
        .as_ref()
        .ok_or_else(|| GenerateError::Render {
            entity: module.name.clone(),
            message: "module template missing; render pass must run before emission".to_string(),
        })?;
    out.push_str(&template(&functions_source.join("\n")));

    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::api::ir::model::{Definitions, ModuleUnit};
    use crate::api::ir::sink::MemorySink;
    use std::path::Path;

    fn module_with_template(name: &str) -> ModuleUnit {
        let mut module = ModuleUnit::new(name.to_string(), None, None);
        module.template = Some(Box::new(|functions: &str| format!("<body>{functions}</body>")));
        module
    }

    fn empty_universe(modules: Vec<ModuleUnit>) -> Universe {
        Universe {
            modules,
            types: vec![],
            functions: vec![],
        }
    }

    #[test]
    fn test_types_file_import_lines_in_insertion_order() {
        let mut module = module_with_template("boc");
        module
            .type_dependencies
            .entry("crypto".to_string())
            .or_default()
            .extend(["KeyPair".to_string(), "SigningBoxHandle".to_string()]);
        module
            .type_dependencies
            .entry("abi".to_string())
            .or_default()
            .insert("Signer".to_string());

        let universe = empty_universe(vec![]);
        let body = types_file(&module, &universe);

        assert_eq!(
            body,
            "import { KeyPair, SigningBoxHandle } from '../crypto/types';\nimport { Signer } from '../abi/types';\n"
        );
    }

    #[test]
    fn test_index_file_always_imports_client_symbol() {
        let module = module_with_template("crypto");
        let universe = empty_universe(vec![]);

        let body = index_file(&module, &universe, &GenerateConfig::default()).unwrap();
        assert!(body.starts_with("import { ApiClient } from \"../..\";\n"));
        assert!(body.ends_with("<body></body>"));
    }

    #[test]
    fn test_index_file_merges_custom_bucket_into_root_import() {
        let mut module = module_with_template("crypto");
        let mut deps = Definitions::new();
        deps.insert("ParamsOfSign".to_string(), "crypto".to_string());
        deps.insert("ResponseHandler".to_string(), "custom".to_string());
        module.function_dependencies = deps;

        let universe = empty_universe(vec![]);
        let body = index_file(&module, &universe, &GenerateConfig::default()).unwrap();

        assert!(body.starts_with("import { ApiClient, ResponseHandler } from \"../..\";\n"));
        assert!(body.contains("import { \nParamsOfSign\n } from './types';\n"));
        // The custom name never appears in a ./types block.
        assert!(!body.contains("ResponseHandler\n } from './types'"));
    }

    #[test]
    fn test_index_file_function_imports_resolve_against_own_types_file() {
        let mut module = module_with_template("processing");
        let mut deps = Definitions::new();
        deps.insert("Abi".to_string(), "abi".to_string());
        module.function_dependencies = deps;

        let universe = empty_universe(vec![]);
        let body = index_file(&module, &universe, &GenerateConfig::default()).unwrap();

        // Even though Abi is owned by the abi module, the import path is
        // the current module's own types file.
        assert!(body.contains("import { \nAbi\n } from './types';\n"));
        assert!(!body.contains("../abi/types"));
    }

    #[test]
    fn test_emit_writes_two_files_per_module() {
        let universe = empty_universe(vec![
            module_with_template("crypto"),
            module_with_template("boc"),
        ]);
        let mut sink = MemorySink::new();

        emit(&universe, &GenerateConfig::default(), &mut sink).unwrap();

        assert_eq!(sink.replacements, 1);
        let dirs: Vec<&str> = sink.dirs.iter().map(String::as_str).collect();
        assert_eq!(dirs, ["crypto", "boc"]);
        assert!(sink.file(Path::new("crypto").join(TYPES_FILE)).is_some());
        assert!(sink.file(Path::new("crypto").join(INDEX_FILE)).is_some());
        assert!(sink.file(Path::new("boc").join(TYPES_FILE)).is_some());
        assert!(sink.file(Path::new("boc").join(INDEX_FILE)).is_some());
    }

    #[test]
    fn test_emit_fails_without_template() {
        let universe = empty_universe(vec![ModuleUnit::new("bare".to_string(), None, None)]);
        let mut sink = MemorySink::new();

        let err = emit(&universe, &GenerateConfig::default(), &mut sink).unwrap_err();
        assert!(matches!(err, GenerateError::Render { .. }));
    }
}
