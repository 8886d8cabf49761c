//! Api description to TypeScript client module generator.
//!
//! This module turns a declarative api description (a tree of modules,
//! each containing type definitions and function signatures) into a set
//! of per-module TypeScript source files with deduplicated, correctly
//! scoped import statements:
//! - `<module>/types.ts`: the module's type declarations, prefixed with
//!   one import line per other module it depends on
//! - `<module>/index.ts`: the module's client class, prefixed with the
//!   package-root client import and its function-dependency imports
//!
//! Dependencies are the transitive closure of named type references,
//! resolved across module boundaries and aggregated per module. An entity
//! tagged with the `"custom"` module sentinel is imported from the package
//! root rather than from a sibling module.

pub mod description;
pub(crate) mod ir;
mod pipeline;

pub use ir::emit::{GenerateConfig, INDEX_FILE, TYPES_FILE};
pub use ir::model::{
    CUSTOM_MODULE, Definitions, FunctionDef, ModuleTemplate, ModuleUnit, TypeDef, Universe,
};
pub use ir::render::{Render, Rendered, TsRenderer};
pub use ir::sink::{DirectorySink, MemorySink, OutputSink};
pub use pipeline::generate;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::description::ApiDescription;
    use super::*;
    use std::path::Path;

    const SIGNING_API_JSON: &str = r##"{
  "modules": [
    {
      "name": "custom",
      "types": [
        { "name": "ResponseHandler", "shape": { "kind": "primitive", "of": "unknown" } }
      ],
      "functions": []
    },
    {
      "name": "crypto",
      "summary": "Crypto functions.",
      "types": [
        {
          "name": "KeyPair",
          "summary": "A key pair.",
          "shape": {
            "kind": "struct",
            "fields": [
              { "name": "public", "summary": "Public key.", "shape": { "kind": "primitive", "of": "string" } },
              { "name": "secret", "summary": "Secret key.", "shape": { "kind": "primitive", "of": "string" } }
            ]
          }
        },
        {
          "name": "ParamsOfSign",
          "shape": {
            "kind": "struct",
            "fields": [
              { "name": "keys", "shape": { "kind": "ref", "name": "KeyPair" } },
              { "name": "data", "shape": { "kind": "primitive", "of": "string" } }
            ]
          }
        },
        {
          "name": "ResultOfSign",
          "shape": {
            "kind": "struct",
            "fields": [
              { "name": "signed", "shape": { "kind": "primitive", "of": "string" } }
            ]
          }
        }
      ],
      "functions": [
        {
          "name": "sign",
          "summary": "Signs data.",
          "params": [
            { "name": "params", "shape": { "kind": "ref", "name": "ParamsOfSign" } },
            { "name": "responseHandler", "shape": { "kind": "ref", "name": "ResponseHandler" } }
          ],
          "result": { "kind": "ref", "name": "ResultOfSign" }
        }
      ]
    },
    {
      "name": "boc",
      "types": [
        {
          "name": "Cell",
          "summary": "A tree-of-cells node.",
          "shape": {
            "kind": "struct",
            "fields": [
              { "name": "keys", "shape": { "kind": "ref", "name": "KeyPair" } }
            ]
          }
        }
      ],
      "functions": []
    }
  ]
}"##;

    fn generate_in_memory(json: &str) -> MemorySink {
        let description = ApiDescription::from_json(json).unwrap();
        let config = GenerateConfig::default();
        let renderer = TsRenderer::new(&config);
        let mut sink = MemorySink::new();
        generate(&description, &config, &renderer, &mut sink).unwrap();
        sink
    }

    #[test]
    fn test_generate_emits_one_directory_per_module() {
        let sink = generate_in_memory(SIGNING_API_JSON);

        let dirs: Vec<&str> = sink.dirs.iter().map(String::as_str).collect();
        assert_eq!(dirs, ["custom", "crypto", "boc"]);
        assert_eq!(sink.files.len(), 6, "two files per module");
    }

    #[test]
    fn test_cross_module_type_import() {
        let sink = generate_in_memory(SIGNING_API_JSON);

        let boc_types = sink.file(Path::new("boc").join(TYPES_FILE)).unwrap();
        assert!(
            boc_types.starts_with("import { KeyPair } from '../crypto/types';\n"),
            "boc/types.ts must start with the crypto import: {boc_types}"
        );
        assert!(boc_types.contains("export type Cell = {"));
    }

    #[test]
    fn test_self_module_references_produce_no_import() {
        let sink = generate_in_memory(SIGNING_API_JSON);

        // ParamsOfSign references KeyPair, but both live in crypto.
        let crypto_types = sink.file(Path::new("crypto").join(TYPES_FILE)).unwrap();
        assert!(
            !crypto_types.contains("import"),
            "same-module references must not emit imports: {crypto_types}"
        );
        assert!(crypto_types.contains("export type KeyPair = {"));
        assert!(crypto_types.contains("export type ParamsOfSign = {"));
        assert!(crypto_types.contains("export type ResultOfSign = {"));
    }

    #[test]
    fn test_type_doc_blocks_wrap_nonempty_descriptions() {
        let sink = generate_in_memory(SIGNING_API_JSON);

        let crypto_types = sink.file(Path::new("crypto").join(TYPES_FILE)).unwrap();
        assert!(crypto_types.contains("/**\n * A key pair.\n*/ export type KeyPair = {"));
        // ParamsOfSign has no description: no doc block, just the source.
        assert!(crypto_types.contains("\n export type ParamsOfSign = {"));
    }

    #[test]
    fn test_index_imports_client_symbol_and_custom_bucket() {
        let sink = generate_in_memory(SIGNING_API_JSON);

        let crypto_index = sink.file(Path::new("crypto").join(INDEX_FILE)).unwrap();
        assert!(
            crypto_index.starts_with("import { ApiClient, ResponseHandler } from \"../..\";\n"),
            "custom-tagged dependencies merge into the root import: {crypto_index}"
        );
        assert!(
            crypto_index
                .contains("import { \nParamsOfSign,\nKeyPair,\nResultOfSign\n } from './types';\n"),
            "crypto-owned dependencies import from the module's own types file: {crypto_index}"
        );
        assert!(
            !crypto_index.contains("ResponseHandler\n } from './types'"),
            "custom names must never appear in a ./types import"
        );
    }

    #[test]
    fn test_index_contains_module_class_and_methods() {
        let sink = generate_in_memory(SIGNING_API_JSON);

        let crypto_index = sink.file(Path::new("crypto").join(INDEX_FILE)).unwrap();
        assert!(crypto_index.contains("export class CryptoModule {"));
        assert!(crypto_index.contains("  client: ApiClient;"));
        assert!(crypto_index.contains(
            "  sign(params: ParamsOfSign, responseHandler: ResponseHandler): Promise<ResultOfSign> {"
        ));
        assert!(
            crypto_index.contains("this.client.request(\"crypto.sign\", params, responseHandler)")
        );
    }

    #[test]
    fn test_root_import_present_even_when_unused() {
        let sink = generate_in_memory(SIGNING_API_JSON);

        let custom_index = sink.file(Path::new("custom").join(INDEX_FILE)).unwrap();
        assert!(custom_index.starts_with("import { ApiClient } from \"../..\";\n"));
        assert!(custom_index.contains("export class CustomModule {"));
    }

    #[test]
    fn test_generate_is_deterministic_in_memory() {
        let first = generate_in_memory(SIGNING_API_JSON);
        let second = generate_in_memory(SIGNING_API_JSON);
        assert_eq!(first.files, second.files);
    }

    #[test]
    fn test_dangling_reference_is_permissive() {
        let sink = generate_in_memory(
            r##"{
  "modules": [
    {
      "name": "net",
      "types": [
        {
          "name": "Query",
          "shape": {
            "kind": "struct",
            "fields": [
              { "name": "filter", "shape": { "kind": "ref", "name": "MissingFilter" } }
            ]
          }
        }
      ],
      "functions": []
    }
  ]
}"##,
        );

        let net_types = sink.file(Path::new("net").join(TYPES_FILE)).unwrap();
        // The closure is silently incomplete: no import, the reference is
        // emitted as-is.
        assert!(!net_types.contains("import"));
        assert!(net_types.contains("filter: MissingFilter;"));
    }
}
