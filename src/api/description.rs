//! Api description structs for serde deserialization.
//!
//! This is the input side of the generator: a declarative tree of modules,
//! each carrying type definitions and function signatures. Extracting this
//! structure from whatever IDL produced it is the job of an upstream
//! collaborator; by the time a description reaches this crate it is assumed
//! to be well formed.

use serde::Deserialize;

use crate::error::GenerateError;

/// Root api description: an ordered sequence of modules.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDescription {
    /// Modules in declaration order. Order is preserved all the way into
    /// the emitted output.
    pub modules: Vec<ModuleDescription>,
}

/// One module of the api: a named grouping of types and functions, emitted
/// as one output subdirectory.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleDescription {
    /// Module name; unique key and output subdirectory name.
    pub name: String,
    /// One-line summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Type definitions owned by this module, in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDescription>,
    /// Function signatures owned by this module, in declaration order.
    #[serde(default)]
    pub functions: Vec<FunctionDescription>,
}

/// A named type definition.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDescription {
    /// Type name; unique across the whole type universe.
    pub name: String,
    /// One-line summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Structural shape of the type.
    pub shape: TypeShape,
}

/// A function signature.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionDescription {
    /// Function name.
    pub name: String,
    /// One-line summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Parameters, in declaration order.
    #[serde(default)]
    pub params: Vec<ParamDescription>,
    /// Result shape, if the function returns anything.
    #[serde(default)]
    pub result: Option<TypeShape>,
}

/// One function parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ParamDescription {
    /// Parameter name.
    pub name: String,
    /// One-line summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Structural shape of the parameter.
    pub shape: TypeShape,
}

/// Structural shape of a type: a record of fields, each field typed either
/// primitive or by-name reference to another type definition, or a
/// union/array thereof. Shapes may reference each other cyclically.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeShape {
    /// A primitive value.
    Primitive {
        /// Which primitive.
        of: Primitive,
    },
    /// By-name reference to another named type definition, possibly in
    /// another module.
    Ref {
        /// Referenced type name.
        name: String,
    },
    /// Array of an element shape.
    Array {
        /// Element shape.
        item: Box<TypeShape>,
    },
    /// Union of alternative shapes.
    Union {
        /// Alternatives, in declaration order.
        variants: Vec<TypeShape>,
    },
    /// Record with named fields.
    Struct {
        /// Fields, in declaration order.
        fields: Vec<FieldDescription>,
    },
}

/// One field of a record shape.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescription {
    /// Field name.
    pub name: String,
    /// One-line summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Whether the field may be omitted.
    #[serde(default)]
    pub optional: bool,
    /// Field shape.
    pub shape: TypeShape,
}

/// Primitive value kinds a shape can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    /// TypeScript `string`.
    String,
    /// TypeScript `number`.
    Number,
    /// TypeScript `boolean`.
    Boolean,
    /// TypeScript `unknown`.
    Unknown,
}

impl ApiDescription {
    /// Parse an api description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        Ok(serde_json::from_str(json)?)
    }
}
