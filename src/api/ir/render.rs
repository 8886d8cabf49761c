//! Render seam and the default TypeScript renderer.
//!
//! The pipeline calls [`Render`] once per type and once per function,
//! stores the outputs on the entity, and asks for one file-template
//! callback per module. This pass performs no generation logic of its own:
//! it is a seam, and everything interesting about *what* gets rendered
//! lives in the implementation.
//!
//! [`TsRenderer`] renders the structural shapes into TypeScript type
//! declarations and client-class methods.

use crate::api::description::{Primitive, TypeShape};
use crate::error::GenerateError;

use super::emit::GenerateConfig;
use super::model::{FunctionDef, ModuleTemplate, ModuleUnit, TypeDef, Universe};
use super::utils::{capitalize_first, doc_lines};

/// Output of rendering one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Source text for the entity.
    pub source: String,
    /// Formatted human-readable description. For types this is the doc
    /// body (wrapped into a doc block at emission, only if non-empty);
    /// for functions it already carries its comment markers.
    pub description: String,
}

/// Collaborator turning entities into source text.
pub trait Render {
    /// Render one type definition.
    fn render_type(&self, ty: &TypeDef) -> Result<Rendered, GenerateError>;

    /// Render one function signature.
    fn render_function(&self, function: &FunctionDef) -> Result<Rendered, GenerateError>;

    /// Build the module's file-template callback: given the concatenated
    /// function source text, produce the full `index` file body.
    fn module_template(&self, module: &ModuleUnit) -> ModuleTemplate;
}

/// Invoke the renderer for every entity and build every module template.
pub fn prepare_sources(
    universe: &mut Universe,
    renderer: &dyn Render,
) -> Result<(), GenerateError> {
    for ty in &mut universe.types {
        let Rendered {
            source,
            description,
        } = renderer.render_type(ty)?;
        ty.source = source;
        ty.formatted_description = description;
    }

    for function in &mut universe.functions {
        let Rendered {
            source,
            description,
        } = renderer.render_function(function)?;
        function.source = source;
        function.formatted_description = description;
    }

    for module in &mut universe.modules {
        let template = renderer.module_template(module);
        module.template = Some(template);
    }

    Ok(())
}

/// Default renderer producing TypeScript declarations and a client class
/// per module.
#[derive(Debug, Clone)]
pub struct TsRenderer {
    client_symbol: String,
}

impl TsRenderer {
    /// A renderer wired to the configured package-root client symbol.
    pub fn new(config: &GenerateConfig) -> Self {
        Self {
            client_symbol: config.client_symbol.clone(),
        }
    }
}

impl Render for TsRenderer {
    fn render_type(&self, ty: &TypeDef) -> Result<Rendered, GenerateError> {
        let source = match &ty.shape {
            TypeShape::Struct { fields } => {
                let mut out = format!("export type {} = {{\n", ty.name);
                for field in fields {
                    if let Some(summary) = trimmed(field.summary.as_deref()) {
                        out.push_str("  /**\n");
                        out.push_str(&format!("   * {} - {summary}\n", field.name));
                        out.push_str("   */\n");
                    }
                    let optional = if field.optional { "?" } else { "" };
                    out.push_str(&format!(
                        "  {}{optional}: {};\n",
                        field.name,
                        ts_type(&field.shape)
                    ));
                }
                out.push_str("};");
                out
            }
            other => format!("export type {} = {};", ty.name, ts_type(other)),
        };

        Ok(Rendered {
            source,
            description: entity_description(ty.summary.as_deref(), ty.description.as_deref()),
        })
    }

    fn render_function(&self, function: &FunctionDef) -> Result<Rendered, GenerateError> {
        let params: Vec<String> = function
            .params
            .iter()
            .map(|param| format!("{}: {}", param.name, ts_type(&param.shape)))
            .collect();
        let result = function
            .result
            .as_ref()
            .map_or_else(|| "void".to_string(), ts_type);

        let mut call_args = format!("\"{}.{}\"", function.module, function.name);
        for param in &function.params {
            call_args.push_str(&format!(", {}", param.name));
        }

        let source = format!(
            "  {}({}): Promise<{result}> {{\n    return this.client.request({call_args});\n  }}",
            function.name,
            params.join(", "),
        );

        Ok(Rendered {
            source,
            description: function_doc(function),
        })
    }

    fn module_template(&self, module: &ModuleUnit) -> ModuleTemplate {
        let class_name = format!("{}Module", capitalize_first(&module.name));
        let client_symbol = self.client_symbol.clone();
        let doc = module_doc(module);

        Box::new(move |functions_source: &str| {
            let mut out = String::new();
            if !doc.is_empty() {
                out.push_str(&doc);
                out.push('\n');
            }
            out.push_str(&format!("export class {class_name} {{\n"));
            out.push_str(&format!("  client: {client_symbol};\n"));
            out.push_str(&format!(
                "  constructor(client: {client_symbol}) {{\n    this.client = client;\n  }}\n"
            ));
            if !functions_source.trim().is_empty() {
                out.push('\n');
                out.push_str(functions_source);
                out.push('\n');
            }
            out.push_str("}\n");
            out
        })
    }
}

/// TypeScript text for a structural shape, inline form.
fn ts_type(shape: &TypeShape) -> String {
    match shape {
        TypeShape::Primitive { of } => primitive_name(*of).to_string(),
        TypeShape::Ref { name } => name.clone(),
        TypeShape::Array { item } => {
            let inner = ts_type(item);
            if matches!(**item, TypeShape::Union { .. }) {
                format!("({inner})[]")
            } else {
                format!("{inner}[]")
            }
        }
        TypeShape::Union { variants } => variants
            .iter()
            .map(ts_type)
            .collect::<Vec<_>>()
            .join(" | "),
        TypeShape::Struct { fields } => {
            if fields.is_empty() {
                "{}".to_string()
            } else {
                let parts: Vec<String> = fields
                    .iter()
                    .map(|field| {
                        let optional = if field.optional { "?" } else { "" };
                        format!("{}{optional}: {}", field.name, ts_type(&field.shape))
                    })
                    .collect();
                format!("{{ {} }}", parts.join("; "))
            }
        }
    }
}

fn primitive_name(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String => "string",
        Primitive::Number => "number",
        Primitive::Boolean => "boolean",
        Primitive::Unknown => "unknown",
    }
}

fn trimmed(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|s| !s.is_empty())
}

/// Doc body for a type or module: summary, then the longer description
/// under an `@remarks` tag, as ` * `-decorated lines.
fn entity_description(summary: Option<&str>, description: Option<&str>) -> String {
    let text = match (trimmed(summary), trimmed(description)) {
        (Some(summary), Some(description)) => {
            format!("{summary}\n\n@remarks\n{description}")
        }
        (Some(summary), None) => summary.to_string(),
        (None, Some(description)) => description.to_string(),
        (None, None) => return String::new(),
    };
    doc_lines(&text)
}

/// Complete doc comment for a function, indented for a class body, with
/// `@param`/`@returns` tags. Empty when there is nothing to say.
fn function_doc(function: &FunctionDef) -> String {
    let mut raw: Vec<String> = Vec::new();

    match (
        trimmed(function.summary.as_deref()),
        trimmed(function.description.as_deref()),
    ) {
        (Some(summary), Some(description)) => {
            raw.push(summary.to_string());
            raw.push(String::new());
            raw.push("@remarks".to_string());
            raw.extend(description.lines().map(str::to_string));
        }
        (Some(summary), None) => raw.push(summary.to_string()),
        (None, Some(description)) => raw.extend(description.lines().map(str::to_string)),
        (None, None) => {}
    }

    let mut tags: Vec<String> = Vec::new();
    for param in &function.params {
        let label = trimmed(param.summary.as_deref()).unwrap_or("parameters");
        tags.push(format!(
            "@param {{{}}} {} - {label}",
            ts_type(&param.shape),
            param.name
        ));
    }
    if let Some(result) = &function.result {
        tags.push(format!("@returns {}", ts_type(result)));
    }

    if !tags.is_empty() {
        if !raw.is_empty() {
            raw.push(String::new());
        }
        raw.append(&mut tags);
    }

    if raw.is_empty() {
        return String::new();
    }

    let mut out = String::from("  /**\n");
    for line in &raw {
        if line.is_empty() {
            out.push_str("   *\n");
        } else {
            out.push_str(&format!("   * {line}\n"));
        }
    }
    out.push_str("   */");
    out
}

/// Doc comment for the module class, unindented.
fn module_doc(module: &ModuleUnit) -> String {
    let body = entity_description(module.summary.as_deref(), module.description.as_deref());
    if body.is_empty() {
        return String::new();
    }
    format!("/**\n{body}\n */")
}
