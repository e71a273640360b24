//! Render model handed to the emitter.
//!
//! [`RenderModel::new`] merges the structs of a [`FileModel`], the union of
//! their imports and the file names into one immutable value, and attaches
//! an [`ErrorTemplate`] to every field.

use super::ir::{FileModel, Generics, Kind, Source, StructModel};

/// Name of the request parameter in generated code.
pub const REQUEST_PARAM: &str = "request";

/// Context attached to a field's conversion errors.
///
/// A failure converting `query=limit` reads `query:limit: <cause>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTemplate {
    context: String,
}

impl ErrorTemplate {
    pub fn new(source: Source, key: &str) -> Self {
        Self {
            context: format!("{}:{key}", source.token()),
        }
    }

    /// The `source:key` pair
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The context as a Rust string literal
    pub fn literal(&self) -> String {
        format!("{:?}", self.context)
    }
}

/// One field as the emitter sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderField {
    pub name: String,
    pub kind: Kind,
    pub element: String,
    /// Lookup expression, e.g. `request.query("limit")`
    pub extraction: String,
    pub error: ErrorTemplate,
}

/// One struct as the emitter sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStruct {
    pub name: String,
    pub path: String,
    pub receiver: String,
    pub generics: Generics,
    /// Emitted as `#[..]` on the impl
    pub cfgs: Vec<String>,
    pub fields: Vec<RenderField>,
}

/// Everything the emitter needs to write one generated file.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub module: String,
    /// File name of the annotated source, e.g. `filters.rs`
    pub source_file: String,
    /// File name of the generated file, e.g. `filters_easystruct.rs`
    pub output_file: String,
    /// `use` paths in lexical order
    pub imports: Vec<String>,
    pub structs: Vec<RenderStruct>,
}

impl RenderModel {
    /// Build the render model for one file.
    pub fn new(file: &FileModel, source_file: &str, output_file: &str, runtime_crate: &str) -> Self {
        Self {
            module: file.module.clone(),
            source_file: source_file.to_string(),
            output_file: output_file.to_string(),
            imports: file.imports().render(runtime_crate),
            structs: file.structs.iter().map(render_struct).collect(),
        }
    }
}

fn render_struct(model: &StructModel) -> RenderStruct {
    RenderStruct {
        name: model.name.clone(),
        path: model.path.clone(),
        receiver: model.receiver.clone(),
        generics: model.generics.clone(),
        cfgs: model.cfgs.clone(),
        fields: model
            .fields
            .iter()
            .map(|field| RenderField {
                name: field.name.clone(),
                kind: field.kind,
                element: field.element.clone(),
                extraction: format!(
                    "{REQUEST_PARAM}.{}({:?})",
                    field.source.accessor(),
                    field.key
                ),
                error: ErrorTemplate::new(field.source, &field.key),
            })
            .collect(),
    }
}
