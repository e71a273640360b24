//! Structural extraction of annotated fields from parsed Rust source.
//!
//! The extractor walks every struct in a file, including structs inside
//! inline `mod` blocks, and keeps the fields that:
//!
//! - carry the annotation (`#[es = "source=name"]` or `#[es("source=name")]`)
//! - name a known source (`query`, `header`, `formData`)
//! - are visible outside their module (any `pub` form other than `pub(self)`)
//! - can be named from the file's root module, along with their struct and
//!   every enclosing module
//! - have a type the [classifier](super::classify) supports
//!
//! Anything else is dropped without an error. Structs left without fields
//! are dropped as well. `cfg` attributes on a struct and its enclosing
//! modules are kept so the generated impl is compiled under the same
//! conditions.

use super::classify::classify;
use super::ir::{FieldModel, FileModel, Generics, Source, StructModel, TypeShape};
use super::naming;
use quote::ToTokens;
use syn::{
    Attribute, Expr, Fields, GenericArgument, Item, Lit, LitStr, Meta, PathArguments, Type,
    Visibility,
};
use tracing::debug;

/// Builds a [`FileModel`] from a parsed source file.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    tag: &'a str,
}

impl<'a> Extractor<'a> {
    /// Create an extractor reading annotations with the given key
    pub fn new(tag: &'a str) -> Self {
        Self { tag }
    }

    /// Extract every qualifying struct of `file`.
    pub fn extract(&self, module: &str, file: &syn::File) -> FileModel {
        let mut structs = Vec::new();
        self.visit_items(&file.items, &mut Scope::default(), &mut structs);

        FileModel {
            module: module.to_string(),
            structs,
        }
    }

    fn visit_items(&self, items: &[Item], scope: &mut Scope, out: &mut Vec<StructModel>) {
        for item in items {
            match item {
                Item::Struct(s) => {
                    if let Some(model) = self.struct_model(s, scope) {
                        out.push(model);
                    }
                }
                Item::Mod(m) => {
                    // `mod foo;` lives in another file
                    let Some((_, content)) = &m.content else {
                        continue;
                    };
                    if !visible_from_root(&m.vis, scope.depth()) {
                        debug!(module = %m.ident, "module not reachable from the file root, skipping");
                        continue;
                    }

                    let outer_cfgs = scope.cfgs.len();
                    scope.modules.push(m.ident.to_string());
                    scope.cfgs.extend(cfg_predicates(&m.attrs));
                    self.visit_items(content, scope, out);
                    scope.cfgs.truncate(outer_cfgs);
                    scope.modules.pop();
                }
                _ => {}
            }
        }
    }

    fn struct_model(&self, s: &syn::ItemStruct, scope: &Scope) -> Option<StructModel> {
        let name = s.ident.to_string();

        if !visible_from_root(&s.vis, scope.depth()) {
            debug!(struct_name = %name, "struct not reachable from the file root, skipping");
            return None;
        }

        let fields: Vec<FieldModel> = match &s.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .filter_map(|field| self.field_model(&name, field, scope.depth()))
                .collect(),
            Fields::Unnamed(_) | Fields::Unit => Vec::new(),
        };

        if fields.is_empty() {
            debug!(struct_name = %name, "no extractable fields, skipping struct");
            return None;
        }

        let path = scope
            .modules
            .iter()
            .map(String::as_str)
            .chain([name.as_str()])
            .collect::<Vec<_>>()
            .join("::");

        let mut cfgs = scope.cfgs.clone();
        cfgs.extend(cfg_predicates(&s.attrs));

        Some(StructModel {
            receiver: naming::receiver(&name),
            path,
            generics: render_generics(&s.generics),
            cfgs,
            name,
            fields,
        })
    }

    fn field_model(&self, owner: &str, field: &syn::Field, depth: usize) -> Option<FieldModel> {
        // Tuple fields have no name to assign to.
        let name = field.ident.as_ref()?.to_string();
        let annotation = self.annotation(&field.attrs)?;

        let Some((token, key)) = annotation.split_once('=') else {
            debug!(owner, field = %name, %annotation, "annotation lacks `=`, skipping field");
            return None;
        };

        let Some(source) = Source::from_token(token) else {
            debug!(owner, field = %name, token, "unknown source, skipping field");
            return None;
        };

        if matches!(reach(&field.vis), Reach::Ancestors(0)) {
            debug!(owner, field = %name, "private field, skipping");
            return None;
        }
        if !visible_from_root(&field.vis, depth) {
            debug!(owner, field = %name, "field not reachable from the file root, skipping");
            return None;
        }

        let shape = type_shape(&field.ty);
        let Some(classification) = classify(&shape) else {
            debug!(owner, field = %name, ty = %shape, "unsupported type, skipping field");
            return None;
        };

        Some(FieldModel {
            name,
            declared_type: shape.to_string(),
            element: shape.element().to_string(),
            source,
            kind: classification.kind,
            key: key.to_string(),
            imports: classification.imports,
        })
    }

    /// The string value of the first annotation attribute, if it has one.
    fn annotation(&self, attrs: &[Attribute]) -> Option<String> {
        let attr = attrs.iter().find(|attr| attr.path().is_ident(self.tag))?;

        match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                Expr::Lit(expr_lit) => match &expr_lit.lit {
                    Lit::Str(lit_str) => Some(lit_str.value()),
                    _ => None,
                },
                _ => None,
            },
            Meta::List(_) => attr.parse_args::<LitStr>().ok().map(|lit| lit.value()),
            Meta::Path(_) => None,
        }
    }
}

/// Where the walk is, relative to the file's root module.
#[derive(Debug, Default)]
struct Scope {
    /// Enclosing inline modules, outermost first
    modules: Vec<String>,
    /// `cfg` predicates of the enclosing modules
    cfgs: Vec<String>,
}

impl Scope {
    fn depth(&self) -> usize {
        self.modules.len()
    }
}

/// How far up the module tree an item is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reach {
    /// `pub`, `pub(crate)`
    Crate,
    /// Private, `pub(self)`, `pub(super)`, `pub(in super::super)`, ...
    Ancestors(usize),
    /// `pub(in some::path)`: at least the declaring module
    Unknown,
}

fn reach(vis: &Visibility) -> Reach {
    match vis {
        Visibility::Public(_) => Reach::Crate,
        Visibility::Inherited => Reach::Ancestors(0),
        Visibility::Restricted(restricted) => {
            let segments: Vec<String> = restricted
                .path
                .segments
                .iter()
                .map(|segment| segment.ident.to_string())
                .collect();

            if segments == ["crate"] {
                Reach::Crate
            } else if segments == ["self"] {
                Reach::Ancestors(0)
            } else if segments.iter().all(|segment| segment == "super") {
                Reach::Ancestors(segments.len())
            } else {
                Reach::Unknown
            }
        }
    }
}

/// Whether an item declared `depth` modules below the file root can be
/// named from the root, where the generated code is included.
fn visible_from_root(vis: &Visibility, depth: usize) -> bool {
    match reach(vis) {
        Reach::Crate => true,
        Reach::Ancestors(levels) => depth <= levels,
        Reach::Unknown => depth == 0,
    }
}

/// `cfg(...)` attributes as token text, e.g. `cfg (test)`.
fn cfg_predicates(attrs: &[Attribute]) -> impl Iterator<Item = String> + '_ {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("cfg"))
        .map(|attr| attr.meta.to_token_stream().to_string())
}

/// Reduce a field type to the shape the classifier understands.
pub fn type_shape(ty: &Type) -> TypeShape {
    match ty {
        Type::Group(group) => type_shape(&group.elem),
        Type::Path(type_path) if type_path.qself.is_none() => {
            let path = &type_path.path;

            if let Some(ident) = path.get_ident() {
                return TypeShape::Ident(ident.to_string());
            }

            if let Some(element) = vec_element(path) {
                return TypeShape::Vec(element);
            }

            TypeShape::Other(ty.to_token_stream().to_string())
        }
        _ => TypeShape::Other(ty.to_token_stream().to_string()),
    }
}

/// The element identifier of a bare `Vec<T>` path.
fn vec_element(path: &syn::Path) -> Option<String> {
    if path.leading_colon.is_some() || path.segments.len() != 1 {
        return None;
    }

    let segment = path.segments.first()?;
    if segment.ident != "Vec" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }

    match args.args.first()? {
        GenericArgument::Type(Type::Path(inner)) if inner.qself.is_none() => {
            inner.path.get_ident().map(ToString::to_string)
        }
        _ => None,
    }
}

fn render_generics(generics: &syn::Generics) -> Generics {
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Generics {
        impl_generics: impl_generics.to_token_stream().to_string(),
        type_generics: type_generics.to_token_stream().to_string(),
        where_clause: where_clause
            .map(|w| w.to_token_stream().to_string())
            .unwrap_or_default(),
        type_params: generics
            .type_params()
            .map(|param| param.ident.to_string())
            .collect(),
    }
}
