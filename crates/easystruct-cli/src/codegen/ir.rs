//! Intermediate representation of annotated structs.
//!
//! The extractor fills these types from a parsed source file; the model
//! builder turns them into a [`RenderModel`](super::model::RenderModel).
//!
//! # Structure
//!
//! - [`FileModel`]: every qualifying struct of one source file
//! - [`StructModel`]: a struct with at least one extractable field
//! - [`FieldModel`]: a field with its request source, key and [`Kind`]
//! - [`TypeShape`]: the part of a field type the classifier looks at

use super::classify::{BASE_IMPORTS, ImportSet};
use std::fmt;

/// The request channel a field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// URL query parameter (`query=...`)
    Query,
    /// Request header (`header=...`)
    Header,
    /// Form field (`formData=...`)
    FormData,
}

impl Source {
    /// Parse the source token of an annotation value.
    ///
    /// Unknown tokens return `None` so that annotations meant for other
    /// tools sharing the key are ignored.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "query" => Some(Source::Query),
            "header" => Some(Source::Header),
            "formData" => Some(Source::FormData),
            _ => None,
        }
    }

    /// The token as written in the annotation
    pub fn token(self) -> &'static str {
        match self {
            Source::Query => "query",
            Source::Header => "header",
            Source::FormData => "formData",
        }
    }

    /// The `RequestSource` method reading this channel
    pub fn accessor(self) -> &'static str {
        match self {
            Source::Query => "query",
            Source::Header => "header",
            Source::FormData => "form_value",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Conversion category of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `String`, `Vec<u8>`, `Vec<char>`
    Varchar,
    /// Any integer width
    Integer,
    /// `Vec` of an integer width
    Integers,
    /// `f32`, `f64`
    Double,
    /// `Vec<f32>`, `Vec<f64>`
    Doubles,
    /// `bool`
    Boolean,
    /// `Vec<bool>`
    Booleans,
    /// `Vec<String>`
    Strings,
}

impl Kind {
    /// Whether the raw value is split into list items
    pub fn is_list(self) -> bool {
        matches!(
            self,
            Kind::Integers | Kind::Doubles | Kind::Booleans | Kind::Strings
        )
    }

    /// Whether conversion can fail
    pub fn is_fallible(self) -> bool {
        !matches!(self, Kind::Varchar | Kind::Strings)
    }
}

/// The shape of a declared field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// A single identifier such as `i64` or `String`
    Ident(String),

    /// `Vec<T>` where `T` is a single identifier
    Vec(String),

    /// Anything else, kept as its token text
    Other(String),
}

impl TypeShape {
    /// The element type after stripping one `Vec` level.
    pub fn element(&self) -> &str {
        match self {
            TypeShape::Ident(name) | TypeShape::Vec(name) | TypeShape::Other(name) => name,
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeShape::Ident(name) | TypeShape::Other(name) => f.write_str(name),
            TypeShape::Vec(element) => write!(f, "Vec<{element}>"),
        }
    }
}

/// A field that will be populated from the request.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldModel {
    /// Field identifier.
    pub name: String,

    /// Declared type as written, e.g. `Vec<i64>`.
    pub declared_type: String,

    /// Element type: the declared type with one `Vec` level removed.
    pub element: String,

    /// Request channel.
    pub source: Source,

    /// Conversion category.
    pub kind: Kind,

    /// Lookup key from the annotation.
    pub key: String,

    /// Imports the conversion needs.
    pub imports: ImportSet,
}

/// Rendered generics of a struct, ready to splice into an `impl` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generics {
    /// e.g. `<T: Clone>`, empty when the struct is not generic
    pub impl_generics: String,

    /// e.g. `<T>`
    pub type_generics: String,

    /// e.g. `where T: Default`
    pub where_clause: String,

    /// Names of the struct's type parameters
    pub type_params: Vec<String>,
}

/// A struct with at least one extractable field.
#[derive(Debug, Clone, PartialEq)]
pub struct StructModel {
    /// Struct identifier.
    pub name: String,

    /// Path relative to the file's root module, e.g. `api::Filter`.
    pub path: String,

    /// Abbreviation naming the `self` binding in generated code.
    pub receiver: String,

    /// Generic parameters.
    pub generics: Generics,

    /// `cfg` predicates of the struct and its enclosing modules, outermost
    /// first, e.g. `cfg (test)`.
    pub cfgs: Vec<String>,

    /// Extractable fields in declaration order.
    pub fields: Vec<FieldModel>,
}

/// All qualifying structs of one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileModel {
    /// Module name, taken from the file stem.
    pub module: String,

    /// Qualifying structs in source order.
    pub structs: Vec<StructModel>,
}

impl FileModel {
    /// The imports the generated file needs: the base set plus every
    /// field's conversion imports.
    pub fn imports(&self) -> ImportSet {
        self.structs
            .iter()
            .flat_map(|s| &s.fields)
            .fold(ImportSet::from_iter(BASE_IMPORTS), |acc, field| {
                acc.union(&field.imports)
            })
    }

    /// Whether the file produced anything to generate
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }
}
