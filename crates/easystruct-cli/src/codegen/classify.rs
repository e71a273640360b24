//! Type classification.
//!
//! Every supported field type collapses into one of eight [`Kind`]s, so the
//! emitter only ever writes eight conversion shapes.
//!
//! | Declared type | Kind | Extra imports |
//! |---------------|------|---------------|
//! | `String`, `Vec<u8>`, `Vec<char>` | Varchar | none |
//! | `i8`..`i128`, `u8`..`u128`, `isize`, `usize` | Integer | `FromStr` |
//! | `Vec<integer>` (not `Vec<u8>`) | Integers | `FromStr`, `split_values` |
//! | `f32`, `f64` | Double | `FromStr` |
//! | `Vec<f32>`, `Vec<f64>` | Doubles | `FromStr`, `split_values` |
//! | `bool` | Boolean | `FromStr` |
//! | `Vec<bool>` | Booleans | `FromStr`, `split_values` |
//! | `Vec<String>` | Strings | `split_values` |
//!
//! Any other type is unsupported and the field is left out.

use super::ir::{Kind, TypeShape};
use std::collections::BTreeSet;

/// Integer widths accepted for `Integer` and `Integers`.
const INTEGER_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// Something the generated file has to `use`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Import {
    /// The runtime's `RequestSource` trait
    RequestSource,
    /// The runtime's `FromRequest` trait
    FromRequest,
    /// The runtime's `ExtractError`
    ExtractError,
    /// `std::str::FromStr`, for numeric and boolean parsing
    FromStr,
    /// The runtime's `split_values`, for list values
    SplitValues,
}

/// Imports every generated file carries.
pub const BASE_IMPORTS: [Import; 3] = [
    Import::RequestSource,
    Import::FromRequest,
    Import::ExtractError,
];

impl Import {
    /// The `use` path for this import, with runtime items under `runtime_crate`
    pub fn path(self, runtime_crate: &str) -> String {
        match self {
            Import::RequestSource => format!("{runtime_crate}::RequestSource"),
            Import::FromRequest => format!("{runtime_crate}::FromRequest"),
            Import::ExtractError => format!("{runtime_crate}::ExtractError"),
            Import::FromStr => "std::str::FromStr".to_string(),
            Import::SplitValues => format!("{runtime_crate}::split_values"),
        }
    }
}

/// A duplicate-free set of imports.
///
/// Inserting an import that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet(BTreeSet<Import>);

impl ImportSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import, returning whether it was new
    pub fn insert(&mut self, import: Import) -> bool {
        self.0.insert(import)
    }

    /// Add an import, builder style
    pub fn with(mut self, import: Import) -> Self {
        self.insert(import);
        self
    }

    /// All imports of `self` and `other`
    pub fn union(mut self, other: &ImportSet) -> Self {
        self.0.extend(other.iter());
        self
    }

    /// Whether `import` is in the set
    pub fn contains(&self, import: Import) -> bool {
        self.0.contains(&import)
    }

    /// Number of distinct imports
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no imports
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Imports in declaration order of [`Import`]
    pub fn iter(&self) -> impl Iterator<Item = Import> + '_ {
        self.0.iter().copied()
    }

    /// Render as `use` paths, sorted lexically so output is reproducible
    pub fn render(&self, runtime_crate: &str) -> Vec<String> {
        let paths: BTreeSet<String> = self.iter().map(|i| i.path(runtime_crate)).collect();
        paths.into_iter().collect()
    }
}

impl FromIterator<Import> for ImportSet {
    fn from_iter<I: IntoIterator<Item = Import>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Import> for ImportSet {
    fn extend<I: IntoIterator<Item = Import>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// The outcome of classifying a supported type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: Kind,
    pub imports: ImportSet,
}

/// Map a type shape to its [`Kind`] and the imports the conversion needs.
///
/// Returns `None` for unsupported types.
pub fn classify(shape: &TypeShape) -> Option<Classification> {
    let parse = || ImportSet::new().with(Import::FromStr);
    let parse_list = || parse().with(Import::SplitValues);

    let (kind, imports) = match shape {
        TypeShape::Ident(name) => match name.as_str() {
            "String" => (Kind::Varchar, ImportSet::new()),
            "f32" | "f64" => (Kind::Double, parse()),
            "bool" => (Kind::Boolean, parse()),
            n if is_integer(n) => (Kind::Integer, parse()),
            _ => return None,
        },
        TypeShape::Vec(element) => match element.as_str() {
            // Byte and char sequences hold the raw text.
            "u8" | "char" => (Kind::Varchar, ImportSet::new()),
            "String" => (Kind::Strings, ImportSet::new().with(Import::SplitValues)),
            "f32" | "f64" => (Kind::Doubles, parse_list()),
            "bool" => (Kind::Booleans, parse_list()),
            n if is_integer(n) => (Kind::Integers, parse_list()),
            _ => return None,
        },
        TypeShape::Other(_) => return None,
    };

    Some(Classification { kind, imports })
}

fn is_integer(name: &str) -> bool {
    INTEGER_TYPES.contains(&name)
}
