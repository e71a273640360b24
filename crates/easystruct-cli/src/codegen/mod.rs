//! Request extractor generation from annotated Rust structs.
//!
//! # Architecture
//!
//! The pipeline runs once per source file:
//!
//! ```text
//! Rust Source
//!     ↓
//!  [syn::parse_file]
//!     ↓
//!  [Extractor] ── classify / naming
//!     ↓
//!    IR (FileModel)
//!     ↓
//!  [RenderModel::new]
//!     ↓
//!  [render] → <name>_easystruct.rs
//! ```
//!
//! Every stage is a pure function of its input except [`emit::write_output`].
//!
//! # Usage
//!
//! ```rust
//! use easystruct_cli::codegen::{Extractor, RenderModel, render};
//!
//! let source = r#"
//!     pub struct Filter {
//!         #[es = "query=limit"]
//!         pub limit: i64,
//!     }
//! "#;
//!
//! let file = syn::parse_file(source).unwrap();
//! let model = Extractor::new("es").extract("filters", &file);
//! let model = RenderModel::new(&model, "filters.rs", "filters_easystruct.rs", "easystruct");
//! let code = render(&model).unwrap();
//!
//! assert!(code.contains("impl FromRequest for Filter"));
//! ```

pub mod classify;
pub mod emit;
pub mod extract;
pub mod ir;
pub mod model;
pub mod naming;

pub use classify::{Classification, Import, ImportSet, classify};
pub use emit::{output_path, render, write_output};
pub use extract::Extractor;
pub use ir::{FieldModel, FileModel, Generics, Kind, Source, StructModel, TypeShape};
pub use model::{ErrorTemplate, RenderModel};
