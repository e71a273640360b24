//! easystruct-cli - Generator for request extractors
//!
//! Scans Rust source files for structs whose fields carry an `es` annotation
//! and writes a companion file implementing `easystruct::FromRequest` for each
//! of them:
//!
//! ```text
//! #[derive(Default, RequestFields)]
//! pub struct Filter {
//!     #[es = "query=limit"]
//!     pub limit: i64,
//! }
//!
//! include!("filters_easystruct.rs");
//! ```
//!
//! - [`codegen`] the extraction, classification and emission pipeline
//! - [`generate`] the per-file driver and batch policy
//! - [`config`] generator settings loaded from TOML
//! - [`logging`] tracing setup for the binary

pub mod codegen;
pub mod config;
pub mod error;
pub mod generate;
pub mod logging;

pub use config::{ConfigError, GeneratorConfig};
pub use error::{CodegenError, CodegenResult};
pub use generate::{BatchReport, FileReport, Generated, Generator, Outcome};
