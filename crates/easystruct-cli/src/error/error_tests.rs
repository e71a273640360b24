#![allow(non_snake_case)]

use super::*;
use std::error::Error as _;

#[test]
fn CodegenError___parse___reports_line_and_column() {
    let source = "pub struct Filter {\n    pub name String,\n}\n";
    let syn_err = syn::parse_file(source).unwrap_err();

    let err = CodegenError::parse(Path::new("src/filter.rs"), syn_err);

    let CodegenError::Parse { line, column, .. } = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(*line, 2);
    assert!(*column > 1);
    assert!(err.to_string().starts_with("failed to parse src/filter.rs:2:"));
}

#[test]
fn CodegenError___parse___keeps_syn_error_as_source() {
    let syn_err = syn::parse_file("struct {").unwrap_err();
    let message = syn_err.to_string();

    let err = CodegenError::parse(Path::new("bad.rs"), syn_err);

    assert_eq!(err.source().unwrap().to_string(), message);
}

#[test]
fn CodegenError___invalid_input___names_the_path() {
    let err = CodegenError::InvalidInput {
        path: PathBuf::from("notes.txt"),
    };

    assert_eq!(
        err.to_string(),
        "notes.txt is not a Rust source file (expected a .rs extension)"
    );
}

#[test]
fn CodegenError___read___exposes_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");

    let err = CodegenError::read(Path::new("missing.rs"), io);

    assert_eq!(err.to_string(), "failed to read missing.rs");
    assert_eq!(err.source().unwrap().to_string(), "no such file");
}

#[test]
fn CodegenError___from_fmt_error___converts_to_render() {
    let err: CodegenError = std::fmt::Error.into();

    assert!(matches!(err, CodegenError::Render(_)));
}
