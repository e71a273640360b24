//! Rendering and writing of generated files.
//!
//! The generated file wraps its imports and impls in an anonymous
//! `const _: () = { ... };` block so it can be `include!`d next to the
//! annotated structs without clashing with the including file's imports.
//! Prelude items are written by full path, since the including module may
//! shadow `Result`, `Option` or `Vec`:
//!
//! ```text
//! // Code generated by easystruct from filters.rs. DO NOT EDIT.
//! // Include it next to the annotated structs: include!("filters_easystruct.rs");
//!
//! #[allow(unused_imports)]
//! const _: () = {
//!     use easystruct::ExtractError;
//!     ...
//!     impl FromRequest for Filter {
//!         fn populate<R: RequestSource + ?Sized>(&mut self, request: &R) -> ::core::result::Result<(), ExtractError> {
//!             let f = self;
//!             if let ::core::option::Option::Some(raw) = request.query("limit").filter(|raw| !raw.is_empty()) {
//!                 f.limit = i64::from_str(raw).map_err(|e| ExtractError::new("query:limit", e))?;
//!             }
//!             ::core::result::Result::Ok(())
//!         }
//!     }
//! };
//! ```

use super::ir::Kind;
use super::model::{REQUEST_PARAM, RenderField, RenderModel, RenderStruct};
use crate::error::{CodegenError, CodegenResult};
use std::ffi::OsString;
use std::fmt::{self, Write as _};
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Local bindings the generated code already uses.
const RESERVED_BINDINGS: &[&str] = &[REQUEST_PARAM, "raw"];

/// Derive the generated file's path: `dir/name.rs` becomes
/// `dir/name<marker>.rs`.
///
/// Inputs without a `.rs` extension are rejected rather than overwritten.
pub fn output_path(input: &Path, marker: &str) -> CodegenResult<PathBuf> {
    let invalid = || CodegenError::InvalidInput {
        path: input.to_path_buf(),
    };

    if input.extension().is_none_or(|ext| ext != "rs") {
        return Err(invalid());
    }
    let stem = input.file_stem().ok_or_else(invalid)?;

    let mut file_name = OsString::from(stem);
    file_name.push(marker);
    file_name.push(".rs");

    Ok(input.with_file_name(file_name))
}

/// Render the model into Rust source text.
pub fn render(model: &RenderModel) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(
        out,
        "// Code generated by easystruct from {}. DO NOT EDIT.",
        model.source_file
    )?;
    writeln!(
        out,
        "// Include it next to the annotated structs: include!({:?});",
        model.output_file
    )?;
    writeln!(out)?;
    writeln!(out, "#[allow(unused_imports)]")?;
    writeln!(out, "const _: () = {{")?;
    for import in &model.imports {
        writeln!(out, "    use {import};")?;
    }
    for s in &model.structs {
        writeln!(out)?;
        render_struct(&mut out, s)?;
    }
    writeln!(out, "}};")?;

    Ok(out)
}

fn render_struct(out: &mut String, s: &RenderStruct) -> fmt::Result {
    let g = &s.generics;
    let request_ty = request_type_param(&g.type_params);
    let binding = receiver_binding(&s.receiver);

    for cfg in &s.cfgs {
        writeln!(out, "    #[{cfg}]")?;
    }
    write!(out, "    impl{} FromRequest for {}{}", g.impl_generics, s.path, g.type_generics)?;
    if !g.where_clause.is_empty() {
        write!(out, " {}", g.where_clause)?;
    }
    writeln!(out, " {{")?;
    writeln!(
        out,
        "        fn populate<{request_ty}: RequestSource + ?Sized>(&mut self, {REQUEST_PARAM}: &{request_ty}) -> ::core::result::Result<(), ExtractError> {{"
    )?;
    if binding != "self" {
        writeln!(out, "            let {binding} = self;")?;
    }
    for field in &s.fields {
        render_field(out, binding, field)?;
    }
    writeln!(out, "            ::core::result::Result::Ok(())")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;

    Ok(())
}

fn render_field(out: &mut String, binding: &str, field: &RenderField) -> fmt::Result {
    let target = format!("{binding}.{}", field.name);
    let error = field.error.literal();
    let element = &field.element;

    writeln!(
        out,
        "            if let ::core::option::Option::Some(raw) = {}.filter(|raw| !raw.is_empty()) {{",
        field.extraction
    )?;
    match field.kind {
        Kind::Varchar => {
            let value = match element.as_str() {
                "u8" => "raw.as_bytes().to_vec()",
                "char" => "raw.chars().collect()",
                _ => "raw.to_owned()",
            };
            writeln!(out, "                {target} = {value};")?;
        }
        Kind::Integer | Kind::Double | Kind::Boolean => {
            writeln!(
                out,
                "                {target} = {element}::from_str(raw).map_err(|e| ExtractError::new({error}, e))?;"
            )?;
        }
        Kind::Integers | Kind::Doubles | Kind::Booleans => {
            writeln!(
                out,
                "                {target} = split_values(raw).map({element}::from_str).collect::<::core::result::Result<::std::vec::Vec<_>, _>>().map_err(|e| ExtractError::new({error}, e))?;"
            )?;
        }
        Kind::Strings => {
            writeln!(
                out,
                "                {target} = split_values(raw).map(str::to_owned).collect();"
            )?;
        }
    }
    writeln!(out, "            }}")?;

    Ok(())
}

/// The local name for `self`: the receiver when it is a usable identifier.
fn receiver_binding(receiver: &str) -> &str {
    let usable = !receiver.is_empty()
        && !RESERVED_BINDINGS.contains(&receiver)
        && syn::parse_str::<syn::Ident>(receiver).is_ok();

    if usable { receiver } else { "self" }
}

/// A name for the request type parameter that the struct does not use.
fn request_type_param(type_params: &[String]) -> String {
    let mut name = String::from("R");
    while type_params.contains(&name) {
        name.insert_str(0, "__");
    }
    name
}

/// Write `contents` to `output` atomically.
///
/// The file is written next to its destination and renamed into place, so
/// a failure never leaves a partial file behind.
pub fn write_output(output: &Path, contents: &str) -> CodegenResult<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let fail = |e: std::io::Error| CodegenError::write(output, e);

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(fail)?;
    file.write_all(contents.as_bytes()).map_err(fail)?;
    file.flush().map_err(fail)?;

    // NamedTempFile is created with mode 0600.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(fail)?;
    }

    file.persist(output).map_err(|e| fail(e.error))?;

    Ok(())
}
