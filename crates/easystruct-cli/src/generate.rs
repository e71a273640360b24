//! Per-file driver: read, extract, render, write.

use crate::codegen::{Extractor, RenderModel, emit};
use crate::config::GeneratorConfig;
use crate::error::{CodegenError, CodegenResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Generated code for one input, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub output: PathBuf,
    pub code: String,
    pub structs: usize,
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The companion file was written
    Written { output: PathBuf, structs: usize },

    /// No struct had an extractable field; nothing was written
    NothingToGenerate,
}

/// Result of one input file in a batch.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub result: CodegenResult<Outcome>,
}

/// Results of a batch, in input order.
///
/// Without `keep_going` the batch stops after the first failure, so later
/// inputs have no report.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// Reports of the files that failed
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &CodegenError)> {
        self.files.iter().filter_map(|report| match &report.result {
            Ok(_) => None,
            Err(err) => Some((report.input.as_path(), err)),
        })
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Consume the report, keeping only the errors
    pub fn into_errors(self) -> Vec<CodegenError> {
        self.files
            .into_iter()
            .filter_map(|report| report.result.err())
            .collect()
    }
}

/// Runs the pipeline over input files with one configuration.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the companion code for `source`, read from `input`.
    ///
    /// Returns `None` when no struct has an extractable field.
    pub fn generate_source(&self, source: &str, input: &Path) -> CodegenResult<Option<Generated>> {
        let output = emit::output_path(input, &self.config.suffix)?;
        let file = syn::parse_file(source).map_err(|e| CodegenError::parse(input, e))?;

        let module = file_stem(input);
        let model = Extractor::new(&self.config.tag).extract(&module, &file);
        if model.is_empty() {
            return Ok(None);
        }

        let render_model = RenderModel::new(
            &model,
            &file_name(input),
            &file_name(&output),
            &self.config.runtime_crate,
        );
        let code = emit::render(&render_model)?;

        Ok(Some(Generated {
            output,
            code,
            structs: model.structs.len(),
        }))
    }

    /// Generate and write the companion file of `input`.
    pub fn generate_file(&self, input: &Path) -> CodegenResult<Outcome> {
        // Reject non-`.rs` inputs before touching the file system.
        emit::output_path(input, &self.config.suffix)?;

        let source = std::fs::read_to_string(input).map_err(|e| CodegenError::read(input, e))?;

        let Some(generated) = self.generate_source(&source, input)? else {
            info!(input = %input.display(), "no annotated structs, nothing to generate");
            return Ok(Outcome::NothingToGenerate);
        };

        emit::write_output(&generated.output, &generated.code)?;
        info!(
            input = %input.display(),
            output = %generated.output.display(),
            structs = generated.structs,
            "generated request extractors"
        );

        Ok(Outcome::Written {
            output: generated.output,
            structs: generated.structs,
        })
    }

    /// Process `inputs` in order under the configured batch policy.
    pub fn run(&self, inputs: &[PathBuf]) -> BatchReport {
        let mut report = BatchReport::default();

        for input in inputs {
            let result = self.generate_file(input);
            let failed = result.is_err();

            report.files.push(FileReport {
                input: input.clone(),
                result,
            });

            if failed && !self.config.keep_going {
                debug!(remaining = inputs.len() - report.files.len(), "stopping after failure");
                break;
            }
        }

        report
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
