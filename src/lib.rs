//! studiogen: generate an Android Studio project skeleton.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{FilesystemScaffoldStore, MinijinjaTemplateRenderer};
use app::AppContext;

pub use app::commands::generate::{
    GenerateOptions, GenerationReport, StepOutcome, StepStatus, ensure_path,
};
pub use domain::{AppError, Artifact, ArtifactKind, GradlePlugin, ProjectLayout};

/// Generate the project skeleton relative to the current directory.
pub fn generate(options: GenerateOptions) -> Result<GenerationReport, AppError> {
    let store = FilesystemScaffoldStore::current()?;
    Ok(run_with(store, options))
}

/// Generate the project skeleton relative to `root`.
///
/// An absolute base directory in `options` takes precedence over `root`.
pub fn generate_at(root: &Path, options: GenerateOptions) -> GenerationReport {
    run_with(FilesystemScaffoldStore::new(root.to_path_buf()), options)
}

fn run_with(store: FilesystemScaffoldStore, options: GenerateOptions) -> GenerationReport {
    let ctx = AppContext::new(store, MinijinjaTemplateRenderer::new());
    let layout = ProjectLayout::plan(&options.base, options.package, options.is_app);
    app::commands::generate::execute(&ctx, &layout)
}
