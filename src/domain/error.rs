use std::io;

use thiserror::Error;

use super::Artifact;

/// Library-wide error type for studiogen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A file-like path has no directory component to create.
    #[error("No folder found in path '{path}': it may only be a file in the root")]
    MissingParent { path: String },

    /// An artifact file could not be created or truncated.
    #[error("Failed to create {artifact} file '{path}': {source}")]
    FileCreate {
        artifact: Artifact,
        path: String,
        #[source]
        source: io::Error,
    },

    /// Variable substitution into a template failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Embedded template asset is absent from the binary.
    #[error("Missing embedded template asset: {0}")]
    AssetMissing(String),
}

impl AppError {
    pub fn template_render<T: Into<String>, R: std::fmt::Display>(template: T, reason: R) -> Self {
        AppError::TemplateRender { template: template.into(), reason: reason.to_string() }
    }
}
