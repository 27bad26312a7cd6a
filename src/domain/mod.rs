pub mod artifact;
pub mod error;
pub mod layout;
pub mod plugin;
pub mod template;

pub use artifact::{Artifact, ArtifactKind};
pub use error::AppError;
pub use layout::{PlannedPath, ProjectLayout};
pub use plugin::GradlePlugin;
pub use template::{TemplateContext, TemplateRenderer};
