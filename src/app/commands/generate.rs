//! Generate command: realize a `ProjectLayout` on disk.
//!
//! Steps run in a fixed order. A failing step is logged and recorded in the
//! report; the remaining steps still run.

use std::io::Write;

use tracing::{debug, error, info, warn};

use crate::adapters::assets;
use crate::app::AppContext;
use crate::domain::{
    AppError, Artifact, ArtifactKind, PlannedPath, ProjectLayout, TemplateContext,
    TemplateRenderer,
};
use crate::ports::ScaffoldStore;

/// Content of the generated `settings.gradle`.
pub const SETTINGS_CONTENT: &str = "\n";

/// Inputs for a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Base directory; empty means the working directory.
    pub base: String,
    /// Package name written into the manifest; may be empty.
    pub package: String,
    /// Application (true) or library (false) project.
    pub is_app: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Created,
    Failed(String),
}

/// Result of a single artifact step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub artifact: Artifact,
    pub path: String,
    pub status: StepStatus,
}

/// Per-artifact outcomes of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub root: String,
    pub steps: Vec<StepOutcome>,
}

impl GenerationReport {
    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().filter(|step| matches!(step.status, StepStatus::Failed(_)))
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn outcome(&self, artifact: Artifact) -> Option<&StepOutcome> {
        self.steps.iter().find(|step| step.artifact == artifact)
    }
}

/// Create the directory part of `path`.
///
/// A path whose last segment contains a `.` is taken to be a file and only
/// its parent is created. Any other path is created as a directory tree.
/// Existing directories are left untouched.
///
/// Known limitation: a directory named like `v1.0` is treated as a file.
pub fn ensure_path<S: ScaffoldStore>(store: &S, path: &str) -> Result<(), AppError> {
    let last_segment = path.rsplit('/').next().unwrap_or(path);
    if last_segment.contains('.') {
        let (parent, _) = path
            .rsplit_once('/')
            .ok_or_else(|| AppError::MissingParent { path: path.to_string() })?;
        let parent = if parent.is_empty() { "/" } else { parent };
        store.create_dir_all(parent)?;
    } else {
        store.create_dir_all(path)?;
    }
    Ok(())
}

/// Create `destination`, render `template` with `variables` and write the result.
///
/// The file is truncated before rendering, so a render failure leaves it empty.
pub fn render_template<S, R>(
    ctx: &AppContext<S, R>,
    artifact: Artifact,
    template: &str,
    destination: &str,
    variables: &TemplateContext,
) -> Result<(), AppError>
where
    S: ScaffoldStore,
    R: TemplateRenderer,
{
    let mut file = create_artifact_file(ctx.store(), artifact, destination)?;
    let template_name = artifact.asset_name().unwrap_or(artifact.display_name());
    let rendered = ctx.renderer().render(template, variables, template_name)?;
    file.write_all(rendered.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Realize every artifact of `layout`.
pub fn execute<S, R>(ctx: &AppContext<S, R>, layout: &ProjectLayout) -> GenerationReport
where
    S: ScaffoldStore,
    R: TemplateRenderer,
{
    let mut steps = Vec::with_capacity(Artifact::ALL.len());

    for entry in layout.entries() {
        let result = match entry.kind {
            ArtifactKind::Directory => create_directory(ctx.store(), &entry),
            ArtifactKind::Template | ArtifactKind::Static => {
                prepare_parent(ctx.store(), &entry).and_then(|()| emit_file(ctx, layout, &entry))
            }
        };

        let status = match result {
            Ok(()) => StepStatus::Created,
            Err(err) => {
                error!("{} step failed: {}", entry.artifact, err);
                StepStatus::Failed(err.to_string())
            }
        };
        steps.push(StepOutcome { artifact: entry.artifact, path: entry.path.to_string(), status });
    }

    GenerationReport { root: layout.root_display().to_string(), steps }
}

fn create_directory<S: ScaffoldStore>(store: &S, entry: &PlannedPath<'_>) -> Result<(), AppError> {
    match ensure_path(store, entry.path) {
        Err(AppError::MissingParent { path }) => {
            debug!("{} path '{}' has no folder component, skipping", entry.artifact, path);
            Ok(())
        }
        Err(err) => Err(err),
        Ok(()) => {
            debug!("created directory {}", entry.path);
            Ok(())
        }
    }
}

fn prepare_parent<S: ScaffoldStore>(store: &S, entry: &PlannedPath<'_>) -> Result<(), AppError> {
    match ensure_path(store, entry.path) {
        // File sits directly in the working directory.
        Err(AppError::MissingParent { .. }) => Ok(()),
        other => other,
    }
}

fn emit_file<S, R>(
    ctx: &AppContext<S, R>,
    layout: &ProjectLayout,
    entry: &PlannedPath<'_>,
) -> Result<(), AppError>
where
    S: ScaffoldStore,
    R: TemplateRenderer,
{
    match entry.artifact {
        Artifact::Manifest => {
            if layout.package.is_empty() {
                warn!("using a blank package name");
            } else {
                info!("package name is {}", layout.package);
            }
            let template = assets::artifact_content(entry.artifact)?;
            let variables = TemplateContext::new().with_var("Pkg", layout.package.as_str());
            render_template(ctx, entry.artifact, template, entry.path, &variables)
        }
        Artifact::BuildConfig => {
            let plugin = layout.plugin();
            info!("using gradle plugin {}", plugin);
            let template = assets::artifact_content(entry.artifact)?;
            let variables = TemplateContext::new().with_var("Plugin", plugin.id());
            render_template(ctx, entry.artifact, template, entry.path, &variables)
        }
        Artifact::Settings => write_static(ctx.store(), entry, SETTINGS_CONTENT),
        other => {
            let content = assets::artifact_content(other)?;
            write_static(ctx.store(), entry, content)
        }
    }
}

fn write_static<S: ScaffoldStore>(
    store: &S,
    entry: &PlannedPath<'_>,
    content: &str,
) -> Result<(), AppError> {
    let mut file = create_artifact_file(store, entry.artifact, entry.path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn create_artifact_file<'s, S: ScaffoldStore>(
    store: &'s S,
    artifact: Artifact,
    path: &str,
) -> Result<Box<dyn Write + 's>, AppError> {
    store.create_file(path).map_err(|source| AppError::FileCreate {
        artifact,
        path: path.to_string(),
        source,
    })
}
