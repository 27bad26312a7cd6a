use include_dir::{Dir, include_dir};

use crate::domain::{AppError, Artifact};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Raw content of an embedded template asset.
pub fn template_content(name: &str) -> Option<&'static str> {
    TEMPLATES_DIR.get_file(name).and_then(|file| file.contents_utf8())
}

/// Embedded content backing `artifact`.
pub fn artifact_content(artifact: Artifact) -> Result<&'static str, AppError> {
    let name = artifact
        .asset_name()
        .ok_or_else(|| AppError::AssetMissing(format!("{} has no embedded asset", artifact)))?;
    template_content(name).ok_or_else(|| AppError::AssetMissing(name.to_string()))
}
