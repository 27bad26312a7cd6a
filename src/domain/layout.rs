use super::{Artifact, ArtifactKind, GradlePlugin};

/// Resolved paths for one generated project.
///
/// Paths are plain strings: `base + "/" + suffix` when a base directory is
/// given, the bare suffix otherwise. Nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub base: String,
    pub libs: String,
    pub main_source: String,
    pub test_source: String,
    pub assets: String,
    pub jni_libs: String,
    pub resources: String,
    pub manifest: String,
    pub build_config: String,
    pub settings: String,
    pub proguard: String,
    pub package: String,
    pub is_app: bool,
}

/// One planned path with the artifact it realizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPath<'a> {
    pub artifact: Artifact,
    pub kind: ArtifactKind,
    pub path: &'a str,
}

impl ProjectLayout {
    /// Plan every artifact path under `base`.
    pub fn plan(base: &str, package: impl Into<String>, is_app: bool) -> Self {
        let at = |artifact: Artifact| join(base, artifact.suffix());
        Self {
            base: base.to_string(),
            libs: at(Artifact::Libs),
            main_source: at(Artifact::MainSource),
            test_source: at(Artifact::TestSource),
            assets: at(Artifact::Assets),
            jni_libs: at(Artifact::JniLibs),
            resources: at(Artifact::Resources),
            manifest: at(Artifact::Manifest),
            build_config: at(Artifact::BuildConfig),
            settings: at(Artifact::Settings),
            proguard: at(Artifact::Proguard),
            package: package.into(),
            is_app,
        }
    }

    pub fn path(&self, artifact: Artifact) -> &str {
        match artifact {
            Artifact::Libs => &self.libs,
            Artifact::MainSource => &self.main_source,
            Artifact::TestSource => &self.test_source,
            Artifact::Assets => &self.assets,
            Artifact::JniLibs => &self.jni_libs,
            Artifact::Resources => &self.resources,
            Artifact::Manifest => &self.manifest,
            Artifact::BuildConfig => &self.build_config,
            Artifact::Settings => &self.settings,
            Artifact::Proguard => &self.proguard,
        }
    }

    /// Planned paths in emission order.
    pub fn entries(&self) -> impl Iterator<Item = PlannedPath<'_>> {
        Artifact::ALL.into_iter().map(|artifact| PlannedPath {
            artifact,
            kind: artifact.kind(),
            path: self.path(artifact),
        })
    }

    /// Directory the project is generated in, for display.
    pub fn root_display(&self) -> &str {
        if self.base.is_empty() { "." } else { &self.base }
    }

    pub fn plugin(&self) -> GradlePlugin {
        GradlePlugin::from_is_app(self.is_app)
    }
}

fn join(base: &str, suffix: &str) -> String {
    if base.is_empty() { suffix.to_string() } else { format!("{}/{}", base, suffix) }
}
