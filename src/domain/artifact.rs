use std::fmt;

/// How an artifact is realized on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// A directory tree created with all missing ancestors.
    Directory,
    /// A file rendered from an embedded template.
    Template,
    /// A file written with fixed content.
    Static,
}

/// Every file or directory the generator produces, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Artifact {
    Libs,
    MainSource,
    TestSource,
    Assets,
    JniLibs,
    Resources,
    Manifest,
    BuildConfig,
    Settings,
    Proguard,
}

impl Artifact {
    /// All artifacts in emission order.
    pub const ALL: [Artifact; 10] = [
        Artifact::Libs,
        Artifact::MainSource,
        Artifact::TestSource,
        Artifact::Assets,
        Artifact::JniLibs,
        Artifact::Resources,
        Artifact::Manifest,
        Artifact::BuildConfig,
        Artifact::Settings,
        Artifact::Proguard,
    ];

    /// Path of this artifact relative to the project root.
    pub fn suffix(&self) -> &'static str {
        match self {
            Artifact::Libs => "libs",
            Artifact::MainSource => "src/main/java",
            Artifact::TestSource => "src/androidTest/java",
            Artifact::Assets => "src/main/assets",
            Artifact::JniLibs => "src/main/jniLibs",
            Artifact::Resources => "src/main/res",
            Artifact::Manifest => "src/main/AndroidManifest.xml",
            Artifact::BuildConfig => "build.gradle",
            Artifact::Settings => "settings.gradle",
            Artifact::Proguard => "proguard-rules.pro",
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            Artifact::Libs
            | Artifact::MainSource
            | Artifact::TestSource
            | Artifact::Assets
            | Artifact::JniLibs
            | Artifact::Resources => ArtifactKind::Directory,
            Artifact::Manifest | Artifact::BuildConfig => ArtifactKind::Template,
            Artifact::Settings | Artifact::Proguard => ArtifactKind::Static,
        }
    }

    /// Embedded asset backing this artifact's content, if any.
    pub fn asset_name(&self) -> Option<&'static str> {
        match self {
            Artifact::Manifest => Some("AndroidManifest.xml.j2"),
            Artifact::BuildConfig => Some("build.gradle.j2"),
            Artifact::Proguard => Some("proguard-rules.pro"),
            _ => None,
        }
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            Artifact::Libs => "libs",
            Artifact::MainSource => "main source",
            Artifact::TestSource => "test source",
            Artifact::Assets => "assets",
            Artifact::JniLibs => "JNI libs",
            Artifact::Resources => "resources",
            Artifact::Manifest => "manifest",
            Artifact::BuildConfig => "build.gradle",
            Artifact::Settings => "settings.gradle",
            Artifact::Proguard => "proguard",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
