use std::fmt;

/// Android Gradle plugin applied by the generated `build.gradle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradlePlugin {
    Application,
    Library,
}

impl GradlePlugin {
    pub fn from_is_app(is_app: bool) -> Self {
        if is_app { GradlePlugin::Application } else { GradlePlugin::Library }
    }

    /// Plugin identifier as written after `apply plugin:`.
    pub fn id(&self) -> &'static str {
        match self {
            GradlePlugin::Application => "com.android.application",
            GradlePlugin::Library => "com.android.library",
        }
    }
}

impl fmt::Display for GradlePlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
