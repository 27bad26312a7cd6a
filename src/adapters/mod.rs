pub mod assets;
pub mod filesystem;
pub mod template;

pub use filesystem::FilesystemScaffoldStore;
pub use template::MinijinjaTemplateRenderer;
