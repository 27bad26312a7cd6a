use crate::domain::TemplateRenderer;
use crate::ports::ScaffoldStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ScaffoldStore, R: TemplateRenderer> {
    store: S,
    renderer: R,
}

impl<S: ScaffoldStore, R: TemplateRenderer> AppContext<S, R> {
    /// Create a new application context.
    pub fn new(store: S, renderer: R) -> Self {
        Self { store, renderer }
    }

    /// Get a reference to the scaffold store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
