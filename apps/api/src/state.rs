use std::sync::Arc;

use crate::generation::generator::ResumeGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; holds the credential and the Gemini client handle.
    pub generator: Arc<ResumeGenerator>,
}
