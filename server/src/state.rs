//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only shared handles and immutable configuration; nothing in it is
//! mutated per request. Preference state is never kept here: each SSR request
//! builds its own backend from the request cookies.

use std::sync::Arc;

use crate::config::Config;
use crate::services::documents::DocumentStore;
use crate::services::github::GithubClient;
use crate::services::translate::Translator;

/// Clone is required by Axum; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub documents: Arc<dyn DocumentStore>,
    /// `None` when no translation API key is configured.
    pub translator: Option<Arc<dyn Translator>>,
    pub github: Arc<GithubClient>,
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        translator: Option<Arc<dyn Translator>>,
        github: GithubClient,
        config: Config,
    ) -> Self {
        Self { documents, translator, github: Arc::new(github), config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
