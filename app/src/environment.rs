//! Environment dependencies for the application reducers

use std::sync::Arc;

use userboard_client::{DirectoryApi, DirectoryClient};

/// Injected dependencies shared by both slices
#[derive(Clone)]
pub struct AppEnvironment {
    /// The remote data operations
    pub api: Arc<dyn DirectoryApi>,
}

impl AppEnvironment {
    /// Creates a new `AppEnvironment`
    #[must_use]
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self { api }
    }

    /// Environment backed by the production REST client
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(DirectoryClient::new()))
    }
}

impl std::fmt::Debug for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppEnvironment").finish_non_exhaustive()
    }
}
