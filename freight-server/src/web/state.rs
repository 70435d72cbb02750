//! Shared application state.

use std::sync::Arc;

use crate::directory::CityDirectory;
use crate::distance::DistanceProvider;

/// The distance provider as shared by handlers. `None` means the
/// server runs fully offline on haversine estimates.
pub type SharedProvider = Arc<dyn DistanceProvider + Send + Sync>;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The static city directory.
    pub directory: Arc<CityDirectory>,

    /// Road-distance provider, if one is configured.
    pub provider: Option<SharedProvider>,
}

impl AppState {
    /// Create state over a directory and an optional provider.
    pub fn new(directory: CityDirectory, provider: Option<SharedProvider>) -> Self {
        Self {
            directory: Arc::new(directory),
            provider,
        }
    }
}
