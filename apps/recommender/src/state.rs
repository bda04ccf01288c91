use std::sync::Arc;

use crate::config::Config;
use crate::store::SkillStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only resume/posting store. `PgSkillStore` in production.
    pub store: Arc<dyn SkillStore>,
    pub config: Config,
}
