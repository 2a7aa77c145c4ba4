use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no mutable data; every analysis is request-scoped.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub config: Config,
}
