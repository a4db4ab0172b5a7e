//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they only depend on the
//! [`UserDirectory`] driving port and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::UserDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserDirectory>,
}

impl HttpState {
    /// Construct state from the user directory port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use user_directory::domain::UserService;
    /// use user_directory::inbound::http::state::HttpState;
    /// use user_directory::test_support::InMemoryUserRepository;
    ///
    /// let service = UserService::new(Arc::new(InMemoryUserRepository::default()));
    /// let state = HttpState::new(Arc::new(service));
    /// # let _ = state;
    /// ```
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }
}
