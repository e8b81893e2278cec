//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::UserRepo;

/// Main application state.
///
/// Holds the user repository behind its port trait and is passed to
/// HTTP handlers via axum state.
pub struct App {
    pub users: Arc<dyn UserRepo>,
}

impl App {
    pub fn new(users: Arc<dyn UserRepo>) -> Self {
        Self { users }
    }
}
