//! Application state shared across handlers

use crate::repositories::{UserRepository, exercise::ExerciseRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: UserRepository,
    pub exercise_repository: ExerciseRepository,
}
