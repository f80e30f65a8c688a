//! Exercise tracking service
//!
//! Users are registered with a username, exercises are logged against a
//! user, and the log endpoint returns a date-bounded, count-limited report
//! of a user's exercise history.

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod report;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;
