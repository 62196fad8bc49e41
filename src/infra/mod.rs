//! Infrastructure layer - External systems integration
//!
//! This module handles the database connection, schema migrations,
//! and the repository implementations on top of them.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};
