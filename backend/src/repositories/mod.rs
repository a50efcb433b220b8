//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod note;
pub mod user;

pub use note::{NewNote, NoteRecord, NoteRepository};
pub use user::{UserRecord, UserRepository};
