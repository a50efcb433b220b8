//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth components.

pub mod note;
pub mod user;

pub use note::NoteService;
pub use user::UserService;
