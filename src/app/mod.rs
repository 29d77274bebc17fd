//! Application layer.
//!
//! # Structure
//!
//! - `content` - The portfolio's static copy (name, roles, skills, links)
//! - `typewriter`, `scroll`, `contact` - Pure behavior logic, tested headlessly
//! - `settings` - Persisted preferences (theme)
//! - `state.rs` - Main application coordinator
//! - `messages`, `error` - Channel messages and the crate error type

pub mod contact;
pub mod content;
pub mod error;
pub mod messages;
pub mod scroll;
pub mod settings;
pub mod state;
pub mod typewriter;

// Re-exports for convenient external access
pub use messages::Message;
pub use settings::AppSettings;
pub use state::AppState;
