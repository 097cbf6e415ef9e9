//! HTTP clients for the TheLLMsTxt backend API.
//!
//! The backend owns password verification, visitor lookup, and bot-visit
//! tracking; this crate wraps those endpoints behind injectable
//! capabilities (traits plus small request helpers) so site logic never
//! issues a fetch itself and every gated flow can run against fakes in
//! tests.

// Module declarations
pub mod auth;
pub mod config;
pub mod errors;
pub mod session;
pub mod visitors;

// Public API re-exports
pub use auth::{AuthGateway, HttpAuthGateway, MockAuthGateway};
pub use config::ClientConfig;
pub use errors::Error;
pub use session::{AdminGate, MemorySessionStore, SessionStore};
pub use visitors::{BotVisit, IpLookup, lookup_ip, spawn_bot_visit, track_bot_visit};
