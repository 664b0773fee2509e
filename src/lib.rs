//! Bravia Remote - a terminal remote control for Sony Bravia televisions.
//!
//! Talks to the Bravia remote server: sends IRCC key presses, lists and opens
//! applications, switches inputs and follows the television's live state over
//! server-sent events.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "bravia-remote";
