//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Gemini `generateContent` client (the real provider)
//! - Canned offline provider for tests and demos

pub mod adapter;

pub use adapter::*;
