//! hashparam Core Library
//! 
//! Core types, traits, and abstractions for carrying typed key/value state in a URL fragment.
//! This crate provides the foundation for the codec, state, and CLI crates.

pub mod types;
pub mod traits;
pub mod error;
pub mod config;

pub use types::*;
pub use traits::*;
pub use error::*;
pub use config::*;
