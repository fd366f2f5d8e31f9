//! hashparam CLI support

mod commands;

pub use commands::*;
