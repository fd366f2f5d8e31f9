//! hashparam State Management
//! 
//! Reads and writes the parameter region of a URL fragment.
//! The map is never cached: state = decode(current fragment)

pub mod store;
pub mod sync;
pub mod memory;
pub mod diagnostics;

pub use store::*;
pub use sync::*;
pub use memory::*;
pub use diagnostics::*;
