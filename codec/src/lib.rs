//! hashparam Codec
//! 
//! Pure functions translating between a `ParameterMap` and its fragment form:
//! - Percent escaping with the `encodeURIComponent` character set
//! - Literal-based type casting of decoded tokens
//! - `key:value` segment grammar joined with `/`
//! - Link building for fragment-bearing hrefs

pub mod escape;
pub mod cast;
pub mod fragment;
pub mod link;

pub use escape::*;
pub use cast::*;
pub use fragment::*;
pub use link::*;
