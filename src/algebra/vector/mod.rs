mod core;
pub(crate) use self::core::*;
mod text_io;
mod types;
pub use self::types::*;
mod vector_math;
pub(crate) use self::vector_math::*;
