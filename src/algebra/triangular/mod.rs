mod core;
mod matrix_math;
mod text_io;
mod types;
pub use self::types::*;
