//! Whitespace-delimited text input and output for vectors and matrices.
//!

mod settings;
pub use settings::*;
mod tokens;
pub use tokens::*;

use std::fmt::{Display, Formatter, Result};

// Renders one row of elements: values joined by the configured separator,
// with an optional trailing separator.  Row terminators are the caller's
// business.
pub(crate) struct DisplayRow<'a, T> {
    pub data: &'a [T],
    pub settings: &'a PrintSettings,
}

impl<T: Display> Display for DisplayRow<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let sep = &self.settings.separator;
        for (k, x) in self.data.iter().enumerate() {
            if k > 0 {
                f.write_str(sep)?;
            }
            write!(f, "{}", x)?;
        }
        if self.settings.trailing_separator && !self.data.is_empty() {
            f.write_str(sep)?;
        }
        Ok(())
    }
}
