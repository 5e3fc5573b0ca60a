use crate::algebra::*;
use crate::io::{DisplayRow, PrintSettings, TokenReader};
use std::io::{BufRead, Write};

impl<S, T> OffsetStorageVector<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: ElementT,
{
    /// Fills the backing storage in order with the next
    /// `size - start_index` tokens of `tokens`.
    ///
    /// On failure the vector is left unchanged.
    pub fn read_tokens<R: BufRead>(
        &mut self,
        tokens: &mut TokenReader<R>,
    ) -> Result<&mut Self, AlgebraError> {
        let values = tokens.read_values::<T>(self.len())?;
        self.data_mut().copy_from_slice(&values);
        Ok(self)
    }

    /// As [`read_tokens`](OffsetStorageVector::read_tokens), reading from
    /// a fresh token stream over `reader`.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<&mut Self, AlgebraError> {
        self.read_tokens(&mut TokenReader::new(reader))
    }
}

impl<S, T> OffsetStorageVector<S, T>
where
    S: AsRef<[T]>,
    T: ElementT,
{
    /// Writes the stored elements in order.  No index offset is written.
    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        settings: &PrintSettings,
    ) -> Result<(), AlgebraError> {
        let row = DisplayRow {
            data: self.data(),
            settings,
        };
        write!(out, "{}", row)?;
        Ok(())
    }
}

impl<S, T> std::fmt::Display for OffsetStorageVector<S, T>
where
    S: AsRef<[T]>,
    T: ElementT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let settings = PrintSettings::default();
        let row = DisplayRow {
            data: self.data(),
            settings: &settings,
        };
        write!(f, "{}", row)
    }
}
