use crate::algebra::*;
use crate::io::{DisplayRow, PrintSettings, TokenReader};
use std::io::{BufRead, Write};

impl<T> Matrix<T>
where
    T: ElementT,
{
    /// Fills the rows top to bottom from `tokens`, row `i` taking the
    /// next `size - i` tokens.
    ///
    /// On failure the matrix is left unchanged.
    pub fn read_tokens<R: BufRead>(
        &mut self,
        tokens: &mut TokenReader<R>,
    ) -> Result<&mut Self, AlgebraError> {
        let values = tokens.read_values::<T>(self.nnz())?;
        self.data.copy_from_slice(&values);
        Ok(self)
    }

    /// As [`read_tokens`](Matrix::read_tokens), reading from a fresh token
    /// stream over `reader`.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<&mut Self, AlgebraError> {
        self.read_tokens(&mut TokenReader::new(reader))
    }

    /// Writes each row's stored elements followed by the row terminator.
    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        settings: &PrintSettings,
    ) -> Result<(), AlgebraError> {
        write!(out, "{}", DisplayMatrix { m: self, settings })?;
        Ok(())
    }
}

struct DisplayMatrix<'a, T> {
    m: &'a Matrix<T>,
    settings: &'a PrintSettings,
}

impl<T: ElementT> std::fmt::Display for DisplayMatrix<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.m.rows() {
            let row = DisplayRow {
                data: row.data(),
                settings: self.settings,
            };
            write!(f, "{}{}", row, self.settings.row_terminator)?;
        }
        Ok(())
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: ElementT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let settings = PrintSettings::default();
        write!(
            f,
            "{}",
            DisplayMatrix {
                m: self,
                settings: &settings
            }
        )
    }
}
