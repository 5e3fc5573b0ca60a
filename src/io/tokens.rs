use crate::algebra::AlgebraError;
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

/// Reader producing whitespace-delimited tokens from a buffered stream.
///
/// Tokens may be split across any number of lines.  Tokens that have been
/// read from the stream but not yet consumed are kept, so a single reader
/// can be passed to several consecutive `read_tokens` calls.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R> TokenReader<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token in the stream, or `None` at end of input
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Reads exactly `count` values.
    ///
    /// Fails with `UnexpectedEndOfInput` if the stream ends early, or with
    /// `Parse` on the first token that does not parse as `T`.
    pub fn read_values<T: FromStr>(&mut self, count: usize) -> Result<Vec<T>, AlgebraError> {
        let mut values = Vec::with_capacity(count);
        while values.len() < count {
            let token = match self.next_token()? {
                Some(token) => token,
                None => {
                    return Err(AlgebraError::UnexpectedEndOfInput {
                        expected: count,
                        found: values.len(),
                    })
                }
            };
            match token.parse::<T>() {
                Ok(value) => values.push(value),
                Err(_) => return Err(AlgebraError::Parse { token }),
            }
        }
        Ok(values)
    }

    /// Underlying reader, positioned after the last line pulled for tokens
    pub fn into_inner(self) -> R {
        self.reader
    }
}
