use crate::error::{Error, Result};
use std::io::BufRead;
use std::str::{self, FromStr};

/// Whitespace-separated token reader over any buffered input.
///
/// Input is pulled one line at a time as raw bytes, so a token never spans
/// two lines and bytes are only decoded once their token is consumed.
pub struct Scanner<R> {
    reader: R,
    buffer: Vec<Vec<u8>>,
    input: Vec<u8>,
    position: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            input: Vec::new(),
            position: 0,
        }
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Parses the next token as `T`. Returns `Ok(None)` once the input is
    /// exhausted and `Error::InputFormat` if the token is not UTF-8 or does
    /// not parse.
    pub fn tok<T: FromStr>(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(bytes) = self.buffer.pop() {
                self.position += 1;
                let token = String::from_utf8_lossy(&bytes);
                log::trace!("token {}: {token}", self.position);
                let parsed = str::from_utf8(&bytes).ok().and_then(|s| s.parse().ok());
                return match parsed {
                    Some(value) => Ok(Some(value)),
                    None => Err(Error::InputFormat {
                        token: token.into_owned(),
                        position: self.position,
                    }),
                };
            }
            self.input.clear();
            if self.reader.read_until(b'\n', &mut self.input)? == 0 {
                return Ok(None);
            }
            self.buffer = self
                .input
                .split(|b| b.is_ascii_whitespace())
                .filter(|token| !token.is_empty())
                .rev()
                .map(<[u8]>::to_vec)
                .collect();
        }
    }
}
