use std::collections::VecDeque;
use std::io::{self, BufRead};
use log::error;

use crate::types::Vector2D;

// --- InputSource: whitespace-separated numbers from any buffered reader ---
pub struct InputSource<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> InputSource<R> {
    pub fn new(reader: R) -> Self {
        InputSource { reader, pending: VecDeque::new() }
    }

    /// Next token, pulling more lines from the reader as needed.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    pub fn read_number(&mut self) -> io::Result<f64> {
        let token = self.next_token()?.ok_or_else(|| {
            error!("Input ended before all values were read.");
            io::Error::new(io::ErrorKind::UnexpectedEof, "expected a number, found end of input")
        })?;
        token.parse::<f64>().map_err(|e| {
            error!("Failed to parse '{}' as a number: {}", token, e);
            io::Error::new(io::ErrorKind::InvalidData, format!("'{}' is not a number", token))
        })
    }

    /// Reads the x then y coordinate of a vector.
    pub fn read_vector(&mut self) -> io::Result<Vector2D> {
        let x = self.read_number()?;
        let y = self.read_number()?;
        Ok(Vector2D::new(x, y))
    }
}
