use std::io::{self, Write};
use crossterm::{
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    tty::IsTty,
};

use crate::constants::DISPLAY_PRECISION;
use crate::types::{Orientation, Vector2D};

/// Formats a number the way a C-style `%g` conversion does at
/// `DISPLAY_PRECISION` significant digits: fixed notation for moderate
/// exponents, scientific otherwise, with trailing zeros removed.
pub fn format_number(value: f64) -> String {
    format_general(value, DISPLAY_PRECISION)
}

pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf".to_string() } else { "inf".to_string() };
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }

    let precision = precision.max(1);
    // Rounding to the requested significant digits may bump the exponent (9.999995 -> 1e1).
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_fraction_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_fraction_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_fraction_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

// --- OutputTarget enum to handle stdout or an in-memory transcript ---
pub enum OutputTarget {
    Stdout { stdout: io::Stdout, styled: bool },
    #[cfg(test)]
    Buffer(Vec<u8>),
}

impl OutputTarget {
    /// Standard output, styled only when it is an interactive terminal.
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let styled = stdout.is_tty();
        OutputTarget::Stdout { stdout, styled }
    }

    #[cfg(test)]
    pub fn buffer() -> Self {
        OutputTarget::Buffer(Vec::new())
    }

    /// Everything written so far, for in-memory targets.
    #[cfg(test)]
    pub fn transcript(&self) -> Option<String> {
        match self {
            OutputTarget::Stdout { .. } => None,
            OutputTarget::Buffer(buf) => Some(String::from_utf8_lossy(buf).into_owned()),
        }
    }

    pub fn write_prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self, "{}", prompt)?;
        self.flush()
    }

    pub fn write_vector(&mut self, message: &str, vector: Vector2D) -> io::Result<()> {
        writeln!(self, "{}{} has length {}", message, vector, format_number(vector.length()))
    }

    pub fn write_verdict(&mut self, orientation: Orientation) -> io::Result<()> {
        write!(self, "Vectors are ")?;
        let color = match orientation {
            Orientation::Perpendicular => Color::Green,
            Orientation::NotPerpendicular => Color::Red,
        };
        if let OutputTarget::Stdout { stdout, styled: true } = self {
            execute!(
                stdout,
                SetForegroundColor(color),
                SetAttribute(Attribute::Bold),
                Print(orientation.label()),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        } else {
            write!(self, "{}", orientation.label())?; // Plain text when piped or buffered
        }
        writeln!(self, ".")?;
        self.flush()
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::Stdout { stdout, .. } => stdout.write(buf),
            #[cfg(test)]
            OutputTarget::Buffer(b) => b.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout { stdout, .. } => stdout.flush(),
            #[cfg(test)]
            OutputTarget::Buffer(_) => Ok(()),
        }
    }
}
