use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::error::InputError;

pub const USAGE_HINT: &[&str] = &[
    "The command is intended to work with pipes.",
    "Usage: fortune | pipesay",
];

/// True when stdin is a terminal rather than a pipe or a redirected file.
pub fn stdin_is_tty() -> bool {
    termion::is_tty(&io::stdin())
}

/// Print the usage hint if `interactive`. Returns whether the caller should stop.
pub fn pipe_guard<W: Write>(interactive: bool, err: &mut W) -> io::Result<bool> {
    if !interactive {
        return Ok(false);
    }
    info!("stdin is a terminal, not reading");
    for line in USAGE_HINT {
        writeln!(err, "{line}")?;
    }
    Ok(true)
}

/// Read every line until end of stream. Line endings (`\n`, `\r\n`) are dropped.
///
/// End of stream ends the loop normally; any other I/O failure is reported
/// instead of truncating the input. Bytes that are not UTF-8 become U+FFFD.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, InputError> {
    let mut lines = Vec::new();
    for line in reader.split(b'\n') {
        match line {
            Ok(mut bytes) => {
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                lines.push(String::from_utf8_lossy(&bytes).into_owned());
            }
            Err(source) => {
                return Err(InputError::ReadFailure { lines: lines.len(), source });
            }
        }
    }
    debug!("read {} lines", lines.len());
    Ok(lines)
}
