//! Shell Loop
//!
//! Reads JSON requests line by line and writes one JSON response per line.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::error::{CacheError, Result};
use crate::models::{ErrorResponse, Request, Response};
use crate::shell::Session;

/// Drives `session` until `input` is exhausted.
///
/// Blank lines are skipped. A malformed or unsupported request, including a
/// line that is not valid UTF-8, produces an `{"error": ...}` line and the
/// loop keeps going; only I/O failures stop it.
///
/// # Returns
/// The number of requests answered.
pub fn run<R, W>(session: &mut Session, mut input: R, mut output: W) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    info!(
        kind = %session.kind(),
        capacity = ?session.capacity(),
        "cache shell ready"
    );

    let mut answered = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match answer(session, &buf) {
            Ok(None) => continue,
            Ok(Some(response)) => response,
            Err(err) => {
                warn!(error = %err, "request failed");
                Response::Error(ErrorResponse::new(err.to_string()))
            }
        };

        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
        answered += 1;
    }

    info!(answered, "input closed");
    Ok(answered)
}

/// Decodes and executes one raw line. `None` means the line was blank.
fn answer(session: &mut Session, raw: &[u8]) -> Result<Option<Response>> {
    let line = std::str::from_utf8(raw)
        .map_err(|err| CacheError::InvalidRequest(format!("line is not valid UTF-8: {}", err)))?;
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let request = Request::parse(line)?;
    session.execute(request).map(Some)
}
