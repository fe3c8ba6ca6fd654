//! ----- INTAKE MODULE -----
//! This module talks to the operator. It prompts for a line of floor
//! numbers, rejects the whole line if any part of it is bad, and hands
//! accepted batches to the request channel.

use std::io::{self, BufRead, Write};

use log::debug;

use shared_resources::request;
use shared_resources::request_channel::RequestChannel;

pub struct Intake<R> {
    input: R,
}

impl<R: BufRead> Intake<R> {
    pub fn new(input: R) -> Self {
        Intake {
            input: input,
        }
    }

    /// Prompts until a valid batch is queued. Returns the batch in the order
    /// the engine will serve it, or `None` once input is exhausted.
    pub fn request_batch<W: Write>(
        &mut self,
        request_channel: &RequestChannel,
        output: &mut W,
    ) -> io::Result<Option<Vec<u8>>> {
        let top_floor = request_channel.top_floor();
        loop {
            write!(output, "Enter floor requests (comma-separated, 1-{}): ", top_floor)?;
            output.flush()?;

            let line = match self.read_request_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            let accepted = request::parse_floors(&line, top_floor)
                .and_then(|floors| request_channel.accept_batch(floors));
            match accepted {
                Ok(batch) => return Ok(Some(batch)),
                Err(e) => {
                    debug!("rejected {:?} in {:?}: {:?}", e.token(), line.trim(), e.kind());
                    writeln!(output, "Invalid input. Please enter valid floor numbers (1-{}).", top_floor)?;
                },
            }
        }
    }

    /// Next non-blank line, without re-prompting for blank ones. Bytes that
    /// are not UTF-8 become U+FFFD so the line fails to parse like any other
    /// malformed request.
    fn read_request_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None)
            }
            let line = String::from_utf8_lossy(&buf);
            if !line.trim().is_empty() {
                return Ok(Some(line.into_owned()))
            }
        }
    }
}
