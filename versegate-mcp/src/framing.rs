//! stdio message framing. Clients either send LSP-style `Content-Length`
//! headers or one JSON object per line; replies use whichever style the last
//! request used.

use anyhow::Result;
use std::io::{BufRead, Read, Write};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Framing {
    Headers,
    Lines,
}

pub struct Transport<R, W> {
    reader: R,
    writer: W,
    framing: Framing,
}

impl<R: BufRead, W: Write> Transport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            framing: Framing::Headers,
        }
    }

    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// Next message, or `None` at end of input.
    pub fn read(&mut self) -> Result<Option<serde_json::Value>> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('{') {
                self.framing = Framing::Lines;
                debug!(bytes = trimmed.len(), "line message");
                return Ok(Some(serde_json::from_str(trimmed)?));
            }

            self.framing = Framing::Headers;
            let mut declared = content_length(trimmed);
            loop {
                let mut header = String::new();
                if self.reader.read_line(&mut header)? == 0 {
                    return Ok(None);
                }
                let h = header.trim();
                if h.is_empty() {
                    break;
                }
                declared = declared.or_else(|| content_length(h));
            }
            let Some(len) = declared.filter(|&n| n > 0) else {
                warn!("header block without content-length; skipped");
                continue;
            };
            let mut body = vec![0u8; len];
            self.reader.read_exact(&mut body)?;
            debug!(bytes = len, "framed message");
            return Ok(Some(serde_json::from_slice(&body)?));
        }
    }

    pub fn write(&mut self, v: &serde_json::Value) -> Result<()> {
        let body = serde_json::to_vec(v)?;
        match self.framing {
            Framing::Lines => {
                self.writer.write_all(&body)?;
                self.writer.write_all(b"\n")?;
            }
            Framing::Headers => {
                write!(
                    self.writer,
                    "Content-Length: {}\r\nContent-Type: application/vscode-jsonrpc; charset=utf-8\r\n\r\n",
                    body.len()
                )?;
                self.writer.write_all(&body)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn content_length(header: &str) -> Option<usize> {
    let (name, value) = header.split_once(':')?;
    if !name.trim().eq_ignore_ascii_case("content-length") {
        return None;
    }
    value.trim().parse().ok()
}
