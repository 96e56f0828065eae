//! Per-connection socket state: read buffering and best-effort writes.

use std::io::{self, ErrorKind, Read, Write};

use ircserv_proto::line;
use mio::net::TcpStream;
use tracing::warn;

/// Result of one non-blocking read pass.
pub enum ReadOutcome {
    /// Bytes arrived; zero or more complete lines were framed.
    Lines(Vec<String>),
    /// Nothing more to read this tick.
    WouldBlock,
    /// Peer closed or the socket failed; the client must be removed.
    Closed,
}

/// One accepted socket plus its partial-receive buffer.
///
/// Bytes that do not yet form a `\n`-terminated line stay in `partial`
/// until a later read completes them.
pub struct Connection {
    stream: TcpStream,
    partial: Vec<u8>,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            partial: Vec::new(),
        }
    }

    /// For registry (de)registration only.
    pub fn stream_mut(&mut self) -> &mut TcpStream {
        &mut self.stream
    }

    /// Perform one read. The caller loops until [`ReadOutcome::WouldBlock`]
    /// so a readiness notification is always drained completely.
    pub fn read_chunk(&mut self) -> ReadOutcome {
        let mut buf = [0u8; 512];
        loop {
            match self.stream.read(&mut buf) {
                Ok(0) => return ReadOutcome::Closed,
                Ok(n) => {
                    self.partial.extend_from_slice(&buf[..n]);
                    return ReadOutcome::Lines(line::extract_lines(&mut self.partial));
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => return ReadOutcome::WouldBlock,
                Err(err) => {
                    warn!(error = %err, "recv failed");
                    return ReadOutcome::Closed;
                }
            }
        }
    }

    /// Best-effort synchronous send of one line, appending `\n` when the
    /// caller did not. Short writes and an unwritable socket are logged,
    /// not retried; a hard error is returned so the caller can drop the
    /// client.
    pub fn send_line(&mut self, text: &str) -> io::Result<()> {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        bytes.extend_from_slice(text.as_bytes());
        if !text.ends_with('\n') {
            bytes.push(b'\n');
        }
        loop {
            match self.stream.write(&bytes) {
                Ok(n) if n < bytes.len() => {
                    warn!(sent = n, len = bytes.len(), "message has not been sent entirely");
                    return Ok(());
                }
                Ok(_) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => {
                    warn!("socket not writable; message dropped");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }
}
