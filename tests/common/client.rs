//! Test IRC client.
//!
//! A line-level client for integration testing: send raw commands,
//! collect replies, and assert on the lines the server produced.

#![allow(dead_code)]

use std::io::{self, BufRead, BufReader, ErrorKind, Write};
use std::net::TcpStream;
use std::time::{Duration, Instant};

use super::PASSWORD;

const RECV_DEADLINE: Duration = Duration::from_secs(3);
const SILENCE_WINDOW: Duration = Duration::from_millis(300);

/// A test IRC client speaking over one TCP connection.
pub struct TestClient {
    stream: TcpStream,
    reader: BufReader<TcpStream>,
    nick: String,
    /// Partial line carried across a read timeout.
    pending: String,
}

impl TestClient {
    /// Connect to a test server.
    pub fn connect(address: &str, nick: &str) -> io::Result<Self> {
        let stream = TcpStream::connect(address)?;
        stream.set_read_timeout(Some(Duration::from_millis(100)))?;
        stream.set_nodelay(true)?;
        let reader = BufReader::new(stream.try_clone()?);
        Ok(Self {
            stream,
            reader,
            nick: nick.to_string(),
            pending: String::new(),
        })
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    /// Send one raw line, CRLF-terminated.
    pub fn send_raw(&mut self, line: &str) -> io::Result<()> {
        self.stream.write_all(line.as_bytes())?;
        if !line.ends_with("\r\n") {
            self.stream.write_all(b"\r\n")?;
        }
        Ok(())
    }

    /// Register with PASS/NICK/USER and consume the welcome burst.
    pub fn register(&mut self) -> io::Result<()> {
        let nick = self.nick.clone();
        self.send_raw(&format!("PASS {PASSWORD}"))?;
        self.send_raw(&format!("NICK {nick}"))?;
        self.send_raw(&format!("USER {nick} 0 * :{nick} real"))?;
        self.recv_until(|line| line.contains(" 376 "))?;
        Ok(())
    }

    /// Receive one line, waiting up to the read timeout.
    pub fn recv_line(&mut self) -> io::Result<String> {
        let mut line = std::mem::take(&mut self.pending);
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(io::Error::new(ErrorKind::UnexpectedEof, "connection closed")),
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Ok(line)
            }
            Err(err) => {
                self.pending = line;
                Err(err)
            }
        }
    }

    /// Collect lines until one matches `pred` (that line included), or
    /// fail after the receive deadline.
    pub fn recv_until<F>(&mut self, pred: F) -> io::Result<Vec<String>>
    where
        F: Fn(&str) -> bool,
    {
        let deadline = Instant::now() + RECV_DEADLINE;
        let mut lines = Vec::new();
        loop {
            match self.recv_line() {
                Ok(line) => {
                    let done = pred(&line);
                    lines.push(line);
                    if done {
                        return Ok(lines);
                    }
                }
                Err(err) if err.kind() == ErrorKind::WouldBlock || err.kind() == ErrorKind::TimedOut => {}
                Err(err) => return Err(err),
            }
            if Instant::now() >= deadline {
                return Err(io::Error::new(
                    ErrorKind::TimedOut,
                    format!("no matching line; got {:?}", lines),
                ));
            }
        }
    }

    /// Read and discard whatever is pending until the stream stays quiet.
    pub fn drain(&mut self) {
        let deadline = Instant::now() + SILENCE_WINDOW;
        while Instant::now() < deadline {
            if self.recv_line().is_err() {
                break;
            }
        }
    }

    /// Assert that no line matching `pred` arrives within the silence
    /// window.
    pub fn assert_silence<F>(&mut self, pred: F)
    where
        F: Fn(&str) -> bool,
    {
        let deadline = Instant::now() + SILENCE_WINDOW;
        while Instant::now() < deadline {
            match self.recv_line() {
                Ok(line) => assert!(!pred(&line), "unexpected line: {line}"),
                Err(_) => {}
            }
        }
    }

    /// True once the server has closed this connection.
    pub fn closed(&mut self) -> bool {
        let deadline = Instant::now() + RECV_DEADLINE;
        while Instant::now() < deadline {
            match self.recv_line() {
                Ok(_) => {}
                Err(err) if err.kind() == ErrorKind::UnexpectedEof => return true,
                Err(_) => {}
            }
        }
        false
    }
}
