//! Test server management.
//!
//! Spawns and manages ircserv instances for integration testing.

#![allow(dead_code)]

use std::net::TcpStream;
use std::process::{Child, Command, Stdio};
use std::thread::sleep;
use std::time::{Duration, Instant};

use super::PASSWORD;

/// A test server instance, killed on drop.
pub struct TestServer {
    child: Child,
    port: u16,
}

impl TestServer {
    /// Spawn a server on `port` and wait until it accepts connections.
    pub fn spawn(port: u16) -> std::io::Result<Self> {
        let child = Command::new(env!("CARGO_BIN_EXE_ircserv"))
            .arg(port.to_string())
            .arg(PASSWORD)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        let server = Self { child, port };

        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match TcpStream::connect(server.address()) {
                Ok(_) => return Ok(server),
                Err(err) if Instant::now() >= deadline => return Err(err),
                Err(_) => sleep(Duration::from_millis(25)),
            }
        }
    }

    /// Address clients should connect to.
    pub fn address(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
