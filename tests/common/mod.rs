//! Integration test infrastructure.
//!
//! Provides utilities for spawning server instances and for line-level
//! IRC test clients asserting on reply flows.

pub mod client;
pub mod server;

#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use server::TestServer;

/// The server password every test registers with.
#[allow(dead_code)]
pub const PASSWORD: &str = "letmein";
