//! Socket-facing pieces of the reactor.

mod connection;

pub use connection::{Connection, ReadOutcome};
