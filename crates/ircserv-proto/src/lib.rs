//! Wire formats for the ircserv daemon.
//!
//! This crate owns everything about the shape of bytes on the wire and
//! nothing about server state: framing a TCP byte stream into lines,
//! splitting a line into a command and its arguments, serialising sender
//! prefixes, and producing the exact text of every numeric reply and
//! peer-originated message the server emits.

pub mod line;
pub mod message;
pub mod prefix;
pub mod reply;
pub mod response;

pub use prefix::Prefix;
pub use response::Response;
