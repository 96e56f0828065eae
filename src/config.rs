//! Command-line configuration.
//!
//! The whole configuration surface is `ircserv <port> <password>`; both
//! rejection messages are printed verbatim before exiting with status 1.

use thiserror::Error;

/// Startup parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub password: String,
}

/// Command-line rejections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Usage: {0} <port> <password>")]
    Usage(String),
    #[error("Port must be a number")]
    BadPort,
}

impl Config {
    /// Validate `argv`. The port must be all digits and representable as
    /// a TCP port.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        if args.len() != 3 {
            let argv0 = args.first().map(String::as_str).unwrap_or("ircserv");
            return Err(ConfigError::Usage(argv0.to_string()));
        }
        let port_arg = &args[1];
        if port_arg.is_empty() || !port_arg.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::BadPort);
        }
        let port: u16 = port_arg.parse().map_err(|_| ConfigError::BadPort)?;
        Ok(Self {
            port,
            password: args[2].clone(),
        })
    }
}
