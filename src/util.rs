//! Small helpers: printable peer addresses and the start-time stamp.

use std::net::SocketAddr;

/// Printable peer host.
///
/// The listener is an IPv6 socket accepting v4-mapped peers, so accepted
/// addresses arrive as `::ffff:a.b.c.d` or `::1`. The textual prefixes
/// are stripped; an empty remainder or the loopback remainder `1` maps
/// to `127.0.0.1`.
pub fn printable_host(addr: &SocketAddr) -> String {
    let ip = addr.ip().to_string();
    let stripped = if let Some(rest) = ip.strip_prefix("::ffff:") {
        rest
    } else if let Some(rest) = ip.strip_prefix("::") {
        rest
    } else {
        &ip
    };
    if stripped.is_empty() || stripped == "1" {
        "127.0.0.1".to_string()
    } else {
        stripped.to_string()
    }
}

/// Locale-style timestamp recorded at startup and shown in numeric 003.
pub fn start_time_string() -> String {
    chrono::Local::now().format("%c").to_string()
}
