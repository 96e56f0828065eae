//! Per-session identity and registration state.

use std::collections::BTreeSet;

use ircserv_proto::Prefix;

use super::ClientId;

/// One connected session.
///
/// Socket and buffers live on the reactor side; this record is pure data
/// so handlers can mutate the client/channel graph without touching I/O.
#[derive(Debug)]
pub struct Client {
    id: ClientId,
    host: String,
    port: u16,
    pub nick: String,
    pub user: String,
    pub realname: String,
    pub password_ok: bool,
    /// Names of the channels this client has joined. Kept symmetric with
    /// each channel's member list by the join/removal paths.
    pub channels: BTreeSet<String>,
}

impl Client {
    pub fn new(id: ClientId, host: String, port: u16) -> Self {
        Self {
            id,
            host,
            port,
            nick: String::new(),
            user: String::new(),
            realname: String::new(),
            password_ok: false,
            channels: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Printable peer host, as shown in prefixes and WHO rows.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A session is registered once nickname, username and realname are
    /// all set and the server password has been accepted.
    pub fn is_registered(&self) -> bool {
        !self.nick.is_empty() && !self.user.is_empty() && !self.realname.is_empty() && self.password_ok
    }

    /// The `nick[!user][@host]` prefix for peer-originated lines.
    pub fn prefix(&self) -> String {
        Prefix::new(self.nick.as_str(), self.user.as_str(), self.host.as_str()).to_string()
    }

    /// Nickname as it appears in numeric replies: `*` until NICK.
    pub fn display_nick(&self) -> &str {
        if self.nick.is_empty() {
            "*"
        } else {
            &self.nick
        }
    }
}
