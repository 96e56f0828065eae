//! The server-side data model: clients, channels, and the registries
//! that own them.
//!
//! Ownership is strictly centralised: [`ServerState`] owns every
//! [`Client`] and [`Channel`]. Cross-references are stored by key —
//! channel *names* inside a client, [`ClientId`]s inside a channel — so
//! removal is a symmetric update of two maps and can never dangle.

mod channel;
mod client;

pub use channel::Channel;
pub use client::Client;

use std::collections::BTreeMap;

use mio::Token;

/// Stable handle for one client session, equal to the poll token of its
/// socket. Token 0 is reserved for the listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(pub usize);

impl From<Token> for ClientId {
    fn from(token: Token) -> Self {
        ClientId(token.0)
    }
}

impl From<ClientId> for Token {
    fn from(id: ClientId) -> Self {
        Token(id.0)
    }
}

/// Exclusive owner of all client and channel records.
#[derive(Default)]
pub struct ServerState {
    pub clients: BTreeMap<ClientId, Client>,
    pub channels: BTreeMap<String, Channel>,
}

impl ServerState {
    /// Literal, case-sensitive nickname lookup.
    pub fn client_by_nick(&self, nick: &str) -> Option<&Client> {
        self.clients.values().find(|c| c.nick == nick)
    }

    pub fn nick_in_use(&self, nick: &str) -> bool {
        self.client_by_nick(nick).is_some()
    }

    /// The names list of a channel: nicknames in join order, the admin
    /// prefixed with `@`, every entry followed by a space (the trailing
    /// space is part of the wire contract).
    pub fn channel_names(&self, channel: &Channel) -> String {
        let mut names = String::new();
        for member in &channel.members {
            if let Some(client) = self.clients.get(member) {
                if channel.admin == *member {
                    names.push('@');
                }
                names.push_str(&client.nick);
                names.push(' ');
            }
        }
        names
    }

    /// Insert `id` into an existing channel, updating both sides of the
    /// membership relation. The first member becomes admin and operator.
    pub fn join_channel(&mut self, id: ClientId, name: &str) {
        let Some(channel) = self.channels.get_mut(name) else {
            return;
        };
        channel.add_member(id);
        if let Some(client) = self.clients.get_mut(&id) {
            client.channels.insert(name.to_string());
        }
    }

    /// Remove `id` from a channel on both sides. An emptied channel is
    /// destroyed; otherwise the admin is reassigned if it just left.
    /// Returns `true` when the channel was destroyed.
    pub fn leave_channel(&mut self, id: ClientId, name: &str) -> bool {
        if let Some(client) = self.clients.get_mut(&id) {
            client.channels.remove(name);
        }
        let Some(channel) = self.channels.get_mut(name) else {
            return false;
        };
        channel.remove_member(id);
        if channel.members.is_empty() {
            self.channels.remove(name);
            return true;
        }
        false
    }
}
