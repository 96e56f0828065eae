//! Command dispatch.
//!
//! One inbound line maps to at most one handler invocation. The table is
//! keyed by the literal (upper-case) command name; `CAP` is ignored so
//! capability-negotiating clients can connect, and anything else unknown
//! earns a 421. Commands marked `auth_required` are rejected with 451
//! until the session is registered.

mod channel;
mod messaging;
mod ping;
mod queries;
mod registration;

use std::collections::HashMap;
use std::sync::LazyLock;

use ircserv_proto::line;

use crate::error::{HandlerError, HandlerResult};
use crate::server::Server;
use crate::state::ClientId;

type HandlerFn = fn(&mut Server, ClientId, &[String]) -> HandlerResult;

struct CommandEntry {
    auth_required: bool,
    exec: HandlerFn,
}

impl CommandEntry {
    const fn new(auth_required: bool, exec: HandlerFn) -> Self {
        Self {
            auth_required,
            exec,
        }
    }
}

static COMMANDS: LazyLock<HashMap<&'static str, CommandEntry>> = LazyLock::new(|| {
    HashMap::from([
        ("PASS", CommandEntry::new(false, registration::pass)),
        ("NICK", CommandEntry::new(false, registration::nick)),
        ("USER", CommandEntry::new(false, registration::user)),
        ("QUIT", CommandEntry::new(false, registration::quit)),
        ("PING", CommandEntry::new(true, ping::ping)),
        ("PONG", CommandEntry::new(true, ping::pong)),
        ("JOIN", CommandEntry::new(true, channel::join)),
        ("PART", CommandEntry::new(true, channel::part)),
        ("MODE", CommandEntry::new(true, channel::mode)),
        ("KICK", CommandEntry::new(true, channel::kick)),
        ("INVITE", CommandEntry::new(true, channel::invite)),
        ("TOPIC", CommandEntry::new(true, channel::topic)),
        ("PRIVMSG", CommandEntry::new(true, messaging::privmsg)),
        ("NOTICE", CommandEntry::new(true, messaging::notice)),
        ("WHO", CommandEntry::new(true, queries::who)),
        ("LIST", CommandEntry::new(true, queries::list)),
    ])
});

/// Route one complete inbound line. Blank lines are dropped.
pub fn dispatch(server: &mut Server, id: ClientId, text: &str) {
    let Some((name, args)) = line::tokenize(text) else {
        return;
    };
    let nick = server
        .state
        .clients
        .get(&id)
        .map(|c| c.display_nick().to_string())
        .unwrap_or_else(|| "*".to_string());

    let Some(entry) = COMMANDS.get(name.as_str()) else {
        if name != "CAP" {
            let err = HandlerError::UnknownCommand(name);
            let body = err.to_reply(&nick);
            server.reply(id, &body);
        }
        return;
    };

    let registered = server
        .state
        .clients
        .get(&id)
        .map_or(false, |c| c.is_registered());
    if entry.auth_required && !registered {
        let body = HandlerError::NotRegistered.to_reply(&nick);
        server.reply(id, &body);
        return;
    }

    if let Err(err) = (entry.exec)(server, id, &args) {
        let body = err.to_reply(&nick);
        server.reply(id, &body);
    }
}
