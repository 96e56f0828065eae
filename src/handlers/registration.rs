//! Session establishment: PASS, NICK, USER, QUIT, and the welcome burst.

use ircserv_proto::{line, message, reply};

use crate::error::{HandlerError, HandlerResult};
use crate::server::{Server, MOTD, VERSION};
use crate::state::ClientId;

pub fn pass(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    let Some(client) = server.state.clients.get(&id) else {
        return Ok(());
    };
    if client.is_registered() {
        return Err(HandlerError::AlreadyRegistered);
    }
    if args.is_empty() {
        return Err(HandlerError::NeedMoreParams("PASS"));
    }

    // The password may arrive as a trailing parameter; tolerate the colon.
    let supplied = args[0].strip_prefix(':').unwrap_or(&args[0]);
    if supplied != server.password() {
        return Err(HandlerError::PasswdMismatch);
    }

    if let Some(client) = server.state.clients.get_mut(&id) {
        client.password_ok = true;
    }
    welcome(server, id);
    Ok(())
}

pub fn nick(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    let wanted = match args.first() {
        Some(arg) if !arg.is_empty() => arg.clone(),
        _ => return Err(HandlerError::NoNicknameGiven),
    };

    // Literal comparison, and the caller's own nick counts as taken.
    if server.state.nick_in_use(&wanted) {
        return Err(HandlerError::NicknameInUse(wanted));
    }

    if let Some(client) = server.state.clients.get_mut(&id) {
        client.nick = wanted;
    }
    welcome(server, id);
    Ok(())
}

pub fn user(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    let Some(client) = server.state.clients.get(&id) else {
        return Ok(());
    };
    if client.is_registered() {
        return Err(HandlerError::AlreadyRegistered);
    }
    if args.len() < 4 {
        return Err(HandlerError::NeedMoreParams("USER"));
    }

    let username = args[0].clone();
    let realname = args[3].strip_prefix(':').unwrap_or(&args[3]).to_string();
    if let Some(client) = server.state.clients.get_mut(&id) {
        client.user = username;
        client.realname = realname;
    }
    welcome(server, id);
    Ok(())
}

pub fn quit(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    let reason = if args.is_empty() {
        "Leaving...".to_string()
    } else {
        line::rejoin(args, 0)
    };

    if let Some(client) = server.state.clients.get(&id) {
        let prefix = client.prefix();
        server.send_line(id, &message::quit(&prefix, &reason));
    }
    server.remove_client(id);
    Ok(())
}

/// Send the 001..376 burst once the session is fully registered; no-op
/// otherwise. PASS, NICK and USER all funnel through here, so the burst
/// fires on whichever command completes registration.
pub(crate) fn welcome(server: &mut Server, id: ClientId) {
    let Some(client) = server.state.clients.get(&id) else {
        return;
    };
    if !client.is_registered() {
        return;
    }
    let nick = client.nick.clone();
    let prefix = client.prefix();
    let name = server.server_name();
    let start_time = server.start_time().to_string();

    server.reply(id, &reply::welcome(&nick, &prefix));
    server.reply(id, &reply::yourhost(&nick, name, VERSION));
    server.reply(id, &reply::created(&nick, &start_time));
    server.reply(id, &reply::myinfo(&nick, name, VERSION, "default", "iklot"));

    server.reply(id, &reply::motd_start(&nick, name));
    for text in MOTD {
        server.reply(id, &reply::motd_line(&nick, text));
    }
    server.reply(id, &reply::motd_end(&nick));
}
