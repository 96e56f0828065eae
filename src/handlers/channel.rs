//! Channel operations: JOIN, PART, KICK, INVITE, MODE, TOPIC.

use ircserv_proto::{line, message, reply};

use crate::error::{HandlerError, HandlerResult};
use crate::server::Server;
use crate::state::{Channel, ClientId};

pub fn join(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    if args.is_empty() {
        return Err(HandlerError::NeedMoreParams("JOIN"));
    }
    let name = args[0].clone();
    let key = args.get(1).cloned().unwrap_or_default();
    if !name.starts_with('#') {
        return Err(HandlerError::NoSuchChannel(name));
    }

    if !server.state.channels.contains_key(&name) {
        // A fresh channel is born with the supplied key and cannot fail
        // any of the admission checks below, so no empty channel is ever
        // left behind by a rejected create.
        server
            .state
            .channels
            .insert(name.clone(), Channel::new(&name, &key, id));
        join_channel(server, id, &name);
        return Ok(());
    }

    {
        let chan = &server.state.channels[&name];
        if chan.invite_only {
            return Err(HandlerError::InviteOnlyChan(name));
        }
        if chan.is_member(id) {
            return Ok(());
        }
        if chan.at_limit() {
            return Err(HandlerError::ChannelIsFull(name));
        }
        if !chan.key.is_empty() && chan.key != key {
            return Err(HandlerError::BadChannelKey(name));
        }
    }

    join_channel(server, id, &name);
    Ok(())
}

/// Shared join path used by JOIN and the INVITE auto-join: symmetric
/// membership insert (admin/operator establishment on a fresh channel),
/// the JOIN broadcast to every member, and the 331/353/366 block to the
/// joiner.
pub(crate) fn join_channel(server: &mut Server, id: ClientId, name: &str) {
    let Some((nick, prefix)) = server
        .state
        .clients
        .get(&id)
        .map(|c| (c.nick.clone(), c.prefix()))
    else {
        return;
    };
    if !server.state.channels.contains_key(name) {
        return;
    }

    server.state.join_channel(id, name);
    server.broadcast_channel(name, &message::join(&prefix, name), None);

    let names = match server.state.channels.get(name) {
        Some(chan) => server.state.channel_names(chan),
        None => return,
    };
    server.reply(id, &reply::notopic(&nick, name));
    server.reply(id, &reply::namreply(&nick, name, &names));
    server.reply(id, &reply::endofnames(&nick, name));
}

pub fn part(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    if args.is_empty() {
        return Err(HandlerError::NeedMoreParams("PART"));
    }
    let name = args[0].clone();
    let reason = line::rejoin(args, 1);

    let Some(chan) = server.state.channels.get(&name) else {
        return Err(HandlerError::NoSuchChannel(name));
    };
    if !chan.is_member(id) {
        return Err(HandlerError::NotOnChannel(name));
    }

    server.remove_from_channel(&name, id, &reason);
    Ok(())
}

pub fn kick(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    if args.len() < 2 {
        return Err(HandlerError::NeedMoreParams("KICK"));
    }
    let name = args[0].clone();
    let target_nick = args[1].clone();
    let reason = if args.len() >= 3 {
        line::rejoin(args, 2)
    } else {
        "No reason specified.".to_string()
    };

    let issuer_on_channel = server
        .state
        .channels
        .get(&name)
        .map_or(false, |c| c.is_member(id));
    if !issuer_on_channel {
        return Err(HandlerError::NotOnChannel(name));
    }
    if !server.state.channels[&name].can_moderate(id) {
        return Err(HandlerError::ChanOpPrivsNeeded(name));
    }

    let target = server
        .state
        .client_by_nick(&target_nick)
        .map(|c| c.id())
        .filter(|t| server.state.channels[&name].is_member(*t));
    let Some(target) = target else {
        return Err(HandlerError::UserNotInChannel {
            target: target_nick,
            channel: name,
        });
    };

    let Some(prefix) = server.state.clients.get(&id).map(|c| c.prefix()) else {
        return Ok(());
    };
    server.broadcast_channel(&name, &message::kick(&prefix, &name, &target_nick, &reason), None);
    server.remove_from_channel(&name, target, "");
    Ok(())
}

pub fn invite(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    if args.len() < 2 {
        return Err(HandlerError::NeedMoreParams("INVITE"));
    }
    let target_nick = args[0].clone();
    let name = args[1].clone();

    let (issuer_on_channel, needs_privilege) = match server.state.channels.get(&name) {
        Some(chan) => (
            chan.is_member(id),
            chan.invite_only && !chan.can_moderate(id),
        ),
        None => (false, false),
    };
    if !issuer_on_channel {
        return Err(HandlerError::NotOnChannel(name));
    }
    if needs_privilege {
        return Err(HandlerError::ChanOpPrivsNeeded(name));
    }

    let Some(target) = server.state.client_by_nick(&target_nick).map(|c| c.id()) else {
        return Err(HandlerError::NoSuchNick(target_nick));
    };
    if server.state.channels[&name].is_member(target) {
        return Err(HandlerError::UserOnChannel {
            target: target_nick,
            channel: name,
        });
    }

    let Some((nick, prefix)) = server
        .state
        .clients
        .get(&id)
        .map(|c| (c.nick.clone(), c.prefix()))
    else {
        return Ok(());
    };
    server.reply(id, &reply::inviting(&nick, &target_nick, &name));
    server.send_line(target, &message::invite(&prefix, &target_nick, &name));

    // Invited clients join immediately; the invitation bypasses the
    // i/k/l admission checks.
    join_channel(server, target, &name);
    Ok(())
}

pub fn mode(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    if args.len() < 2 || args[0].is_empty() || args[1].is_empty() {
        return Ok(());
    }
    let name = args[0].clone();

    if !server.state.channels.contains_key(&name) {
        return Err(HandlerError::NoSuchChannel(name));
    }
    if !server.state.channels[&name].can_moderate(id) {
        return Err(HandlerError::ChanOpPrivsNeeded(name));
    }

    let Some((nick, prefix)) = server
        .state
        .clients
        .get(&id)
        .map(|c| (c.nick.clone(), c.prefix()))
    else {
        return Ok(());
    };

    // A letter is "active" iff the character directly before it is '+';
    // the sign does not persist across letters.
    let flags: Vec<char> = args[1].chars().collect();
    let mut param_at = 2usize;

    for (i, &flag) in flags.iter().enumerate() {
        let active = i > 0 && flags[i - 1] == '+';
        match flag {
            'i' => {
                if let Some(chan) = server.state.channels.get_mut(&name) {
                    chan.invite_only = active;
                }
                let change = if active { "+i" } else { "-i" };
                server.broadcast_channel(&name, &message::mode(&prefix, &name, change, ""), None);
            }
            't' => {
                if let Some(chan) = server.state.channels.get_mut(&name) {
                    chan.topic_restricted = active;
                }
                let change = if active { "+t" } else { "-t" };
                server.broadcast_channel(&name, &message::mode(&prefix, &name, change, ""), None);
            }
            'l' => {
                if active && param_at < args.len() {
                    let limit = args[param_at].parse().unwrap_or(0);
                    if let Some(chan) = server.state.channels.get_mut(&name) {
                        chan.user_limit = limit;
                    }
                    let param = args[param_at].clone();
                    server.broadcast_channel(&name, &message::mode(&prefix, &name, "+l", &param), None);
                    param_at += 1;
                } else {
                    if let Some(chan) = server.state.channels.get_mut(&name) {
                        chan.user_limit = 0;
                    }
                    server.broadcast_channel(&name, &message::mode(&prefix, &name, "-l", ""), None);
                }
            }
            'k' => {
                if active && param_at < args.len() {
                    let key = args[param_at].clone();
                    if let Some(chan) = server.state.channels.get_mut(&name) {
                        chan.key = key.clone();
                    }
                    server.broadcast_channel(&name, &message::mode(&prefix, &name, "+k", &key), None);
                    param_at += 1;
                } else {
                    if let Some(chan) = server.state.channels.get_mut(&name) {
                        chan.key.clear();
                    }
                    server.broadcast_channel(&name, &message::mode(&prefix, &name, "-k", ""), None);
                }
            }
            'o' => {
                if param_at >= args.len() {
                    continue;
                }
                let oper_nick = args[param_at].clone();
                let member = server
                    .state
                    .client_by_nick(&oper_nick)
                    .map(|c| c.id())
                    .filter(|m| server.state.channels[&name].is_member(*m));
                let Some(member) = member else {
                    // The one numeric the protocol sends to a whole
                    // channel; further mode letters are abandoned.
                    let body = reply::err_usernotinchannel(&nick, &oper_nick, &name);
                    server.broadcast_reply(&name, &body);
                    return Ok(());
                };
                if let Some(chan) = server.state.channels.get_mut(&name) {
                    if active {
                        chan.grant_operator(member);
                    } else {
                        chan.revoke_operator(member);
                    }
                }
                let change = if active { "+o" } else { "-o" };
                server.broadcast_channel(&name, &message::mode(&prefix, &name, change, &oper_nick), None);
                param_at += 1;
            }
            _ => {}
        }
    }
    Ok(())
}

pub fn topic(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    if args.is_empty() || args[0].is_empty() {
        return Err(HandlerError::NeedMoreParams("TOPIC"));
    }
    let name = args[0].clone();

    let Some(chan) = server.state.channels.get(&name) else {
        return Err(HandlerError::NoSuchChannel(name));
    };
    if !chan.is_member(id) {
        return Err(HandlerError::NotOnChannel(name));
    }

    let Some((nick, prefix)) = server
        .state
        .clients
        .get(&id)
        .map(|c| (c.nick.clone(), c.prefix()))
    else {
        return Ok(());
    };

    if args.len() == 1 {
        let current = server.state.channels[&name].topic.clone();
        if current.is_empty() {
            server.reply(id, &reply::notopic(&nick, &name));
        } else {
            server.reply(id, &reply::topic(&nick, &name, &current));
        }
        return Ok(());
    }

    let chan = &server.state.channels[&name];
    if chan.topic_restricted && !chan.can_moderate(id) {
        return Err(HandlerError::ChanOpPrivsNeeded(name));
    }

    let text = line::rejoin(args, 1);
    if let Some(chan) = server.state.channels.get_mut(&name) {
        chan.topic = text.clone();
    }
    server.broadcast_channel(&name, &message::topic(&prefix, &name, &text), None);
    Ok(())
}
