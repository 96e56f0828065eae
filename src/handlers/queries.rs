//! Read-only queries: WHO and LIST.

use ircserv_proto::reply;

use crate::error::HandlerResult;
use crate::server::Server;
use crate::state::ClientId;

pub fn who(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    let Some(nick) = server.state.clients.get(&id).map(|c| c.nick.clone()) else {
        return Ok(());
    };
    let server_name = server.server_name();

    let mut mask = "*".to_string();
    let mut rows = Vec::new();
    match args.first() {
        None => {
            for client in server.state.clients.values().filter(|c| c.is_registered()) {
                rows.push(reply::whoreply(
                    &nick,
                    "*",
                    &client.user,
                    client.host(),
                    server_name,
                    &client.nick,
                    &client.realname,
                ));
            }
        }
        Some(arg) if arg.starts_with('#') => {
            mask = arg.clone();
            if let Some(chan) = server.state.channels.get(arg) {
                for member in &chan.members {
                    if let Some(client) = server.state.clients.get(member) {
                        rows.push(reply::whoreply(
                            &nick,
                            arg,
                            &client.user,
                            client.host(),
                            server_name,
                            &client.nick,
                            &client.realname,
                        ));
                    }
                }
            }
        }
        Some(_) => {}
    }

    for row in rows {
        server.reply(id, &row);
    }
    server.reply(id, &reply::endofwho(&nick, &mask));
    Ok(())
}

pub fn list(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    let Some(nick) = server.state.clients.get(&id).map(|c| c.nick.clone()) else {
        return Ok(());
    };

    let filter: Option<Vec<&str>> = args.first().map(|arg| arg.split(',').collect());

    let mut rows = vec![reply::liststart(&nick)];
    for (name, chan) in &server.state.channels {
        let wanted = filter
            .as_ref()
            .map_or(true, |names| names.iter().any(|n| *n == name.as_str()));
        if wanted {
            rows.push(reply::list(&nick, name, chan.members.len(), "No topic is set"));
        }
    }
    rows.push(reply::listend(&nick));

    for row in rows {
        server.reply(id, &row);
    }
    Ok(())
}
