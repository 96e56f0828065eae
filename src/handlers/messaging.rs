//! PRIVMSG and NOTICE routing.
//!
//! The two verbs share one relay path; NOTICE differs only in never
//! producing an automatic error reply.

use ircserv_proto::{line, message};

use crate::error::{HandlerError, HandlerResult};
use crate::server::Server;
use crate::state::ClientId;

#[derive(Clone, Copy)]
enum Flavor {
    Privmsg,
    Notice,
}

pub fn privmsg(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    relay(server, id, args, Flavor::Privmsg)
}

pub fn notice(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    relay(server, id, args, Flavor::Notice)
}

fn relay(server: &mut Server, id: ClientId, args: &[String], flavor: Flavor) -> HandlerResult {
    let silent = matches!(flavor, Flavor::Notice);
    if args.is_empty() {
        return if silent {
            Ok(())
        } else {
            Err(HandlerError::NoRecipient("PRIVMSG"))
        };
    }
    if args.len() < 2 {
        return if silent {
            Ok(())
        } else {
            Err(HandlerError::NeedMoreParams("PRIVMSG"))
        };
    }

    let target = args[0].clone();
    let text = line::rejoin(args, 1);

    let Some(sender) = server.state.clients.get(&id) else {
        return Ok(());
    };
    let prefix = sender.prefix();
    let on_target_channel = sender.channels.contains(&target);

    let wire = match flavor {
        Flavor::Privmsg => message::privmsg(&prefix, &target, &text),
        Flavor::Notice => message::notice(&prefix, &target, &text),
    };

    if target.starts_with('#') {
        if !on_target_channel {
            return if silent {
                Ok(())
            } else {
                Err(HandlerError::NotOnChannel(target))
            };
        }
        server.broadcast_channel(&target, &wire, Some(id));
        return Ok(());
    }

    match server.state.client_by_nick(&target).map(|c| c.id()) {
        Some(dest) => {
            server.send_line(dest, &wire);
            Ok(())
        }
        None if silent => Ok(()),
        None => Err(HandlerError::NoSuchNick(target)),
    }
}
