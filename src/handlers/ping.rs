//! PING and PONG keep-alives.
//!
//! Both verbs answer the same way: a PONG carrying the peer's token
//! back, so either side of a ping exchange keeps the link warm.

use ircserv_proto::message;

use crate::error::{HandlerError, HandlerResult};
use crate::server::Server;
use crate::state::ClientId;

pub fn ping(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    pong_back(server, id, args, "PING")
}

pub fn pong(server: &mut Server, id: ClientId, args: &[String]) -> HandlerResult {
    pong_back(server, id, args, "PONG")
}

fn pong_back(
    server: &mut Server,
    id: ClientId,
    args: &[String],
    verb: &'static str,
) -> HandlerResult {
    let Some(token) = args.first() else {
        return Err(HandlerError::NeedMoreParams(verb));
    };
    let Some(prefix) = server.state.clients.get(&id).map(|c| c.prefix()) else {
        return Ok(());
    };
    server.send_line(id, &message::pong(&prefix, token));
    Ok(())
}
