//! Peer-originated message lines.
//!
//! Unlike numeric replies these carry the *user's* prefix, not the
//! server name; the constructors take the prefix pre-serialised because
//! senders compute it once per handler invocation.

/// `JOIN` broadcast to a channel, including the joiner.
pub fn join(prefix: &str, channel: &str) -> String {
    format!(":{} JOIN {}", prefix, channel)
}

/// `PART` broadcast; the reason is omitted entirely when empty.
pub fn part(prefix: &str, channel: &str, reason: &str) -> String {
    if reason.is_empty() {
        format!(":{} PART {}", prefix, channel)
    } else {
        format!(":{} PART {} :{}", prefix, channel, reason)
    }
}

/// `KICK` broadcast.
pub fn kick(prefix: &str, channel: &str, target: &str, reason: &str) -> String {
    format!(":{} KICK {} {} :{}", prefix, channel, target, reason)
}

/// `MODE` broadcast; `param` is omitted when the change takes none.
pub fn mode(prefix: &str, channel: &str, change: &str, param: &str) -> String {
    if param.is_empty() {
        format!(":{} MODE {} {}", prefix, channel, change)
    } else {
        format!(":{} MODE {} {} {}", prefix, channel, change, param)
    }
}

/// `INVITE` line delivered to the invited client.
pub fn invite(prefix: &str, target: &str, channel: &str) -> String {
    format!(":{} INVITE {} {}", prefix, target, channel)
}

/// `PRIVMSG` to a channel or nickname.
pub fn privmsg(prefix: &str, target: &str, text: &str) -> String {
    format!(":{} PRIVMSG {} :{}", prefix, target, text)
}

/// `NOTICE` to a channel or nickname.
pub fn notice(prefix: &str, target: &str, text: &str) -> String {
    format!(":{} NOTICE {} :{}", prefix, target, text)
}

/// `TOPIC` broadcast after a topic change.
pub fn topic(prefix: &str, channel: &str, text: &str) -> String {
    format!(":{} TOPIC {} :{}", prefix, channel, text)
}

/// `QUIT` echoed to the departing client.
pub fn quit(prefix: &str, reason: &str) -> String {
    format!(":{} QUIT :{}", prefix, reason)
}

/// `PONG` answering a PING (or PONG) with the peer's token.
pub fn pong(prefix: &str, token: &str) -> String {
    format!(":{} PONG {}", prefix, token)
}
