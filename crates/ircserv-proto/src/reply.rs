//! Numeric reply bodies.
//!
//! Each constructor returns the body of one numeric reply — everything
//! after the `:<server_name> ` prefix, which the serving session
//! prepends. Texts are part of the wire contract and must not drift.

use crate::response::Response;

// === Registration burst ===

/// `001` welcome line opening the registration burst.
pub fn welcome(nick: &str, prefix: &str) -> String {
    format!(
        "{} {} :Welcome to the Internet Relay Network {}",
        Response::RPL_WELCOME,
        nick,
        prefix
    )
}

/// `002` host/version line.
pub fn yourhost(nick: &str, server: &str, version: &str) -> String {
    format!(
        "{} {} :Your host is {}, running version {}",
        Response::RPL_YOURHOST,
        nick,
        server,
        version
    )
}

/// `003` server creation time.
pub fn created(nick: &str, start_time: &str) -> String {
    format!(
        "{} {} :This server was created {}",
        Response::RPL_CREATED,
        nick,
        start_time
    )
}

/// `004` server name, version, and supported mode letters.
pub fn myinfo(nick: &str, server: &str, version: &str, user_modes: &str, chan_modes: &str) -> String {
    format!(
        "{} {} {} {} {} {}",
        Response::RPL_MYINFO,
        nick,
        server,
        version,
        user_modes,
        chan_modes
    )
}

/// `375` MOTD header.
pub fn motd_start(nick: &str, server: &str) -> String {
    format!(
        "{} {} :- {} Message of the day -",
        Response::RPL_MOTDSTART,
        nick,
        server
    )
}

/// `372` one MOTD content line.
pub fn motd_line(nick: &str, text: &str) -> String {
    format!("{} {} :- {}", Response::RPL_MOTD, nick, text)
}

/// `376` end of MOTD.
pub fn motd_end(nick: &str) -> String {
    format!("{} {} :End of MOTD command", Response::RPL_ENDOFMOTD, nick)
}

// === Channel replies ===

/// `331` no topic set.
pub fn notopic(nick: &str, channel: &str) -> String {
    format!("{} {} {} :No topic is set", Response::RPL_NOTOPIC, nick, channel)
}

/// `332` current topic.
pub fn topic(nick: &str, channel: &str, text: &str) -> String {
    format!("{} {} {} :{}", Response::RPL_TOPIC, nick, channel, text)
}

/// `341` invite confirmation sent back to the issuer.
pub fn inviting(nick: &str, target: &str, channel: &str) -> String {
    format!("{} {} {} {}", Response::RPL_INVITING, nick, target, channel)
}

/// `353` names list. `names` is pre-joined, admin `@`-prefixed, and
/// carries its historical trailing space.
pub fn namreply(nick: &str, channel: &str, names: &str) -> String {
    format!("{} {} {} :{}", Response::RPL_NAMREPLY, nick, channel, names)
}

/// `366` end of names.
pub fn endofnames(nick: &str, channel: &str) -> String {
    format!(
        "{} {} {} :End of /NAMES list",
        Response::RPL_ENDOFNAMES,
        nick,
        channel
    )
}

// === WHO / LIST ===

/// `352` one WHO row.
pub fn whoreply(
    nick: &str,
    channel: &str,
    user: &str,
    host: &str,
    server: &str,
    target_nick: &str,
    realname: &str,
) -> String {
    format!(
        "{} {} {} {} {} {} {} H :0 {}",
        Response::RPL_WHOREPLY,
        nick,
        channel,
        user,
        host,
        server,
        target_nick,
        realname
    )
}

/// `315` end of WHO.
pub fn endofwho(nick: &str, mask: &str) -> String {
    format!("{} {} {} :End of /WHO list", Response::RPL_ENDOFWHO, nick, mask)
}

/// `321` LIST header.
pub fn liststart(nick: &str) -> String {
    format!("{} {} Channel :Users Name", Response::RPL_LISTSTART, nick)
}

/// `322` one LIST row.
pub fn list(nick: &str, channel: &str, visible: usize, topic: &str) -> String {
    format!("{} {} {} {} :{}", Response::RPL_LIST, nick, channel, visible, topic)
}

/// `323` end of LIST.
pub fn listend(nick: &str) -> String {
    format!("{} {} :End of /LIST", Response::RPL_LISTEND, nick)
}

// === Error replies ===

/// `401`
pub fn err_nosuchnick(nick: &str, target: &str) -> String {
    format!(
        "{} {} {} :No such nick/channel",
        Response::ERR_NOSUCHNICK,
        nick,
        target
    )
}

/// `403`
pub fn err_nosuchchannel(nick: &str, channel: &str) -> String {
    format!(
        "{} {} {} :No such channel",
        Response::ERR_NOSUCHCHANNEL,
        nick,
        channel
    )
}

/// `411`
pub fn err_norecipient(nick: &str, command: &str) -> String {
    format!(
        "{} {} :No recipient given ({})",
        Response::ERR_NORECIPIENT,
        nick,
        command
    )
}

/// `421`
pub fn err_unknowncommand(nick: &str, command: &str) -> String {
    format!(
        "{} {} {} :Unknown command",
        Response::ERR_UNKNOWNCOMMAND,
        nick,
        command
    )
}

/// `431`
pub fn err_nonicknamegiven(nick: &str) -> String {
    format!("{} {} :No nickname given", Response::ERR_NONICKNAMEGIVEN, nick)
}

/// `433`
pub fn err_nicknameinuse(nick: &str, wanted: &str) -> String {
    format!(
        "{} {} {} :Nickname is already in use",
        Response::ERR_NICKNAMEINUSE,
        nick,
        wanted
    )
}

/// `441`
pub fn err_usernotinchannel(nick: &str, target: &str, channel: &str) -> String {
    format!(
        "{} {} {} {} :They aren't on that channel",
        Response::ERR_USERNOTINCHANNEL,
        nick,
        target,
        channel
    )
}

/// `442`
pub fn err_notonchannel(nick: &str, channel: &str) -> String {
    format!(
        "{} {} {} :You're not on that channel",
        Response::ERR_NOTONCHANNEL,
        nick,
        channel
    )
}

/// `443`
pub fn err_useronchannel(nick: &str, target: &str, channel: &str) -> String {
    format!(
        "{} {} {} {} :is already on channel",
        Response::ERR_USERONCHANNEL,
        nick,
        target,
        channel
    )
}

/// `451`
pub fn err_notregistered(nick: &str) -> String {
    format!("{} {} :You have not registered", Response::ERR_NOTREGISTERED, nick)
}

/// `461`
pub fn err_needmoreparams(nick: &str, command: &str) -> String {
    format!(
        "{} {} {} :Not enough parameters",
        Response::ERR_NEEDMOREPARAMS,
        nick,
        command
    )
}

/// `462`
pub fn err_alreadyregistered(nick: &str) -> String {
    format!(
        "{} {} :You may not reregister",
        Response::ERR_ALREADYREGISTRED,
        nick
    )
}

/// `464`
pub fn err_passwdmismatch(nick: &str) -> String {
    format!("{} {} :Password incorrect", Response::ERR_PASSWDMISMATCH, nick)
}

/// `471`
pub fn err_channelisfull(nick: &str, channel: &str) -> String {
    format!(
        "{} {} {} :Cannot join channel (+l)",
        Response::ERR_CHANNELISFULL,
        nick,
        channel
    )
}

/// `473`
pub fn err_inviteonlychan(nick: &str, channel: &str) -> String {
    format!(
        "{} {} {} :Cannot join channel (+i)",
        Response::ERR_INVITEONLYCHAN,
        nick,
        channel
    )
}

/// `475`
pub fn err_badchannelkey(nick: &str, channel: &str) -> String {
    format!(
        "{} {} {} :Cannot join channel (+k)",
        Response::ERR_BADCHANNELKEY,
        nick,
        channel
    )
}

/// `482`
pub fn err_chanoprivsneeded(nick: &str, channel: &str) -> String {
    format!(
        "{} {} {} :You're not a channel operator",
        Response::ERR_CHANOPRIVSNEEDED,
        nick,
        channel
    )
}
