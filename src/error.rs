//! Unified error handling for command processing.
//!
//! Handlers never write error lines themselves: they return a
//! [`HandlerError`] and the dispatcher renders it into the one numeric
//! reply it maps to. Silent protocol paths (NOTICE, bare MODE) simply
//! return `Ok`.

use ircserv_proto::reply;
use thiserror::Error;

/// Errors that can occur while handling one command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("not enough parameters for {0}")]
    NeedMoreParams(&'static str),

    #[error("no recipient for {0}")]
    NoRecipient(&'static str),

    #[error("not registered")]
    NotRegistered,

    #[error("already registered")]
    AlreadyRegistered,

    #[error("password mismatch")]
    PasswdMismatch,

    #[error("no nickname given")]
    NoNicknameGiven,

    #[error("nickname in use: {0}")]
    NicknameInUse(String),

    #[error("no such nick: {0}")]
    NoSuchNick(String),

    #[error("no such channel: {0}")]
    NoSuchChannel(String),

    #[error("not on channel {0}")]
    NotOnChannel(String),

    #[error("channel operator privileges needed on {0}")]
    ChanOpPrivsNeeded(String),

    #[error("user {target} is not on {channel}")]
    UserNotInChannel { target: String, channel: String },

    #[error("user {target} is already on {channel}")]
    UserOnChannel { target: String, channel: String },

    #[error("channel {0} is full")]
    ChannelIsFull(String),

    #[error("channel {0} is invite-only")]
    InviteOnlyChan(String),

    #[error("bad key for {0}")]
    BadChannelKey(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl HandlerError {
    /// Render the numeric reply body for this error, addressed to `nick`
    /// (`*` before registration). The server-name prefix is prepended by
    /// the sending session.
    pub fn to_reply(&self, nick: &str) -> String {
        match self {
            Self::NeedMoreParams(command) => reply::err_needmoreparams(nick, command),
            Self::NoRecipient(command) => reply::err_norecipient(nick, command),
            Self::NotRegistered => reply::err_notregistered(nick),
            Self::AlreadyRegistered => reply::err_alreadyregistered(nick),
            Self::PasswdMismatch => reply::err_passwdmismatch(nick),
            Self::NoNicknameGiven => reply::err_nonicknamegiven(nick),
            Self::NicknameInUse(wanted) => reply::err_nicknameinuse(nick, wanted),
            Self::NoSuchNick(target) => reply::err_nosuchnick(nick, target),
            Self::NoSuchChannel(channel) => reply::err_nosuchchannel(nick, channel),
            Self::NotOnChannel(channel) => reply::err_notonchannel(nick, channel),
            Self::ChanOpPrivsNeeded(channel) => reply::err_chanoprivsneeded(nick, channel),
            Self::UserNotInChannel { target, channel } => {
                reply::err_usernotinchannel(nick, target, channel)
            }
            Self::UserOnChannel { target, channel } => {
                reply::err_useronchannel(nick, target, channel)
            }
            Self::ChannelIsFull(channel) => reply::err_channelisfull(nick, channel),
            Self::InviteOnlyChan(channel) => reply::err_inviteonlychan(nick, channel),
            Self::BadChannelKey(channel) => reply::err_badchannelkey(nick, channel),
            Self::UnknownCommand(command) => reply::err_unknowncommand(nick, command),
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;
