//! IRC numeric response codes, RFC 1459 subset.
//!
//! Only the numerics this server actually emits are listed; the
//! formatted reply bodies live in [`crate::reply`].

#![allow(non_camel_case_types)]

use std::fmt;

/// A numeric response code.
///
/// Codes 001-399 are command replies, 400-599 error replies. The
/// discriminant is the wire code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Response {
    /// 001 - Welcome to the IRC network
    RPL_WELCOME = 1,
    /// 002 - Your host is running version
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 004 - Server info (name, version, user modes, channel modes)
    RPL_MYINFO = 4,
    /// 315 - End of WHO list
    RPL_ENDOFWHO = 315,
    /// 321 - LIST header
    RPL_LISTSTART = 321,
    /// 322 - LIST entry
    RPL_LIST = 322,
    /// 323 - End of LIST
    RPL_LISTEND = 323,
    /// 331 - No topic is set
    RPL_NOTOPIC = 331,
    /// 332 - Channel topic
    RPL_TOPIC = 332,
    /// 341 - Invite confirmation to the issuer
    RPL_INVITING = 341,
    /// 352 - WHO list entry
    RPL_WHOREPLY = 352,
    /// 353 - NAMES list entry
    RPL_NAMREPLY = 353,
    /// 366 - End of NAMES list
    RPL_ENDOFNAMES = 366,
    /// 372 - MOTD line
    RPL_MOTD = 372,
    /// 375 - MOTD header
    RPL_MOTDSTART = 375,
    /// 376 - End of MOTD
    RPL_ENDOFMOTD = 376,

    /// 401 - No such nick/channel
    ERR_NOSUCHNICK = 401,
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL = 403,
    /// 411 - No recipient given
    ERR_NORECIPIENT = 411,
    /// 421 - Unknown command
    ERR_UNKNOWNCOMMAND = 421,
    /// 431 - No nickname given
    ERR_NONICKNAMEGIVEN = 431,
    /// 433 - Nickname already in use
    ERR_NICKNAMEINUSE = 433,
    /// 441 - Target is not on that channel
    ERR_USERNOTINCHANNEL = 441,
    /// 442 - Issuer is not on that channel
    ERR_NOTONCHANNEL = 442,
    /// 443 - Target is already on that channel
    ERR_USERONCHANNEL = 443,
    /// 451 - Session not registered
    ERR_NOTREGISTERED = 451,
    /// 461 - Not enough parameters
    ERR_NEEDMOREPARAMS = 461,
    /// 462 - Already registered
    ERR_ALREADYREGISTRED = 462,
    /// 464 - Password incorrect
    ERR_PASSWDMISMATCH = 464,
    /// 471 - Channel is full (+l)
    ERR_CHANNELISFULL = 471,
    /// 473 - Channel is invite-only (+i)
    ERR_INVITEONLYCHAN = 473,
    /// 475 - Bad channel key (+k)
    ERR_BADCHANNELKEY = 475,
    /// 482 - Channel operator privileges needed
    ERR_CHANOPRIVSNEEDED = 482,
}

impl Response {
    /// The numeric wire code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// True for the 400-599 error range.
    pub fn is_error(self) -> bool {
        (400..600).contains(&self.code())
    }
}

/// Numerics serialise as exactly three digits.
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}
