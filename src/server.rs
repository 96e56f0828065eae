//! The reactor: listening socket, readiness loop, and line routing.
//!
//! Strictly single-threaded: every handler runs to completion on this
//! thread between readiness waits, so the client/channel graph needs no
//! locking and sockets are only ever touched from here.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use anyhow::Context as _;
use mio::net::{TcpListener, TcpStream};
use mio::{Events, Interest, Poll, Token};
use tracing::{error, info};

use ircserv_proto::message;

use crate::config::Config;
use crate::handlers;
use crate::network::{Connection, ReadOutcome};
use crate::signals;
use crate::state::{Client, ClientId, ServerState};
use crate::util;

/// Compile-time server identity; the prefix on every numeric reply.
pub const DEFAULT_SERVER_NAME: &str = "ircserv";

/// Version string advertised in 002 and 004.
pub const VERSION: &str = "0.1";

/// MOTD content lines, one 372 each.
pub(crate) const MOTD: &[&str] = &[
    "Welcome to our IRC server!",
    "",
    "Channels are created on first JOIN; their founder",
    "keeps the keys. Be kind to your operators.",
];

const LISTENER: Token = Token(0);

pub struct Server {
    password: String,
    start_time: String,
    poll: Poll,
    listener: TcpListener,
    next_token: usize,
    conns: BTreeMap<ClientId, Connection>,
    pub state: ServerState,
    /// Clients whose sockets failed mid-broadcast; removed once the
    /// current batch of events has been serviced.
    dead: Vec<ClientId>,
}

impl Server {
    /// Bind the IPv6 wildcard listener (v4-mapped peers accepted) and
    /// prepare the poll set.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), config.port);
        let mut listener = TcpListener::bind(addr)
            .with_context(|| format!("can't bind socket on [::]:{}", config.port))?;
        let poll = Poll::new().context("can't create poll instance")?;
        poll.registry()
            .register(&mut listener, LISTENER, Interest::READABLE)
            .context("can't watch listening socket")?;

        info!("Starting {} on port {}", DEFAULT_SERVER_NAME, config.port);

        Ok(Self {
            password: config.password,
            start_time: util::start_time_string(),
            poll,
            listener,
            next_token: LISTENER.0 + 1,
            conns: BTreeMap::new(),
            state: ServerState::default(),
            dead: Vec::new(),
        })
    }

    pub fn server_name(&self) -> &'static str {
        DEFAULT_SERVER_NAME
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// Run the readiness loop until shutdown is requested.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut events = Events::with_capacity(128);

        info!("Waiting for connections ...");
        info!("Press Ctrl + \\ for debug mode.");
        info!("Press Ctrl + C to close the server.");

        while !signals::shutdown_requested() {
            if let Err(err) = self.poll.poll(&mut events, None) {
                if err.kind() == ErrorKind::Interrupted {
                    continue;
                }
                return Err(err).context("can't look for socket activity");
            }

            for event in events.iter() {
                match event.token() {
                    LISTENER => self.accept_pending(),
                    token => self.service_client(ClientId::from(token)),
                }
            }
            self.reap_dead();
        }

        info!("Shutdown requested. Goodbye!");
        Ok(())
    }

    /// Accept until the listener would block, one client per socket.
    fn accept_pending(&mut self) {
        loop {
            match self.listener.accept() {
                Ok((stream, addr)) => self.add_client(stream, addr),
                Err(err) if err.kind() == ErrorKind::WouldBlock => break,
                Err(err) => {
                    error!(error = %err, "failed to accept connection");
                    break;
                }
            }
        }
    }

    fn add_client(&mut self, mut stream: TcpStream, addr: SocketAddr) {
        let token = Token(self.next_token);
        self.next_token += 1;
        if let Err(err) = self
            .poll
            .registry()
            .register(&mut stream, token, Interest::READABLE)
        {
            error!(error = %err, "can't watch new connection");
            return;
        }

        let id = ClientId::from(token);
        let host = util::printable_host(&addr);
        if signals::debug_enabled() {
            info!(fd = id.0, ip = %addr.ip(), port = addr.port(), "new connection");
        }
        self.state.clients.insert(id, Client::new(id, host, addr.port()));
        self.conns.insert(id, Connection::new(stream));
    }

    /// Drain one client's readable socket, feeding every complete line to
    /// the dispatcher. The client can disappear mid-batch (QUIT, hard
    /// error); remaining lines are then consumed by discard.
    fn service_client(&mut self, id: ClientId) {
        loop {
            let outcome = match self.conns.get_mut(&id) {
                Some(conn) => conn.read_chunk(),
                None => return,
            };
            match outcome {
                ReadOutcome::Closed => {
                    self.remove_client(id);
                    return;
                }
                ReadOutcome::WouldBlock => return,
                ReadOutcome::Lines(lines) => {
                    for line in lines {
                        if !self.conns.contains_key(&id) {
                            return;
                        }
                        if signals::debug_enabled() {
                            info!(fd = id.0, line = %line, "recv");
                        }
                        handlers::dispatch(self, id, &line);
                    }
                }
            }
        }
    }

    /// Synchronous best-effort send of one line to one client.
    pub fn send_line(&mut self, id: ClientId, text: &str) {
        if signals::debug_enabled() {
            info!(fd = id.0, line = %text, "send");
        }
        if let Some(conn) = self.conns.get_mut(&id) {
            if let Err(err) = conn.send_line(text) {
                error!(fd = id.0, error = %err, "send failed; dropping client");
                self.dead.push(id);
            }
        }
    }

    /// Send a numeric reply body, prefixed with the server name.
    pub fn reply(&mut self, id: ClientId, body: &str) {
        let text = format!(":{} {}", DEFAULT_SERVER_NAME, body);
        self.send_line(id, &text);
    }

    /// Send one line to every member of a channel, optionally excluding
    /// one client.
    pub fn broadcast_channel(&mut self, channel: &str, text: &str, exclude: Option<ClientId>) {
        let members: Vec<ClientId> = match self.state.channels.get(channel) {
            Some(chan) => chan.members.clone(),
            None => return,
        };
        for member in members {
            if Some(member) == exclude {
                continue;
            }
            self.send_line(member, text);
        }
    }

    /// Broadcast a server-prefixed numeric to a whole channel.
    pub fn broadcast_reply(&mut self, channel: &str, body: &str) {
        let text = format!(":{} {}", DEFAULT_SERVER_NAME, body);
        self.broadcast_channel(channel, &text, None);
    }

    /// Remove a client from one channel: PART broadcast (delivered to the
    /// departing member too), symmetric registry update, admin
    /// reassignment, destruction of an emptied channel.
    pub fn remove_from_channel(&mut self, channel: &str, id: ClientId, reason: &str) {
        let Some(prefix) = self.state.clients.get(&id).map(Client::prefix) else {
            return;
        };
        if self.state.channels.get(channel).map_or(true, |c| !c.is_member(id)) {
            return;
        }
        self.broadcast_channel(channel, &message::part(&prefix, channel, reason), None);
        self.state.leave_channel(id, channel);
    }

    /// Tear down a client entirely: a PART per joined channel, then
    /// socket deregistration and close.
    pub fn remove_client(&mut self, id: ClientId) {
        let joined: Vec<String> = self
            .state
            .clients
            .get(&id)
            .map(|c| c.channels.iter().cloned().collect())
            .unwrap_or_default();
        for channel in joined {
            self.remove_from_channel(&channel, id, "");
        }

        if let Some(mut conn) = self.conns.remove(&id) {
            let _ = self.poll.registry().deregister(conn.stream_mut());
        }
        if let Some(client) = self.state.clients.remove(&id) {
            if signals::debug_enabled() {
                info!(fd = id.0, ip = %client.host(), port = client.port(), "closed connection");
            }
        }
    }

    fn reap_dead(&mut self) {
        while let Some(id) = self.dead.pop() {
            self.remove_client(id);
        }
    }
}
