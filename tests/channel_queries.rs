//! Integration tests for WHO and LIST.

mod common;

use common::{TestClient, TestServer};

#[test]
fn who_without_argument_lists_registered_clients() {
    let server = TestServer::spawn(17881).expect("failed to spawn test server");
    let mut alice = TestClient::connect(&server.address(), "alice").expect("connect failed");
    let mut bob = TestClient::connect(&server.address(), "bob").expect("connect failed");
    alice.register().expect("alice registration failed");
    bob.register().expect("bob registration failed");

    // A half-registered session must not show up.
    let mut ghost = TestClient::connect(&server.address(), "ghost").expect("connect failed");
    ghost.send_raw("PASS letmein").unwrap();
    ghost.send_raw("NICK ghost").unwrap();

    alice.send_raw("WHO").unwrap();
    let lines = alice
        .recv_until(|line| line == ":ircserv 315 alice * :End of /WHO list")
        .expect("no end of WHO");

    assert!(lines.contains(&":ircserv 352 alice * alice 127.0.0.1 ircserv alice H :0 alice".to_string()));
    assert!(lines.contains(&":ircserv 352 alice * bob 127.0.0.1 ircserv bob H :0 bob".to_string()));
    assert!(!lines.iter().any(|l| l.contains(" ghost ")));
}

#[test]
fn who_with_channel_argument_lists_members_only() {
    let server = TestServer::spawn(17882).expect("failed to spawn test server");
    let mut alice = TestClient::connect(&server.address(), "alice").expect("connect failed");
    let mut bob = TestClient::connect(&server.address(), "bob").expect("connect failed");
    let mut carol = TestClient::connect(&server.address(), "carol").expect("connect failed");
    alice.register().expect("alice registration failed");
    bob.register().expect("bob registration failed");
    carol.register().expect("carol registration failed");

    alice.send_raw("JOIN #dev").unwrap();
    alice.recv_until(|line| line.contains(" 366 ")).unwrap();
    bob.send_raw("JOIN #dev").unwrap();
    bob.recv_until(|line| line.contains(" 366 ")).unwrap();

    carol.send_raw("WHO #dev").unwrap();
    let lines = carol
        .recv_until(|line| line == ":ircserv 315 carol #dev :End of /WHO list")
        .expect("no end of WHO");

    assert!(lines.contains(&":ircserv 352 carol #dev alice 127.0.0.1 ircserv alice H :0 alice".to_string()));
    assert!(lines.contains(&":ircserv 352 carol #dev bob 127.0.0.1 ircserv bob H :0 bob".to_string()));
    assert!(!lines.iter().any(|l| l.contains(" carol 127.0.0.1 ")));
}

#[test]
fn who_for_unknown_channel_closes_immediately() {
    let server = TestServer::spawn(17883).expect("failed to spawn test server");
    let mut alice = TestClient::connect(&server.address(), "alice").expect("connect failed");
    alice.register().expect("registration failed");

    alice.send_raw("WHO #nowhere").unwrap();
    let lines = alice
        .recv_until(|line| line == ":ircserv 315 alice #nowhere :End of /WHO list")
        .expect("no end of WHO");
    assert_eq!(lines.len(), 1);
}

#[test]
fn list_shows_every_channel_with_member_counts() {
    let server = TestServer::spawn(17884).expect("failed to spawn test server");
    let mut alice = TestClient::connect(&server.address(), "alice").expect("connect failed");
    let mut bob = TestClient::connect(&server.address(), "bob").expect("connect failed");
    alice.register().expect("alice registration failed");
    bob.register().expect("bob registration failed");

    alice.send_raw("JOIN #alpha").unwrap();
    alice.recv_until(|line| line.contains(" 366 ")).unwrap();
    bob.send_raw("JOIN #alpha").unwrap();
    bob.recv_until(|line| line.contains(" 366 ")).unwrap();
    bob.send_raw("JOIN #beta").unwrap();
    bob.recv_until(|line| line.contains(" 366 ")).unwrap();

    alice.send_raw("LIST").unwrap();
    let lines = alice
        .recv_until(|line| line == ":ircserv 323 alice :End of /LIST")
        .expect("no end of LIST");

    assert_eq!(
        lines.first().map(String::as_str),
        Some(":ircserv 321 alice Channel :Users Name")
    );
    assert!(lines.contains(&":ircserv 322 alice #alpha 2 :No topic is set".to_string()));
    assert!(lines.contains(&":ircserv 322 alice #beta 1 :No topic is set".to_string()));
}

#[test]
fn list_filter_narrows_to_named_channels() {
    let server = TestServer::spawn(17885).expect("failed to spawn test server");
    let mut alice = TestClient::connect(&server.address(), "alice").expect("connect failed");
    alice.register().expect("registration failed");

    for chan in ["#alpha", "#beta", "#gamma"] {
        alice.send_raw(&format!("JOIN {chan}")).unwrap();
        alice.recv_until(|line| line.contains(" 366 ")).unwrap();
    }

    alice.send_raw("LIST #alpha,#gamma").unwrap();
    let lines = alice
        .recv_until(|line| line == ":ircserv 323 alice :End of /LIST")
        .expect("no end of LIST");

    assert!(lines.contains(&":ircserv 322 alice #alpha 1 :No topic is set".to_string()));
    assert!(lines.contains(&":ircserv 322 alice #gamma 1 :No topic is set".to_string()));
    assert!(!lines.iter().any(|l| l.contains("#beta")));
}

#[test]
fn parted_channels_disappear_from_list() {
    let server = TestServer::spawn(17886).expect("failed to spawn test server");
    let mut alice = TestClient::connect(&server.address(), "alice").expect("connect failed");
    alice.register().expect("registration failed");

    alice.send_raw("JOIN #ephemeral").unwrap();
    alice.recv_until(|line| line.contains(" 366 ")).unwrap();
    alice.send_raw("PART #ephemeral").unwrap();
    alice.recv_until(|line| line.contains("PART #ephemeral")).unwrap();

    alice.send_raw("LIST").unwrap();
    let lines = alice
        .recv_until(|line| line == ":ircserv 323 alice :End of /LIST")
        .expect("no end of LIST");
    assert!(!lines.iter().any(|l| l.contains("#ephemeral")));
}
