//! Integration tests for channel admission control: +k, +l, +i.

mod common;

use common::{TestClient, TestServer};

#[test]
fn key_gates_join_until_the_right_key_is_given() {
    let server = TestServer::spawn(17841).expect("failed to spawn test server");
    let mut alice = TestClient::connect(&server.address(), "alice").expect("connect failed");
    let mut carol = TestClient::connect(&server.address(), "carol").expect("connect failed");
    alice.register().expect("alice registration failed");
    carol.register().expect("carol registration failed");

    alice.send_raw("JOIN #dev").unwrap();
    alice.recv_until(|line| line.contains(" 366 ")).unwrap();
    alice.send_raw("MODE #dev +k s3cret").unwrap();
    alice
        .recv_until(|line| line == ":alice!alice@127.0.0.1 MODE #dev +k s3cret")
        .expect("no +k broadcast");

    carol.send_raw("JOIN #dev").unwrap();
    carol
        .recv_until(|line| line == ":ircserv 475 carol #dev :Cannot join channel (+k)")
        .expect("no 475 for missing key");

    carol.send_raw("JOIN #dev wrong").unwrap();
    carol
        .recv_until(|line| line == ":ircserv 475 carol #dev :Cannot join channel (+k)")
        .expect("no 475 for wrong key");

    carol.send_raw("JOIN #dev s3cret").unwrap();
    let lines = carol.recv_until(|line| line.contains(" 366 ")).unwrap();
    assert_eq!(
        lines,
        vec![
            ":carol!carol@127.0.0.1 JOIN #dev".to_string(),
            ":ircserv 331 carol #dev :No topic is set".to_string(),
            ":ircserv 353 carol #dev :@alice carol ".to_string(),
            ":ircserv 366 carol #dev :End of /NAMES list".to_string(),
        ]
    );
}

#[test]
fn clearing_the_key_reopens_the_channel() {
    let server = TestServer::spawn(17842).expect("failed to spawn test server");
    let mut alice = TestClient::connect(&server.address(), "alice").expect("connect failed");
    let mut carol = TestClient::connect(&server.address(), "carol").expect("connect failed");
    alice.register().expect("alice registration failed");
    carol.register().expect("carol registration failed");

    alice.send_raw("JOIN #dev sesame").unwrap();
    alice.recv_until(|line| line.contains(" 366 ")).unwrap();

    // The creating JOIN planted its key.
    carol.send_raw("JOIN #dev").unwrap();
    carol
        .recv_until(|line| line == ":ircserv 475 carol #dev :Cannot join channel (+k)")
        .expect("creation key not enforced");

    alice.send_raw("MODE #dev -k").unwrap();
    alice
        .recv_until(|line| line == ":alice!alice@127.0.0.1 MODE #dev -k")
        .expect("no -k broadcast");

    carol.send_raw("JOIN #dev").unwrap();
    carol
        .recv_until(|line| line.contains(" 366 "))
        .expect("join still gated after -k");
}

#[test]
fn limit_gates_join_and_zero_means_unlimited() {
    let server = TestServer::spawn(17843).expect("failed to spawn test server");
    let mut alice = TestClient::connect(&server.address(), "alice").expect("connect failed");
    let mut bob = TestClient::connect(&server.address(), "bob").expect("connect failed");
    alice.register().expect("alice registration failed");
    bob.register().expect("bob registration failed");

    alice.send_raw("JOIN #dev").unwrap();
    alice.recv_until(|line| line.contains(" 366 ")).unwrap();
    alice.send_raw("MODE #dev +l 1").unwrap();
    alice
        .recv_until(|line| line == ":alice!alice@127.0.0.1 MODE #dev +l 1")
        .expect("no +l broadcast");

    bob.send_raw("JOIN #dev").unwrap();
    bob.recv_until(|line| line == ":ircserv 471 bob #dev :Cannot join channel (+l)")
        .expect("no 471 at limit");

    alice.send_raw("MODE #dev -l").unwrap();
    alice
        .recv_until(|line| line == ":alice!alice@127.0.0.1 MODE #dev -l")
        .expect("no -l broadcast");

    bob.send_raw("JOIN #dev").unwrap();
    bob.recv_until(|line| line.contains(" 366 "))
        .expect("join still gated after -l");
}

#[test]
fn invite_only_toggle_round_trips() {
    let server = TestServer::spawn(17844).expect("failed to spawn test server");
    let mut alice = TestClient::connect(&server.address(), "alice").expect("connect failed");
    let mut carol = TestClient::connect(&server.address(), "carol").expect("connect failed");
    alice.register().expect("alice registration failed");
    carol.register().expect("carol registration failed");

    alice.send_raw("JOIN #dev").unwrap();
    alice.recv_until(|line| line.contains(" 366 ")).unwrap();

    alice.send_raw("MODE #dev +i").unwrap();
    alice.recv_until(|line| line.contains("MODE #dev +i")).unwrap();
    carol.send_raw("JOIN #dev").unwrap();
    carol
        .recv_until(|line| line == ":ircserv 473 carol #dev :Cannot join channel (+i)")
        .expect("no 473 under +i");

    alice.send_raw("MODE #dev -i").unwrap();
    alice.recv_until(|line| line.contains("MODE #dev -i")).unwrap();
    carol.send_raw("JOIN #dev").unwrap();
    carol
        .recv_until(|line| line.contains(" 366 "))
        .expect("join still gated after -i");
}

#[test]
fn mode_changes_require_privilege_and_an_existing_channel() {
    let server = TestServer::spawn(17845).expect("failed to spawn test server");
    let mut alice = TestClient::connect(&server.address(), "alice").expect("connect failed");
    let mut bob = TestClient::connect(&server.address(), "bob").expect("connect failed");
    alice.register().expect("alice registration failed");
    bob.register().expect("bob registration failed");

    alice.send_raw("JOIN #dev").unwrap();
    alice.recv_until(|line| line.contains(" 366 ")).unwrap();
    bob.send_raw("JOIN #dev").unwrap();
    bob.recv_until(|line| line.contains(" 366 ")).unwrap();

    bob.send_raw("MODE #dev +i").unwrap();
    bob.recv_until(|line| line == ":ircserv 482 bob #dev :You're not a channel operator")
        .expect("no 482 for unprivileged MODE");

    bob.send_raw("MODE #ghost +i").unwrap();
    bob.recv_until(|line| line == ":ircserv 403 bob #ghost :No such channel")
        .expect("no 403 for unknown channel");
}

#[test]
fn sign_applies_only_to_the_next_letter() {
    let server = TestServer::spawn(17846).expect("failed to spawn test server");
    let mut alice = TestClient::connect(&server.address(), "alice").expect("connect failed");
    let mut carol = TestClient::connect(&server.address(), "carol").expect("connect failed");
    alice.register().expect("alice registration failed");
    carol.register().expect("carol registration failed");

    alice.send_raw("JOIN #dev").unwrap();
    alice.recv_until(|line| line.contains(" 366 ")).unwrap();

    // In "+it" only 'i' follows the '+': 't' is scanned as unset.
    alice.send_raw("MODE #dev +it").unwrap();
    let lines = alice
        .recv_until(|line| line.ends_with("MODE #dev -t"))
        .expect("no -t broadcast");
    assert!(lines.contains(&":alice!alice@127.0.0.1 MODE #dev +i".to_string()));

    carol.send_raw("JOIN #dev").unwrap();
    carol
        .recv_until(|line| line == ":ircserv 473 carol #dev :Cannot join channel (+i)")
        .expect("+i did not take effect");
}
