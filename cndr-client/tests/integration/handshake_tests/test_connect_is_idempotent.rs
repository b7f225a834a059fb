use cndr_client::{ConnectionState, HandshakeConfig, HandshakeInitiator, Role};
use serde_json::json;

use crate::integration::init_tracing;
use crate::utils::{PeerAction, ScriptedPeer};

#[tokio::test]
async fn test_second_connect_sends_nothing() {
    init_tracing();

    let peer = ScriptedPeer::start(vec![PeerAction::success(), PeerAction::success()])
        .await
        .expect("Failed to start peer");

    let config = HandshakeConfig::new(peer.url(), "ABCD", Role::Audience);
    let mut initiator = HandshakeInitiator::open(config)
        .await
        .expect("Failed to open connection");
    assert_eq!(initiator.state(), &ConnectionState::Disconnected);

    initiator.connect().await.expect("Handshake failed");
    assert_eq!(initiator.state(), &ConnectionState::Connected);

    initiator.connect().await.expect("Second connect failed");
    assert_eq!(initiator.state(), &ConnectionState::Connected);

    // give a stray frame time to arrive before counting
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert_eq!(peer.received().await.len(), 1);
}

#[tokio::test]
async fn test_request_carries_configuration() {
    init_tracing();

    let peer = ScriptedPeer::start(vec![PeerAction::success()])
        .await
        .expect("Failed to start peer");

    let config = HandshakeConfig::new(peer.url(), "ROOM42", Role::Host)
        .with_room_password("pw")
        .with_host_key("secret");
    HandshakeInitiator::new(config)
        .await
        .expect("Handshake failed");

    let received = peer.received().await;
    assert_eq!(received.len(), 1);

    let value: serde_json::Value = serde_json::from_str(&received[0]).unwrap();
    assert_eq!(
        value,
        json!({
            "event": "handshake",
            "data": {
                "roomCode": "ROOM42",
                "role": "host",
                "roomPassword": "pw",
                "hostKey": "secret"
            }
        })
    );
}

#[tokio::test]
async fn test_undecodable_frames_are_skipped() {
    init_tracing();

    let peer = ScriptedPeer::start(vec![PeerAction::Reply(vec![
        "garbage".to_string(),
        r#"{"event":"chat","data":{}}"#.to_string(),
        r#"{"event":"handshake","data":{"status":"success"}}"#.to_string(),
    ])])
    .await
    .expect("Failed to start peer");

    let config = HandshakeConfig::new(peer.url(), "ABCD", Role::Client);
    let initiator = HandshakeInitiator::new(config)
        .await
        .expect("Handshake failed");

    assert!(initiator.is_connected());
}
