use std::time::Duration;

use cndr_client::{ClientError, ConnectionState, HandshakeConfig, HandshakeInitiator, Role};

use crate::integration::init_tracing;
use crate::utils::{PeerAction, ScriptedPeer};

#[tokio::test]
async fn test_timeout_leaves_initiator_disconnected() {
    init_tracing();

    let peer = ScriptedPeer::start(vec![PeerAction::Silent])
        .await
        .expect("Failed to start peer");

    let limit = Duration::from_millis(200);
    let config =
        HandshakeConfig::new(peer.url(), "ABCD", Role::Client).with_response_timeout(limit);
    let mut initiator = HandshakeInitiator::open(config)
        .await
        .expect("Failed to open connection");

    let result = initiator.connect().await;
    assert!(matches!(result, Err(ClientError::Timeout(d)) if d == limit));
    assert_eq!(initiator.state(), &ConnectionState::Disconnected);

    // waiting again does not resend the request
    let again = initiator.connect().await;
    assert!(matches!(again, Err(ClientError::Timeout(_))));
    assert_eq!(peer.received().await.len(), 1);
}

#[tokio::test]
async fn test_close_before_response_leaves_initiator_disconnected() {
    init_tracing();

    let peer = ScriptedPeer::start(vec![PeerAction::Close])
        .await
        .expect("Failed to start peer");

    let config = HandshakeConfig::new(peer.url(), "ABCD", Role::Audience);
    let mut initiator = HandshakeInitiator::open(config)
        .await
        .expect("Failed to open connection");

    let result = initiator.connect().await;
    assert!(matches!(result, Err(ClientError::ConnectionClosed)));
    assert_eq!(initiator.state(), &ConnectionState::Disconnected);
}
