use cndr_client::{ClientError, ConnectionState, HandshakeConfig, HandshakeInitiator, Role};
use cndr_core::HOST_KEY_REQUIRED;

use crate::integration::init_tracing;
use crate::utils::{PeerAction, ScriptedPeer};

#[tokio::test]
async fn test_rejection_is_reported_and_not_retried() {
    init_tracing();

    let peer = ScriptedPeer::start(vec![PeerAction::missing_host_key(), PeerAction::success()])
        .await
        .expect("Failed to start peer");

    let config = HandshakeConfig::new(peer.url(), "ABCD", Role::Host);
    let mut initiator = HandshakeInitiator::open(config)
        .await
        .expect("Failed to open connection");

    let first = initiator.connect().await;
    assert!(matches!(&first, Err(ClientError::Rejected(m)) if m == HOST_KEY_REQUIRED));
    assert_eq!(
        initiator.state(),
        &ConnectionState::Failed(HOST_KEY_REQUIRED.to_string())
    );

    let second = initiator.connect().await;
    assert!(matches!(&second, Err(ClientError::Rejected(m)) if m == HOST_KEY_REQUIRED));
    assert!(!initiator.is_connected());

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert_eq!(peer.received().await.len(), 1);
}

#[tokio::test]
async fn test_rejection_message_is_displayed_verbatim() {
    let err = ClientError::Rejected(HOST_KEY_REQUIRED.to_string());
    assert_eq!(err.to_string(), "Host key is required for host role");
}
