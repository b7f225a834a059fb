use cndr_core::{
    ClientEvent, HOST_KEY_REQUIRED, HandshakeRequest, HandshakeResponse, Role, ServerEvent,
};

use crate::integration::init_tracing;
use crate::utils::{
    REPLY_TIMEOUT_MS, SILENCE_WINDOW_MS, TestServer, connect, expect_silence, recv_event,
    send_event, send_text,
};

/// Send one raw frame on a fresh connection and return the server's answer.
async fn answer_to(server: &TestServer, frame: &str) -> HandshakeResponse {
    let mut ws = connect(&server.ws_url()).await.expect("Failed to connect");
    send_text(&mut ws, frame).await.expect("Failed to send");

    let ServerEvent::Handshake(response) = recv_event(&mut ws, REPLY_TIMEOUT_MS)
        .await
        .expect("No handshake reply");
    response
}

#[tokio::test]
async fn test_non_handshake_frames_get_no_reply() {
    init_tracing();

    let server = TestServer::start().await.expect("Failed to start server");
    let mut ws = connect(&server.ws_url()).await.expect("Failed to connect");

    send_text(&mut ws, "not json").await.expect("Failed to send");
    send_text(&mut ws, r#"{"event":"chat","data":{"text":"hi"}}"#)
        .await
        .expect("Failed to send");

    expect_silence(&mut ws, SILENCE_WINDOW_MS)
        .await
        .expect("Server replied to an invalid frame");

    // the connection is still usable for the real handshake
    send_event(
        &mut ws,
        &ClientEvent::Handshake(HandshakeRequest::new("ABCD", Role::Audience)),
    )
    .await
    .expect("Failed to send handshake");

    let reply = recv_event(&mut ws, REPLY_TIMEOUT_MS)
        .await
        .expect("No handshake reply");
    assert_eq!(reply, ServerEvent::Handshake(HandshakeResponse::Success));
}

#[tokio::test]
async fn test_malformed_handshake_payloads_are_answered() {
    init_tracing();

    let server = TestServer::start().await.expect("Failed to start server");

    let non_string_role =
        answer_to(&server, r#"{"event":"handshake","data":{"roomCode":"ABCD","role":5}}"#).await;
    assert_eq!(non_string_role, HandshakeResponse::Success);

    let numeric_room =
        answer_to(&server, r#"{"event":"handshake","data":{"roomCode":1234,"role":"client"}}"#)
            .await;
    assert_eq!(numeric_room, HandshakeResponse::Success);

    let host_without_room =
        answer_to(&server, r#"{"event":"handshake","data":{"role":"host"}}"#).await;
    assert_eq!(host_without_room.error_message(), Some(HOST_KEY_REQUIRED));
}
