//! Shared helpers for integration tests: a throwaway local HTTP server
//! and session/client construction against it.

// Allow dead code: not every test binary uses every helper
#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use postboard::{ApiClient, Config, Session};

/// The Basic auth header value for alice/secret123.
pub const ALICE_BASIC: &str = "Basic YWxpY2U6c2VjcmV0MTIz";

/// Bind a router on an ephemeral local port and serve it in the background.
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read listener address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });
    addr
}

pub fn config_for(addr: SocketAddr, timeout_ms: u64) -> Config {
    Config {
        base_url: format!("http://{}/api", addr),
        timeout_ms,
    }
}

pub fn client_for(addr: SocketAddr, timeout_ms: u64) -> ApiClient {
    ApiClient::new(&config_for(addr, timeout_ms)).expect("Failed to build test client")
}

pub fn session_for(addr: SocketAddr, timeout_ms: u64) -> Session {
    Session::new(client_for(addr, timeout_ms))
}
