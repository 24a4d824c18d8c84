use gallery0::server::build_router;
use gallery0::server::types::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Boots the gallery server on an ephemeral port and returns its address.
/// Each call gets a fresh, empty store.
pub async fn spawn_server() -> SocketAddr {
    let state = Arc::new(AppState::new(None));
    let router = build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// Deterministic non-trivial payload for round-trip checks.
pub fn fake_image(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
