//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use todo_api::config::ServiceConfig;
use todo_api::http::HttpServer;
use todo_api::todos::store::TodoStore;

/// A running service instance bound to an ephemeral port.
pub struct TestService {
    pub addr: SocketAddr,
    pub store: TodoStore,
}

impl TestService {
    /// URL for a path on this instance.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the real server on 127.0.0.1 with an OS-assigned port.
///
/// Each call gets its own isolated store, so tests cannot observe each
/// other's todos.
pub async fn start_service() -> TestService {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let store = TodoStore::new();
    let server = HttpServer::with_store(ServiceConfig::default(), store.clone());

    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    TestService { addr, store }
}
