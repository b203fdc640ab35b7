use std::sync::Arc;

use portfolio::{http, MemStorage, Profile};

/// A running server plus a handle on its store.
pub struct TestServer {
    pub base: String,
    pub store: Arc<MemStorage>,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Bind to port 0 with a freshly seeded store and return the actual address.
pub async fn start_server() -> TestServer {
    start_server_with(MemStorage::new()).await
}

pub async fn start_server_with(store: MemStorage) -> TestServer {
    let store = Arc::new(store);
    let app = http::router(store.clone(), Profile::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base: format!("http://{addr}"),
        store,
        client: reqwest::Client::new(),
    }
}
