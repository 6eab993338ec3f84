//! Shared test harness for E2E tests.
//!
//! Runs the real router behind a real TCP listener so requests go through
//! hyper, the trace layer and graceful shutdown exactly as in production.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use hello_api::config::ApiConfig;
use hello_api::error::{ServerError, ServerResult};
use hello_api::routes::build_router;
use hello_api::server;

/// A running server that shuts down when [`TestServer::stop`] is called.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<ServerResult<()>>,
}

impl TestServer {
    /// Start on an OS-assigned loopback port.
    pub async fn start() -> Self {
        let listener = server::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(server::serve(listener, build_router(), async move {
            let _ = rx.await;
        }));

        Self {
            addr,
            client: reqwest::Client::new(),
            shutdown,
            handle,
        }
    }

    /// Start through `server::run_until` with the config that `PORT=<port>`
    /// and `HOST=127.0.0.1` produce.
    ///
    /// The port comes from [`free_port`], so another process may take it
    /// before `run_until` binds; a bind failure retries with a new port.
    pub async fn run_from_env() -> Self {
        for _ in 0..5 {
            let port = free_port();
            let config = ApiConfig::from_lookup(env(vec![
                ("HOST", "127.0.0.1".into()),
                ("PORT", port.to_string()),
            ]));
            assert_eq!(config.port, port);

            let (shutdown, rx) = oneshot::channel::<()>();
            let run_config = config.clone();
            let handle = tokio::spawn(async move {
                server::run_until(&run_config, async move {
                    let _ = rx.await;
                })
                .await
            });

            if wait_until_listening(&config, &handle).await {
                return Self {
                    addr: config.addr().parse().unwrap(),
                    client: reqwest::Client::new(),
                    shutdown,
                    handle,
                };
            }

            match handle.await.unwrap() {
                Err(ServerError::Bind { .. }) => continue,
                other => panic!("run_until stopped before listening: {other:?}"),
            }
        }
        panic!("could not find a free port");
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET `path`, returning (status, body text).
    pub async fn get(&self, path: &str) -> (reqwest::StatusCode, String) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        let status = response.status();
        let body = response.text().await.unwrap();
        (status, body)
    }

    /// Trigger graceful shutdown and wait for the server task.
    pub async fn stop(self) -> ServerResult<()> {
        let _ = self.shutdown.send(());
        self.handle.await.unwrap()
    }
}

/// `false` if the server task ends before the address accepts connections.
async fn wait_until_listening(config: &ApiConfig, handle: &JoinHandle<ServerResult<()>>) -> bool {
    for _ in 0..100 {
        if handle.is_finished() {
            return false;
        }
        if TcpStream::connect(config.addr()).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server did not start listening on {}", config.addr());
}

/// Find a loopback port that is free right now. Racy by nature; callers
/// that bind it later must tolerate `AddrInUse`.
pub fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Variable lookup backed by a fixed list, for `ApiConfig::from_lookup`.
pub fn env(vars: Vec<(&'static str, String)>) -> impl Fn(&str) -> Option<String> {
    move |key: &str| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
    }
}
