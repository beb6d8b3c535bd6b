//! Test helper utilities for client integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{Mutex, mpsc, oneshot};
use tokio::task::JoinHandle;

use client::config::DEFAULT_TIMEOUT;
use client::{CalculatorApi, ClientConfig, ClientResult, RealCalculatorApi};
use shared::SumResponse;
use webserver::{WebServer, WebServerResult, WebServerState};

/// A webserver running on an ephemeral port
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: mpsc::Sender<()>,
    task: JoinHandle<WebServerResult<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut webserver = WebServer::new(WebServerState::new());
        let shutdown = webserver.get_shutdown_sender();
        let task = tokio::spawn(async move { webserver.run_with_listener(listener).await });

        Self { addr, shutdown, task }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn api(&self) -> RealCalculatorApi {
        create_api(&self.url())
    }

    pub async fn stop(self) {
        self.shutdown.send(()).await.unwrap();
        self.task.await.unwrap().unwrap();
    }
}

/// Real API client for the given base URL
pub fn create_api(server: &str) -> RealCalculatorApi {
    create_api_with_timeout(server, DEFAULT_TIMEOUT)
}

pub fn create_api_with_timeout(server: &str, timeout: Duration) -> RealCalculatorApi {
    let config = ClientConfig::new(server, timeout).unwrap();
    RealCalculatorApi::new(&config).unwrap()
}

/// API whose calls stay pending until the test releases them
pub struct GatedApi {
    gates: Mutex<VecDeque<oneshot::Receiver<ClientResult<SumResponse>>>>,
    calls: Arc<AtomicUsize>,
}

impl GatedApi {
    /// Returns the API plus one sender per expected call, in call order
    pub fn new(calls: usize) -> (Self, Vec<oneshot::Sender<ClientResult<SumResponse>>>) {
        let mut senders = Vec::with_capacity(calls);
        let mut receivers = VecDeque::with_capacity(calls);
        for _ in 0..calls {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            receivers.push_back(rx);
        }

        let api = Self {
            gates: Mutex::new(receivers),
            calls: Arc::new(AtomicUsize::new(0)),
        };
        (api, senders)
    }

    /// Counter of calls made, still readable after the API moves into a store
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl CalculatorApi for GatedApi {
    async fn fetch_sum(&self, _a: f64, _b: f64) -> ClientResult<SumResponse> {
        let gate = {
            let mut gates = self.gates.lock().await;
            self.calls.fetch_add(1, Ordering::SeqCst);
            gates.pop_front().expect("more calls than gates")
        };
        gate.await.expect("gate dropped")
    }
}

/// Wait until `counter` reaches `expected`, giving up after `timeout_ms`
pub async fn wait_for_calls(counter: &AtomicUsize, expected: usize, timeout_ms: u64) -> bool {
    let start = std::time::Instant::now();
    let timeout = Duration::from_millis(timeout_ms);

    while counter.load(Ordering::SeqCst) < expected {
        if start.elapsed() > timeout {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    true
}
