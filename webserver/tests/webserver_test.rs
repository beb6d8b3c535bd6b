//! Lifecycle tests against a real listener

use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::timeout;

use shared::SumResponse;
use webserver::{WebServer, WebServerError, WebServerState};

#[tokio::test]
async fn test_webserver_serves_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut webserver = WebServer::new(WebServerState::new());
    let state = webserver.state().clone();
    let shutdown_sender = webserver.get_shutdown_sender();
    let webserver_task = tokio::spawn(async move { webserver.run_with_listener(listener).await });

    let response = reqwest::get(format!("http://{addr}/api/calculate?a=2&b=3"))
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: SumResponse = response.json().await.unwrap();
    assert_eq!(body.sum, 5);
    assert!(state.is_running());

    shutdown_sender.send(()).await.unwrap();

    let result = timeout(Duration::from_secs(5), webserver_task).await;
    assert!(result.is_ok(), "Webserver should shut down gracefully");
    assert!(result.unwrap().unwrap().is_ok());
    assert!(!state.is_running());
}

#[tokio::test]
async fn test_webserver_cannot_run_twice() {
    let mut webserver = WebServer::new(WebServerState::new());
    let shutdown_sender = webserver.get_shutdown_sender();
    shutdown_sender.send(()).await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    webserver.run_with_listener(listener).await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let second = webserver.run_with_listener(listener).await;
    assert!(matches!(second, Err(WebServerError::ServerStartup(_))));
}

#[tokio::test]
async fn test_bind_failure_is_reported() {
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap();

    let mut webserver = WebServer::new(WebServerState::new());
    let result = webserver.run(addr).await;

    assert!(matches!(result, Err(WebServerError::ServerStartup(_))));
}
