//! End-to-end test over a real listener.

use std::time::Duration;

use spa_router::{AppConfig, HttpServer, Shutdown};

mod common;

#[tokio::test]
async fn test_serve_and_shutdown() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(AppConfig::default(), common::app_router());
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    let res = client.get(format!("http://{}/Counter", addr)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("data-route=\"Counter\""));

    let res = client.get(format!("http://{}/counter", addr)).send().await.unwrap();
    assert_eq!(res.status(), 404);

    drop(client);
    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}
