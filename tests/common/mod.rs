use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tempfile::TempDir;

use ubuntu_reportd::config::{AllowLists, Config};
use ubuntu_reportd::submission::recorder::FileRecorder;

/// A running test server writing records into its own temp directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub record_file: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a raw body to the submit endpoint, return (status, body text).
    pub async fn submit(&self, distro: &str, variant: &str, version: &str, body: &str) -> (StatusCode, String) {
        let resp = self
            .client
            .post(self.url(&format!("/submit/{distro}/{variant}/{version}")))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        (status, text)
    }

    /// Every record written so far, one JSON value per line.
    pub async fn records(&self) -> Vec<Value> {
        let contents = tokio::fs::read_to_string(&self.record_file)
            .await
            .unwrap_or_default();
        contents
            .lines()
            .map(|line| serde_json::from_str(line).expect("record line is not valid JSON"))
            .collect()
    }
}

/// Spawn the app on a random port with a fresh record file.
pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let record_file = dir.path().join("submissions.log");

    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        allow_lists: AllowLists {
            distros: vec!["ubuntu".to_string(), "kubuntu".to_string()],
            variants: vec!["desktop".to_string(), "server".to_string()],
        },
        record_file: record_file.clone(),
        log_file: None,
        log_level: "warn".to_string(),
        max_body_size: 1_048_576,
    };

    let recorder = FileRecorder::open(&record_file)
        .await
        .expect("Failed to open record file");
    let app = ubuntu_reportd::build_app(config, Arc::new(recorder));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        record_file,
        _dir: dir,
    }
}
