//! Shared helpers for server integration tests.

use std::net::TcpListener;
use std::time::Duration;

use reqwest::Client;
use tempfile::TempDir;
use tokio::time::sleep;

/// Find an available port
pub fn get_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// A server process bound to a temp directory for its settings file.
pub struct TestServer {
    pub port: u16,
    pub child: tokio::process::Child,
    // Held for the lifetime of the server so the settings file survives.
    _dir: TempDir,
}

impl TestServer {
    /// Spawn the binary with an isolated settings file and wait for it to
    /// answer health checks.
    pub async fn start() -> Self {
        let port = get_available_port();
        let dir = tempfile::tempdir().unwrap();

        let config_path = dir.path().join("config.toml");
        let settings_path = dir.path().join("settings.json");
        std::fs::write(
            &config_path,
            format!(
                r#"
[server]
host = "127.0.0.1"
port = {}

[settings]
path = "{}"
"#,
                port,
                settings_path.display()
            ),
        )
        .unwrap();

        let child = tokio::process::Command::new(env!("CARGO_BIN_EXE_reelgrab"))
            .env("REELGRAB_CONFIG", &config_path)
            .env("RUST_LOG", "error") // Quiet logs during tests
            .kill_on_drop(true)
            .spawn()
            .expect("Failed to spawn server");

        let server = Self {
            port,
            child,
            _dir: dir,
        };
        assert!(
            server.wait_until_ready(40).await,
            "Server did not start in time"
        );
        server
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}/api/v1{}", self.port, path)
    }

    async fn wait_until_ready(&self, max_attempts: u32) -> bool {
        let client = Client::new();
        for _ in 0..max_attempts {
            if client.get(self.url("/health")).send().await.is_ok() {
                return true;
            }
            sleep(Duration::from_millis(50)).await;
        }
        false
    }
}
