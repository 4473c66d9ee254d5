use anyhow::Result;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

/// Points at an already running build instead of starting `dx serve`.
const BASE_URL_ENV: &str = "E2E_BASE_URL";

pub struct TestServer {
    url: String,
    process: Option<Child>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            wait_for_server(&url).await?;
            return Ok(Self { url, process: None });
        }

        let port = get_random_port()?;

        // Build and serve the static web bundle
        let process = Command::new("dx")
            .args(["serve", "--package", "web", "--platform", "web", "--open", "false"])
            .args(["--addr", "127.0.0.1", "--port", &port.to_string()])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let server = Self {
            url: format!("http://127.0.0.1:{}", port),
            process: Some(process),
        };

        wait_for_server(&server.url).await?;

        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut process) = self.process.take() {
            let _ = process.kill();
        }
    }
}

fn get_random_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    Ok(port)
}

async fn wait_for_server(url: &str) -> Result<()> {
    // The first run compiles to wasm, so allow up to 5 minutes
    for i in 0..3000 {
        if let Ok(response) = reqwest::get(url).await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;

        if i > 0 && i % 100 == 0 {
            eprintln!("Still waiting for web build... ({}s)", i / 10);
        }
    }
    anyhow::bail!("Web build was not served in time (waited 300s)")
}
