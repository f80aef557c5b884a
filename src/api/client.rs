use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use yansi::Paint;

use crate::config::Settings;
use crate::error::DeployError;

// Off unless `--trace` is given
static TRACE: AtomicBool = AtomicBool::new(false);

pub fn set_trace(enabled: bool) {
    TRACE.store(enabled, Ordering::Relaxed);
}

pub fn trace_enabled() -> bool {
    TRACE.load(Ordering::Relaxed)
}

fn log_output(msg: String) {
    if trace_enabled() {
        eprintln!("{}", msg);
    }
}

/// Raw answer from the management API.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Authenticated client for the NC2 management API.
#[derive(Debug, Clone)]
pub struct Nc2Client {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl Nc2Client {
    /// Build a client from resolved settings.
    ///
    /// `timeout` is applied to every request when given; without it a call
    /// waits for as long as the server keeps the connection open.
    pub fn new(settings: &Settings, timeout: Option<Duration>) -> Result<Self, DeployError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("nc2-deploy/{}", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| DeployError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.api_base_url.clone(),
            token: settings.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and return status and body without interpreting them.
    pub async fn send(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, DeployError> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.log_request(&method, &url, body);

        let mut req = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(&self.token);
        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::info!(%method, %url, "Sending request to management API");
        let resp = req.send().await.map_err(|e| {
            tracing::error!(%e, %url, "Request failed");
            DeployError::Transport(format!("Request to {} failed: {}", url, e))
        })?;

        let status = resp.status().as_u16();
        let text = resp.text().await?;
        tracing::info!(status, "Management API responded");

        tracing::debug!(body = %text, "Response body");
        let response_str = Paint::new(format!("HTTP {}: {}", status, text)).rgb(100, 100, 100).to_string();
        log_output(format!("Response:\n{}", response_str));

        Ok(ApiResponse { status, body: text })
    }

    // Curl-style trace of the outgoing request. The bearer token is masked.
    fn log_request(&self, method: &reqwest::Method, url: &str, body: Option<&Value>) {
        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Authorization: Bearer ***'").fg(yansi::Color::Magenta)
        ));

        if let Some(d) = body {
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
            ));
            let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
            let escaped_json = json_str.replace('\'', "'\\''");
            parts.push(format!(
                "{} {}",
                Paint::new("-d").fg(yansi::Color::Blue),
                Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
            ));
        }
        log_output(format!("Request:\n{}", parts.join(" ")));
    }
}
