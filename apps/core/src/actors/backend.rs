use crate::actors::traits::ChatBackend;
use crate::brain::{Priority, ResponseType};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};
use url::Url;

// --- Wire contract ---

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub is_anonymous: bool,
}

/// Response body of `POST /api/chat`.
///
/// `message` is required. Missing optional fields default to an informational
/// reply with no emotions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub emotions_detected: Vec<String>,
    #[serde(default)]
    pub response_type: ResponseType,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body for `POST /api/wellness-check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessRequest {
    pub mood: String,
    pub stress_level: u8,
}

/// Response body of `POST /api/wellness-check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// --- Constants ---
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the remote support backend.
///
/// Every call is bounded by `request_timeout`; nothing here retries.
#[derive(Clone)]
pub struct HttpChatBackend {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
}

impl HttpChatBackend {
    pub fn new(base_url: Url, request_timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url,
            request_timeout,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        Ok(self.base_url.join(path)?)
    }

    async fn post_json<Req, Resp>(&self, path: &str, payload: &Req) -> Result<Resp, AppError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.endpoint(path)?;

        // The deadline covers headers and body alike
        let exchange = async {
            let res = self.client.post(url).json(payload).send().await?;
            let status = res.status();
            let body = res.text().await?;

            if !status.is_success() {
                return Err(AppError::Transport(format!(
                    "Request to {} failed with status {}: {}",
                    path, status, body
                )));
            }

            Ok::<Resp, AppError>(serde_json::from_str(&body)?)
        };

        timeout(self.request_timeout, exchange).await?
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    #[instrument(skip(self, request), fields(anonymous = request.is_anonymous))]
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let response: ChatResponse = self.post_json("api/chat", request).await?;
        if !response.success {
            return Err(AppError::Transport(format!(
                "Backend reported failure: {}",
                response.error.as_deref().unwrap_or("no error detail")
            )));
        }
        if response.message.trim().is_empty() {
            return Err(AppError::Transport(
                "Malformed payload: empty reply message".to_string(),
            ));
        }
        debug!(
            emotions = response.emotions_detected.len(),
            response_type = ?response.response_type,
            "Backend replied"
        );
        Ok(response)
    }

    #[instrument(skip(self, request), fields(stress_level = request.stress_level))]
    async fn wellness_check(&self, request: &WellnessRequest) -> Result<WellnessResponse, AppError> {
        let response: WellnessResponse = self.post_json("api/wellness-check", request).await?;
        if !response.success {
            return Err(AppError::Transport(format!(
                "Backend reported failure: {}",
                response.error.as_deref().unwrap_or("no error detail")
            )));
        }
        Ok(response)
    }

    async fn check_health(&self) -> bool {
        let url = match self.endpoint("api/health") {
            Ok(url) => url,
            Err(e) => {
                warn!("Invalid health endpoint: {}", e);
                return false;
            }
        };

        match timeout(HEALTH_TIMEOUT, self.client.get(url).send()).await {
            Ok(Ok(response)) if response.status().is_success() => {
                info!("Backend at {} is healthy", self.base_url);
                true
            }
            Ok(Ok(response)) => {
                warn!("Backend health check returned status {}", response.status());
                false
            }
            Ok(Err(e)) => {
                warn!("Backend health check failed: {}", e);
                false
            }
            Err(_) => {
                warn!("Backend health check timed out");
                false
            }
        }
    }
}
