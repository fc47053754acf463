use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::protocol::{OrderRequest, OrderResponse};
use thiserror::Error;
use tracing::{error, info, warn};

pub const DEFAULT_ORDER_ENDPOINT: &str = "http://localhost:9009/api/order";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("order endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("order rejected with status {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("malformed order response (status {status}): {source}")]
    MalformedResponse {
        status: StatusCode,
        source: serde_json::Error,
    },
}

impl SubmitError {
    /// The message the intake server attached to a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SubmitError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Something that accepts pizza orders.
#[async_trait]
pub trait OrderIntake: Send + Sync {
    async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct OrderClient {
    http: Client,
    endpoint: String,
}

impl OrderClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), endpoint)
    }

    pub fn with_http_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for OrderClient {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER_ENDPOINT)
    }
}

#[async_trait]
impl OrderIntake for OrderClient {
    async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse, SubmitError> {
        info!(
            endpoint = %self.endpoint,
            size = %order.size,
            toppings = order.toppings.len(),
            "order: submitting"
        );
        let response = self
            .http
            .post(&self.endpoint)
            .json(order)
            .send()
            .await
            .map_err(|err| {
                error!(endpoint = %self.endpoint, error = %err, "order: transport failure");
                SubmitError::Transport(err)
            })?;

        let status = response.status();
        let body = response.bytes().await?;
        let parsed = parse_body(&body);

        if status.is_success() {
            let body = parsed.map_err(|source| {
                warn!(%status, "order: success response was not valid json");
                SubmitError::MalformedResponse { status, source }
            })?;
            info!(%status, "order: accepted");
            return Ok(body);
        }

        let message = parsed.ok().and_then(|body| body.message);
        warn!(%status, message = message.as_deref().unwrap_or(""), "order: rejected");
        Err(SubmitError::Rejected { status, message })
    }
}

fn parse_body(body: &[u8]) -> Result<OrderResponse, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(OrderResponse::default());
    }
    serde_json::from_slice(body)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
