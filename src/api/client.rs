use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::ApiError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("snaptab/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the admin dashboard's snapshot endpoints.
#[derive(Debug, Clone)]
pub struct SnapshotClient {
    client: Client,
    pub base_url: String,
}

impl SnapshotClient {
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Http {
                status: 0,
                endpoint: "client_init".to_string(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(SnapshotClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET a JSON document from the dashboard, e.g. `/admin/snapshots`.
    pub async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    timeout_secs: DEFAULT_TIMEOUT_SECS,
                    endpoint: path.to_string(),
                }
            } else {
                ApiError::Http {
                    status: 0,
                    endpoint: path.to_string(),
                    message: format!("Request failed: {}", e),
                }
            }
        })?;

        let status = response.status();
        if status.is_success() {
            response.json::<Value>().await.map_err(|e| ApiError::Http {
                status: status.as_u16(),
                endpoint: path.to_string(),
                message: format!("Failed to parse response: {}", e),
            })
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            match status.as_u16() {
                408 | 504 => Err(ApiError::Timeout {
                    timeout_secs: DEFAULT_TIMEOUT_SECS,
                    endpoint: path.to_string(),
                }),
                _ => Err(ApiError::Http {
                    status: status.as_u16(),
                    endpoint: path.to_string(),
                    message: error_text,
                }),
            }
        }
    }
}
