/// External API clients module
use crate::domain::Mission;
use crate::errors::{ApiError, ApiResult};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

/// HTTP client wrapper with common configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout_seconds: u64) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent("cosmic-explorer/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Turn a non-2xx upstream response into an error carrying its body
async fn ensure_success(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(ApiError::Upstream {
        status: status.as_u16(),
        message,
    })
}

/// Mission catalog client
pub struct CatalogClient {
    http_client: HttpClient,
    base_url: String,
}

impl CatalogClient {
    pub fn new(http_client: HttpClient, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    pub fn missions_url(&self) -> String {
        format!("{}/missions", self.base_url)
    }

    /// Fetch the full mission catalog
    pub async fn fetch_missions(&self) -> ApiResult<Vec<Mission>> {
        let resp = self
            .http_client
            .get_client()
            .get(self.missions_url())
            .send()
            .await?;

        let json: Value = ensure_success(resp).await?.json().await?;
        Ok(missions_from_payload(json))
    }
}

/// Accept a bare array or one wrapped in `missions` / `items`. Records that do
/// not deserialize are skipped.
fn missions_from_payload(json: Value) -> Vec<Mission> {
    let items = match json {
        Value::Array(arr) => arr,
        Value::Object(mut obj) => match obj.remove("missions").or_else(|| obj.remove("items")) {
            Some(Value::Array(arr)) => arr,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Mission>(item) {
            Ok(m) => Some(m),
            Err(e) => {
                warn!("Skipping malformed mission record: {}", e);
                None
            }
        })
        .collect()
}

/// Mission updates client (likes)
pub struct UpdatesClient {
    http_client: HttpClient,
    base_url: String,
}

impl UpdatesClient {
    pub fn new(http_client: HttpClient, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Like (`POST`) or unlike (`DELETE`) an update on behalf of the token
    /// holder. Returns the upstream body.
    pub async fn set_like(&self, update_id: &str, liked: bool, token: &str) -> ApiResult<Value> {
        let url = format!("{}/updates/{}/like", self.base_url, update_id);
        let client = self.http_client.get_client();
        let req = if liked {
            client.post(&url)
        } else {
            client.delete(&url)
        };

        let resp = req.bearer_auth(token).send().await?;
        let resp = ensure_success(resp).await?;

        // some upstream routes answer 204
        let body = resp.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| ApiError::Internal(format!("Malformed like response: {}", e)))
    }
}
