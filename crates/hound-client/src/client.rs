//! Sighthound REST API client.
//!
//! One POST per call, no retries:
//! - `X-Access-Token` header carrying the static API key
//! - JSON body `{"image": "<base64>"}`
//! - Explicit per-request timeout
//! - Tracing spans and request metrics

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info_span, warn, Instrument};

use hound_models::{DetectionResponse, Endpoint, ObjectKind, RecognitionStyle, SchemaError};

use crate::config::HoundConfig;
use crate::encoding::encode_image;
use crate::error::{HoundError, HoundResult};
use crate::metrics::{record_request, TRANSPORT_FAILURE_STATUS};

/// Header carrying the API key.
pub const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";

#[derive(Serialize)]
struct ImageBody<'a> {
    image: &'a str,
}

/// POST an already-encoded image and return the raw JSON body.
///
/// 200 yields the parsed body, 401 [`HoundError::Authentication`], any other
/// status [`HoundError::Request`]. Network failures, including `timeout`
/// expiring, yield [`HoundError::Transport`].
pub async fn submit(
    http: &Client,
    image_encoded: &str,
    api_key: &str,
    url: &str,
    params: &[(&str, &str)],
    timeout: Duration,
) -> HoundResult<Value> {
    debug!(url = %url, payload_bytes = image_encoded.len(), "Posting image to Sighthound");

    let response = http
        .post(url)
        .header(ACCESS_TOKEN_HEADER, api_key)
        .query(params)
        .json(&ImageBody {
            image: image_encoded,
        })
        .timeout(timeout)
        .send()
        .await?;

    let status = response.status();
    match status {
        StatusCode::OK => {
            let bytes = response.bytes().await?;
            serde_json::from_slice(&bytes)
                .map_err(|e| SchemaError::malformed(format!("body is not JSON: {}", e)).into())
        }
        StatusCode::UNAUTHORIZED => {
            warn!(url = %url, "Sighthound rejected the API key");
            Err(HoundError::Authentication)
        }
        _ => {
            let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(url = %url, error = %e, "Failed to read Sighthound error body");
                    String::new()
                }
            };
            warn!(url = %url, status = status.as_u16(), body = %body, "Sighthound request failed");
            Err(HoundError::from_http_status(status.as_u16(), reason))
        }
    }
}

/// Sighthound cloud client.
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Clone)]
pub struct HoundClient {
    http: Client,
    config: Arc<HoundConfig>,
}

impl HoundClient {
    /// Create a new client.
    pub fn new(config: HoundConfig) -> HoundResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("hound-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> HoundResult<Self> {
        Self::new(HoundConfig::from_env()?)
    }

    pub fn config(&self) -> &HoundConfig {
        &self.config
    }

    /// URL used by `detect`.
    pub fn detect_url(&self) -> String {
        self.config.endpoint_url(self.config.endpoint)
    }

    /// URL and query parameters used by `recognize` for one category.
    pub fn recognition_target(&self, kind: ObjectKind) -> (String, Vec<(&'static str, &'static str)>) {
        let base = self.config.endpoint_url(Endpoint::Recognition);
        match self.config.recognition_style {
            RecognitionStyle::Query => (base, vec![("objectType", kind.as_str())]),
            RecognitionStyle::Path => (format!("{}/{}", base, kind.as_str()), Vec::new()),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Run the configured endpoint on an image.
    pub async fn detect(&self, image: &[u8]) -> HoundResult<DetectionResponse> {
        self.detect_with_timeout(image, self.config.timeout).await
    }

    /// Like [`detect`](Self::detect) with a caller-supplied timeout.
    pub async fn detect_with_timeout(
        &self,
        image: &[u8],
        timeout: Duration,
    ) -> HoundResult<DetectionResponse> {
        let url = self.detect_url();
        let endpoint = self.config.endpoint;
        self.execute("detect", endpoint, &url, endpoint.default_params(), image, timeout)
            .await
    }

    /// Run recognition for one object category.
    pub async fn recognize(&self, image: &[u8], kind: ObjectKind) -> HoundResult<DetectionResponse> {
        self.recognize_with_timeout(image, kind, self.config.timeout).await
    }

    /// Like [`recognize`](Self::recognize) with a caller-supplied timeout.
    pub async fn recognize_with_timeout(
        &self,
        image: &[u8],
        kind: ObjectKind,
        timeout: Duration,
    ) -> HoundResult<DetectionResponse> {
        let (url, params) = self.recognition_target(kind);
        self.execute("recognize", Endpoint::Recognition, &url, &params, image, timeout)
            .await
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Encode, submit and validate, with tracing and metrics.
    async fn execute(
        &self,
        operation: &str,
        endpoint: Endpoint,
        url: &str,
        params: &[(&str, &str)],
        image: &[u8],
        timeout: Duration,
    ) -> HoundResult<DetectionResponse> {
        let span = info_span!(
            "sighthound_request",
            operation = %operation,
            endpoint = %endpoint,
            mode = %self.config.mode,
            url = %url
        );

        let start = Instant::now();
        let result = async {
            let encoded = encode_image(image);
            let body = submit(&self.http, &encoded, &self.config.api_key, url, params, timeout).await?;
            let response = DetectionResponse::from_value(body)?;
            debug!(
                objects = response.objects.len(),
                request_id = response.request_id.as_deref().unwrap_or(""),
                "Sighthound response parsed"
            );
            Ok::<_, HoundError>(response)
        }
        .instrument(span)
        .await;
        let latency_ms = start.elapsed().as_millis() as f64;

        let status = match &result {
            Ok(_) | Err(HoundError::Schema(_)) => 200,
            Err(e) => e.http_status().unwrap_or(TRANSPORT_FAILURE_STATUS),
        };
        record_request(operation, status, latency_ms);

        result
    }
}
