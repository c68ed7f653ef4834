use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::{debug, warn};
use url::Url;

/// Raw transport outcome handed to an [`HttpClient`] completion.
pub type HttpClientResult = Result<HttpResponse, HttpError>;

/// Completion invoked exactly once by an [`HttpClient`].
pub type HttpClientCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// HTTP response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok_json(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, body)
    }
}

/// Transport-level HTTP error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
    retryable: bool,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: true,
        }
    }

    pub fn non_retryable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Transport contract consumed by feed loaders.
///
/// `get` must invoke `completion` exactly once. It may do so before returning
/// or later from any thread; callers have to be correct under both timings.
/// Retries and timeouts are the implementation's concern.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: HttpClientCompletion);
}

/// Settings for [`ReqwestHttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: String::from("feedkit/0.1.0"),
            timeout: Duration::from_millis(3_000),
        }
    }
}

impl HttpClientConfig {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Production transport backed by reqwest.
///
/// Requests run as tasks on the supplied tokio runtime; the completion is
/// invoked from that task. If the task is dropped before it finishes, for
/// example because the runtime has shut down, the completion receives a
/// non-retryable [`HttpError`] instead.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
    runtime: Handle,
}

impl ReqwestHttpClient {
    /// Create a client with [`HttpClientConfig::default`].
    pub fn new(runtime: Handle) -> Self {
        Self::with_config(runtime, &HttpClientConfig::default())
    }

    pub fn with_config(runtime: Handle, config: &HttpClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|error| {
                warn!(%error, "failed to build configured HTTP client; using reqwest defaults");
                reqwest::Client::new()
            });

        Self::with_client(runtime, client)
    }

    /// Create a client around a preconfigured reqwest::Client.
    ///
    /// The client's own settings, timeout included, apply unchanged.
    pub fn with_client(runtime: Handle, client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(client),
            runtime,
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        let client = Arc::clone(&self.client);
        let url = url.clone();
        let completion = CompletionGuard::new(completion);

        self.runtime.spawn(async move {
            completion.complete(execute_get(&client, url).await);
        });
    }
}

/// Invokes a completion exactly once, with an error if dropped unused.
struct CompletionGuard {
    completion: Option<HttpClientCompletion>,
}

impl CompletionGuard {
    fn new(completion: HttpClientCompletion) -> Self {
        Self {
            completion: Some(completion),
        }
    }

    fn complete(mut self, outcome: HttpClientResult) {
        if let Some(completion) = self.completion.take() {
            completion(outcome);
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(completion) = self.completion.take() {
            warn!("transport task dropped before completing");
            completion(Err(HttpError::non_retryable(
                "transport task dropped before completing; runtime may have shut down",
            )));
        }
    }
}

async fn execute_get(client: &reqwest::Client, url: Url) -> HttpClientResult {
    debug!(url = %url, "sending GET");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                HttpError::new(format!("request timeout: {}", e))
            } else if e.is_connect() {
                HttpError::new(format!("connection failed: {}", e))
            } else if e.is_builder() {
                HttpError::non_retryable(format!("invalid request: {}", e))
            } else {
                HttpError::new(format!("request failed: {}", e))
            }
        })?;

    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(format!("failed to read response body: {}", e)))?;

    Ok(HttpResponse::new(status, body.to_vec()))
}
