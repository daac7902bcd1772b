use std::time::Duration;

use reqwest::{header, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

/// Environment variable overriding the backend address
pub const BASE_URL_ENV: &str = "PICKEM_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Failure taxonomy for every endpoint operation
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received at all (connection refused, timeout, DNS)
    #[error("backend unreachable: {source}")]
    NetworkUnreachable {
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a 4xx status
    #[error("request to {path} rejected with {status}")]
    Client { status: StatusCode, path: String },
    /// The backend answered with a 5xx status
    #[error("server error {status} from {path}")]
    Server { status: StatusCode, path: String },
    /// A 2xx response whose body did not match the expected shape
    #[error("failed to decode response from {path}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// Locally rejected input; no request was issued
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl ApiError {
    /// True for the 404 case endpoints document as "not found"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::Client {
                status: StatusCode::NOT_FOUND,
                ..
            }
        )
    }
}

/// The current-user capability, supplied by whatever owns authentication.
/// Endpoint operations never assume a baked-in user id.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// One configured request issuer shared by every endpoint client: fixed base
/// address, 5 s timeout, JSON content type, optional bearer token.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl Transport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
        }
    }

    /// Base address from `PICKEM_API_URL`, falling back to localhost
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Attach a bearer token to every outbound request.
    /// The request body is never touched.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.http.get(self.url(path)));
        self.execute(request, path).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.http.post(self.url(path)).json(body));
        self.execute(request, path).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(self.http.put(self.url(path)).json(body));
        self.execute(request, path).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(self.http.delete(self.url(path)));
        self.execute(request, path).await
    }

    /// Send, classify failures, decode success.
    ///
    /// Classification only logs and re-raises; a success response is
    /// forwarded undecorated and nothing is ever swallowed here.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|source| {
            info!(%path, "backend not available: {source}");
            ApiError::NetworkUnreachable { source }
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(%path, "unauthorized response");
            return Err(ApiError::Client {
                status,
                path: path.to_string(),
            });
        }
        if status.is_server_error() {
            error!(%path, %status, "server error");
            return Err(ApiError::Server {
                status,
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Client {
                status,
                path: path.to_string(),
            });
        }

        response.json().await.map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}
