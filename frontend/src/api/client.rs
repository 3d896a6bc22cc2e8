use reqwest::{Client, StatusCode};

use crate::{api::types::ApiError, config, utils::browser, utils::storage as storage_utils};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Quran content lives on a separate external API; tests with an
    /// explicit base URL mock both under the same prefix.
    pub(crate) async fn resolved_quran_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_quran_base_url().await
        }
    }

    /// Bearer header from the session store. Absent token means the request
    /// goes out unauthenticated and the server answers 401.
    pub(crate) fn auth_headers(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = storage_utils::stored_token() {
            if let Ok(value) = format!("Bearer {}", token).parse() {
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
        }
        headers
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            storage_utils::clear_token();
            Self::redirect_to_login_if_needed();
        }
    }

    fn redirect_to_login_if_needed() {
        if let Some(pathname) = browser::current_pathname() {
            if pathname == "/login" {
                return;
            }
        }
        browser::redirect_to("/login");
    }

    /// Single egress point: every request goes through here so the test
    /// build can intercept it before it reaches the network.
    pub(crate) async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Permintaan gagal: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_responder_for(request.url().as_str()) {
            return responder.respond(&request).map(MockResponse::into_response);
        }

        self.client.execute(request).await.map_err(|e| {
            log::error!("request failed: {}", e);
            ApiError::request_failed(format!("Permintaan gagal: {}", e))
        })
    }

    /// Consumes a non-2xx response into an `ApiError`, preferring the
    /// server's own message field.
    pub(crate) async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<serde_json::Value>().await.ok();
        ApiError::from_body(status, body)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mocks::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mocks::mock_responder_for;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod mocks {
    use crate::api::types::ApiError;
    use serde_json::Value;
    use std::sync::{Arc, Mutex, OnceLock};

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone)]
    pub struct MockResponse {
        status: u16,
        body: Value,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self { status, body }
        }

        pub(crate) fn into_response(self) -> reqwest::Response {
            let response = http::Response::builder()
                .status(self.status)
                .header("content-type", "application/json")
                .body(self.body.to_string())
                .expect("mock response must build");
            reqwest::Response::from(response)
        }
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        let mut mocks = registry().lock().expect("mock registry lock");
        mocks.retain(|(base, _)| *base != base_url);
        mocks.push((base_url, responder));
    }

    pub(crate) fn mock_responder_for(url: &str) -> Option<Arc<dyn TestResponder>> {
        let mocks = registry().lock().expect("mock registry lock");
        mocks
            .iter()
            .filter(|(base, _)| url.starts_with(base.as_str()))
            .max_by_key(|(base, _)| base.len())
            .map(|(_, responder)| responder.clone())
    }
}
