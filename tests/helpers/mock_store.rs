// Mock Storefront Platform
//
// Stands in for the remote platform in integration tests: both API surfaces
// are served from one wiremock server, and the clients are pointed at its
// URI. Scenarios mount only the endpoints they exercise.

use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storebridge::config::{HeadlessConfig, PluginConfig};
use storebridge::{HeadlessApi, PluginApi};

pub const TEST_PUBLIC_TOKEN: &str = "t66x-0bd12c4fa7e94d6c8b2f3a9e5d71c802";
pub const TEST_SECRET_KEY: &str = "test-secret-key";

pub struct MockStore {
    pub server: MockServer,
}

impl MockStore {
    pub async fn start() -> Self {
        super::init_tracing();
        Self {
            server: MockServer::start().await,
        }
    }

    /// Headless client pointed at the mock server.
    pub fn headless(&self) -> HeadlessApi {
        HeadlessApi::new(HeadlessConfig {
            public_token: TEST_PUBLIC_TOKEN.to_string(),
            private_key: None,
            base_url: self.server.uri(),
        })
    }

    /// Plugin client pointed at the mock server.
    pub fn plugin(&self) -> PluginApi {
        PluginApi::new(PluginConfig {
            secret_key: TEST_SECRET_KEY.to_string(),
            base_url: self.server.uri(),
        })
    }

    /// Token-scoped headless path.
    pub fn account_path(&self, suffix: &str) -> String {
        format!("/accounts/{TEST_PUBLIC_TOKEN}{suffix}")
    }

    /// Mount a JSON response for one headless endpoint.
    pub async fn mount_headless(&self, http_method: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(route.to_string()))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a JSON response for one plugin endpoint; requires the secret
    /// key header so unauthenticated requests fall through.
    pub async fn mount_plugin(&self, http_method: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(route.to_string()))
            .and(header("X-Store-Secret", TEST_SECRET_KEY))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount an endpoint that must never be called (chain-stop property).
    pub async fn mount_never(&self, http_method: &str, route: &str) {
        Mock::given(method(http_method))
            .and(path(route.to_string()))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Mount a plain-text error response.
    pub async fn mount_error(&self, http_method: &str, route: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(route.to_string()))
            .respond_with(ResponseTemplate::new(status).set_body_string(body.to_string()))
            .mount(&self.server)
            .await;
    }
}
