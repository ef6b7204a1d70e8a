use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use nlink_api::{config::ApiConfig, router, state::ApiState};
use serde::de::DeserializeOwned;
use tower::ServiceExt;
use wiremock::MockServer;

pub const CLIENT_ID: &str = "client-123";
pub const CLIENT_SECRET: &str = "secret-456";
pub const REDIRECT_URI: &str = "http://localhost:3000/callback";
pub const API_VERSION: &str = "2022-06-28";
pub const DASHBOARD_URL: &str = "https://dashboard.example.com/home";

/// Test state builder pointing every Notion endpoint at a mock server
pub struct TestStateBuilder {
    vars: Vec<(String, String)>,
}

impl TestStateBuilder {
    pub fn new(notion: &MockServer) -> Self {
        let vars = [
            ("CLIENT_ID", CLIENT_ID.to_string()),
            ("CLIENT_SECRET", CLIENT_SECRET.to_string()),
            ("REDIRECT_URI", REDIRECT_URI.to_string()),
            ("NOTION_API_VERSION", API_VERSION.to_string()),
            ("NOTION_API_BASE_URL", notion.uri()),
            ("DASHBOARD_URL", DASHBOARD_URL.to_string()),
            ("REQUEST_TIMEOUT_SECS", "5".to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self { vars }
    }

    /// Override or add one environment variable
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.retain(|(k, _)| k != key);
        self.vars.push((key.to_string(), value.to_string()));
        self
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::from_vars(self.vars.clone()).expect("Invalid test configuration")
    }

    pub fn build(self) -> ApiState {
        ApiState::new(&self.config()).expect("Failed to create test state")
    }

    /// Shortcut for a client over the full router
    pub fn client(self) -> TestClient {
        TestClient::new(router::router().with_state(self.build()))
    }
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: HeaderMap,
}

impl TestResponse {
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }

    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!("Failed to parse JSON ({e}). Body: {}", self.text())
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// True if `needle` appears in the body or any header value
    pub fn contains(&self, needle: &str) -> bool {
        self.text().contains(needle)
            || self
                .headers
                .values()
                .filter_map(|v| v.to_str().ok())
                .any(|v| v.contains(needle))
    }
}

/// Stubs for the Notion endpoints
pub mod notion {
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const ACCESS_TOKEN: &str = "secret_token_xyz";

    pub fn token_body() -> Value {
        json!({
            "access_token": ACCESS_TOKEN,
            "token_type": "bearer",
            "bot_id": "bot-1",
            "workspace_id": "ws-1",
            "workspace_name": "Acme",
            "owner": {"type": "user", "user": {"object": "user", "id": "u-1"}}
        })
    }

    pub fn user_body() -> Value {
        json!({
            "object": "user",
            "id": "u-1",
            "name": "Acme Integration",
            "type": "bot",
            "bot": {"owner": {"type": "workspace", "workspace": true}}
        })
    }

    pub fn search_body() -> Value {
        json!({
            "object": "list",
            "results": [
                {"object": "database", "id": "db-1", "url": "https://www.notion.so/db-1"}
            ],
            "next_cursor": null,
            "has_more": false
        })
    }

    pub async fn mount(server: &MockServer, verb: &str, route: &str, response: ResponseTemplate) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(response)
            .mount(server)
            .await;
    }

    /// Token, user and search endpoints all succeed
    pub async fn mount_happy_path(server: &MockServer) {
        mount(server, "POST", "/v1/oauth/token", ResponseTemplate::new(200).set_body_json(token_body())).await;
        mount(server, "GET", "/v1/users/me", ResponseTemplate::new(200).set_body_json(user_body())).await;
        mount(server, "POST", "/v1/search", ResponseTemplate::new(200).set_body_json(search_body())).await;
    }

    /// Paths of the requests the mock received, in arrival order
    pub async fn received_paths(server: &MockServer) -> Vec<String> {
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}
