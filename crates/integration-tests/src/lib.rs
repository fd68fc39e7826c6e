//! Integration tests for the record shop API.
//!
//! Each test spawns the real router on an ephemeral localhost port and talks
//! to it over HTTP, so nothing needs to be running beforehand.
//!
//! ```bash
//! cargo test -p record-shop-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;

use record_shop_api::{ApiConfig, app, middleware::IDENTITY_HEADER, state::AppState};

/// Seed account emails.
pub const CLERK: &str = "clerk@recordshop.com";
pub const MANAGER: &str = "manager@recordshop.com";
pub const ADMIN: &str = "admin@recordshop.com";

/// Password shared by every seed account.
pub const PASSWORD: &str = "password";

/// A running server plus a client pointed at it.
pub struct TestContext {
    pub client: Client,
    pub addr: SocketAddr,
}

/// A record as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordJson {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub format: String,
    pub genre: String,
    pub release_year: i32,
    pub price: f64,
    pub stock_qty: i32,
    pub customer_id: String,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_contact: String,
    pub customer_email: String,
}

impl TestContext {
    /// Start a server with the seed inventory.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn spawn() -> Self {
        Self::spawn_with(ApiConfig::default()).await
    }

    /// Start a server with an empty inventory.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn spawn_empty() -> Self {
        Self::spawn_with(ApiConfig {
            seed_inventory: false,
            ..ApiConfig::default()
        })
        .await
    }

    async fn spawn_with(config: ApiConfig) -> Self {
        let state = AppState::new(config).expect("seed data is valid");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app(state))
                .await
                .expect("Server error");
        });

        Self {
            client: Client::new(),
            addr,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Build a request without an identity header.
    #[must_use]
    pub fn anonymous(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Build a request that identifies as `email`.
    #[must_use]
    pub fn as_user(&self, email: &str, method: reqwest::Method, path: &str) -> RequestBuilder {
        self.anonymous(method, path).header(IDENTITY_HEADER, email)
    }

    /// Fetch all records as `email`.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not a record list.
    pub async fn list_records(&self, email: &str) -> Vec<RecordJson> {
        self.as_user(email, reqwest::Method::GET, "/api/records")
            .send()
            .await
            .expect("Failed to list records")
            .json()
            .await
            .expect("Failed to decode record list")
    }
}

/// A valid create/update body.
#[must_use]
pub fn record_body(title: &str) -> Value {
    serde_json::json!({
        "title": title,
        "artist": "Bob Marley & The Wailers",
        "format": "Vinyl",
        "genre": "Reggae",
        "releaseYear": 1977,
        "price": 34.99,
        "stockQty": 3,
    })
}

/// Decode a JSON response body.
///
/// # Panics
///
/// Panics if the body is not JSON.
pub async fn body_json(response: Response) -> Value {
    response.json().await.expect("Response body is not JSON")
}
