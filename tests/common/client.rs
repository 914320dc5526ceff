//! In-process client for the loyalty point router.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use loyalty_points::api::create_router;
use loyalty_points::domain::{CustomerId, UserProfile};
use loyalty_points::infrastructure::{
    AppConfig, AppDependencies, CredentialValidator, InMemoryPointLedger, InMemoryUserDirectory,
    PointLedger,
};
use tower::ServiceExt;

/// A response with its body decoded.
///
/// `body` is `Value::Null` for an empty body and a JSON string for a body
/// that is not JSON (axum's own rejections are plain text).
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Router wired to in-memory backends the test can inspect and seed.
///
/// `ledger` and `users` are the backends the router uses unless a
/// constructor replaces one of them.
pub struct TestApp {
    router: Router,
    pub ledger: InMemoryPointLedger,
    pub users: InMemoryUserDirectory,
}

impl TestApp {
    pub fn new() -> Self {
        let ledger = InMemoryPointLedger::new();
        let users = InMemoryUserDirectory::new();
        Self::wire(
            Arc::new(ledger.clone()),
            Arc::new(users.clone()),
            ledger,
            users,
        )
    }

    /// Serves point requests from `backend` instead of the in-memory ledger.
    pub fn with_ledger_backend(backend: Arc<dyn PointLedger>) -> Self {
        let users = InMemoryUserDirectory::new();
        Self::wire(
            backend,
            Arc::new(users.clone()),
            InMemoryPointLedger::new(),
            users,
        )
    }

    /// Resolves bearer tokens through `backend` instead of the in-memory directory.
    pub fn with_credentials_backend(backend: Arc<dyn CredentialValidator>) -> Self {
        let ledger = InMemoryPointLedger::new();
        Self::wire(
            Arc::new(ledger.clone()),
            backend,
            ledger,
            InMemoryUserDirectory::new(),
        )
    }

    fn wire(
        ledger_backend: Arc<dyn PointLedger>,
        credentials_backend: Arc<dyn CredentialValidator>,
        ledger: InMemoryPointLedger,
        users: InMemoryUserDirectory,
    ) -> Self {
        let dependencies =
            AppDependencies::new(AppConfig::default(), ledger_backend, credentials_backend);

        Self {
            router: create_router(dependencies),
            ledger,
            users,
        }
    }

    /// Registers `user` so its token is accepted.
    pub async fn with_user(self, user: UserProfile) -> Self {
        self.users.insert(user).await;
        self
    }

    /// Registers `customer_id` so point events for it are accepted.
    pub async fn with_customer(self, customer_id: CustomerId) -> Self {
        self.ledger.add_customer(customer_id).await;
        self
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(build_request(Method::GET, uri, token, Body::empty()))
            .await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        token: Option<&str>,
        body: &serde_json::Value,
    ) -> TestResponse {
        let mut request = build_request(Method::POST, uri, token, Body::from(body.to_string()));
        request
            .headers_mut()
            .insert(CONTENT_TYPE, "application/json".parse().unwrap());
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

pub fn build_request(method: Method, uri: &str, token: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(body).unwrap()
}
