#![allow(dead_code)]

use serde_json::{Value, json};
use tokio::net::TcpListener;

use todo_api::bootstrap::app_context::{AppContext, AppServices};
use todo_api::bootstrap::config::Config;

pub const AUTH: &str = "x-auth";

/// A running server on an ephemeral port backed by the in-memory store.
pub struct TestApp {
    pub base: String,
    pub client: reqwest::Client,
}

/// A registered user with the token issued at registration.
pub struct Seeded {
    pub id: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

pub async fn spawn_app() -> TestApp {
    let cfg = Config::in_memory("integration-test-secret");
    let services = AppServices::from_config(&cfg)
        .await
        .expect("in-memory services");
    let app = todo_api::presentation::http::router(AppContext::new(cfg, services));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });
    TestApp {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn register(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/users"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("POST /users")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/users/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("POST /users/login")
    }

    pub async fn seed_user(&self, email: &str, password: &str) -> Seeded {
        let resp = self.register(email, password).await;
        assert_eq!(resp.status(), 200);
        let token = auth_token(&resp);
        let body: Value = resp.json().await.expect("user json");
        Seeded {
            id: body["_id"].as_str().expect("_id").to_string(),
            email: email.to_string(),
            password: password.to_string(),
            token,
        }
    }

    pub async fn create_todo(&self, token: &str, text: &str) -> Value {
        let resp = self
            .client
            .post(self.url("/todos"))
            .header(AUTH, token)
            .json(&json!({ "text": text }))
            .send()
            .await
            .expect("POST /todos");
        assert_eq!(resp.status(), 200);
        resp.json().await.expect("todo json")
    }

    pub async fn list_todos(&self, token: &str) -> Vec<Value> {
        let resp = self
            .client
            .get(self.url("/todos"))
            .header(AUTH, token)
            .send()
            .await
            .expect("GET /todos");
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.expect("todos json");
        body["todos"].as_array().cloned().expect("todos array")
    }
}

pub fn auth_token(resp: &reqwest::Response) -> String {
    resp.headers()
        .get(AUTH)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-auth header")
}
