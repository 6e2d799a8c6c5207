//! In-process stand-in for the products backend.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

/// Canned responses keyed by `tipo` and `fecha`. Unknown keys answer `[]`.
#[derive(Default)]
pub(crate) struct Fixture {
    responses: HashMap<String, Canned>,
    requests: Mutex<Vec<HashMap<String, String>>>,
}

fn key(tipo: &str, fecha: Option<&str>) -> String {
    format!("{}|{}", tipo, fecha.unwrap_or(""))
}

impl Fixture {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn listing(self, tipo: &str, fecha: Option<&str>, body: serde_json::Value) -> Self {
        self.canned(tipo, fecha, StatusCode::OK, body.to_string(), None)
    }

    pub(crate) fn delayed_listing(
        self,
        tipo: &str,
        fecha: Option<&str>,
        body: serde_json::Value,
        delay: Duration,
    ) -> Self {
        self.canned(tipo, fecha, StatusCode::OK, body.to_string(), Some(delay))
    }

    pub(crate) fn failure(self, tipo: &str, fecha: Option<&str>, status: u16) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.canned(tipo, fecha, status, r#"{"detail":"error"}"#.to_string(), None)
    }

    pub(crate) fn raw(self, tipo: &str, fecha: Option<&str>, body: &str) -> Self {
        self.canned(tipo, fecha, StatusCode::OK, body.to_string(), None)
    }

    fn canned(
        mut self,
        tipo: &str,
        fecha: Option<&str>,
        status: StatusCode,
        body: String,
        delay: Option<Duration>,
    ) -> Self {
        self.responses
            .insert(key(tipo, fecha), Canned { status, body, delay });
        self
    }

    /// Binds an ephemeral port on loopback and serves the fixture in the background.
    pub(crate) async fn spawn(self) -> FixtureServer {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let fixture = Arc::new(self);
        let app = Router::new()
            .route("/api/productos/", get(list_products))
            .with_state(fixture.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        FixtureServer {
            base_url: format!("http://{}/api/", addr),
            fixture,
        }
    }
}

pub(crate) struct FixtureServer {
    pub(crate) base_url: String,
    fixture: Arc<Fixture>,
}

impl FixtureServer {
    /// Query parameters of every request received so far, in arrival order.
    pub(crate) fn requests(&self) -> Vec<HashMap<String, String>> {
        self.fixture.requests.lock().unwrap().clone()
    }
}

async fn list_products(
    State(fixture): State<Arc<Fixture>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    fixture.requests.lock().unwrap().push(params.clone());

    let tipo = params.get("tipo").map(String::as_str).unwrap_or("");
    let fecha = params.get("fecha").map(String::as_str);
    let Some(canned) = fixture.responses.get(&key(tipo, fecha)).cloned() else {
        return ([(header::CONTENT_TYPE, "application/json")], "[]").into_response();
    };
    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}
