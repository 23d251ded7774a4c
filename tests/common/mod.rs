//! Local axum servers for exercising the real client.
#![allow(dead_code)]

use std::net::TcpListener as StdTcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use tokio::runtime::Runtime;

#[path = "../../src/testing/fake_api.rs"]
pub mod fake_api;

/// A request as seen by the stub.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

type Handler = dyn Fn(&Request) -> (u16, String) + Send + Sync;

/// Server running on its own runtime; stops when dropped.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Request>>>,
    _runtime: Runtime,
}

impl StubServer {
    /// Starts a server on an ephemeral port answering every request with `handler`.
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&Request) -> (u16, String) + Send + Sync + 'static,
    {
        let handler: Arc<Handler> = Arc::new(handler);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        let app = Router::new().fallback(
            move |method: Method, uri: Uri, headers: HeaderMap, body: Bytes| {
                let handler = Arc::clone(&handler);
                let seen = Arc::clone(&seen);
                async move {
                    let request = Request {
                        method: method.to_string(),
                        path: uri
                            .path_and_query()
                            .map_or_else(|| uri.path().to_string(), ToString::to_string),
                        headers,
                        body: String::from_utf8_lossy(&body).into_owned(),
                    };
                    seen.lock().unwrap().push(request.clone());

                    let (status, body) = handler(&request);
                    let status =
                        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            },
        );

        Self::serve(app, requests)
    }

    /// Starts a server that accepts requests and never answers them.
    pub fn silent() -> Self {
        let app = Router::new().fallback(|| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            StatusCode::OK
        });
        Self::serve(app, Arc::default())
    }

    fn serve(app: Router, requests: Arc<Mutex<Vec<Request>>>) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("tokio runtime");
        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .expect("failed to bind stub server");
        let addr = listener.local_addr().expect("no local address");

        runtime.spawn(async move { axum::serve(listener, app).await });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            _runtime: runtime,
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

/// Returns a base URL on which nothing is listening.
pub fn closed_port_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let port = listener.local_addr().expect("no local address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Handler imitating the user-list and login endpoints.
pub fn reqres_like(request: &Request) -> (u16, String) {
    fake_api::route(&request.method, &request.path, &request.body)
}

/// Settings JSON matching [`reqres_like`].
pub const SETTINGS_JSON: &str = r#"{
    "TestUserId": 7,
    "TestUserEmail": "michael.lawson@reqres.in",
    "TestUserFirstName": "Michael",
    "TestUserLastName": "Lawson",
    "TestUserAvatarUrl": "https://reqres.in/img/faces/7-image.jpg",
    "TestUserPassword": "cityslicka",
    "TestUserLoginToken": "QpwL5tke4Pnpja7X4"
}"#;
