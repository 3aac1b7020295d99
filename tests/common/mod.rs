//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use subpanel::api::{HttpRequest, RawResponse, Transport, TransportError};
use subpanel::repository::Repository;
use subpanel::session::Session;
use subpanel::ui::controller::{
    ImportError, Screen, ScreenController, ScreenEnv, ScreenHandle, SubscriptionImporter,
};

pub const BASE_URL: &str = "http://panel.test/api/v1";

#[derive(Clone)]
struct Scripted {
    result: Result<RawResponse, TransportError>,
    delay: Duration,
}

/// In-memory transport answering per endpoint path.
///
/// Each path holds a queue of responses; the last one is repeated once the
/// queue is down to it. Unscripted paths answer 404.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<String, VecDeque<Scripted>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, path: &str, status: u16, body: &str) {
        self.push(path, Ok(RawResponse::new(status, body)), Duration::ZERO);
    }

    pub fn respond_after(&self, path: &str, delay: Duration, status: u16, body: &str) {
        self.push(path, Ok(RawResponse::new(status, body)), delay);
    }

    pub fn fail(&self, path: &str, error: TransportError) {
        self.push(path, Err(error), Duration::ZERO);
    }

    fn push(&self, path: &str, result: Result<RawResponse, TransportError>, delay: Duration) {
        self.routes
            .lock()
            .entry(path.to_string())
            .or_default()
            .push_back(Scripted { result, delay });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Endpoint paths requested so far, in order.
    pub fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|r| r.url.trim_start_matches(BASE_URL).to_string())
            .collect()
    }

    pub fn count(&self, path: &str) -> usize {
        self.paths().iter().filter(|p| *p == path).count()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let path = request.url.trim_start_matches(BASE_URL).to_string();
        self.requests.lock().push(request);

        let scripted = {
            let mut routes = self.routes.lock();
            match routes.get_mut(&path) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match scripted {
            Some(Scripted { result, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Ok(RawResponse::new(404, r#"{"message":"Not found"}"#)),
        }
    }
}

/// Importer recording every hand-off, optionally failing each one.
#[derive(Default)]
pub struct RecordingImporter {
    pub imported: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingImporter {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn imported(&self) -> Vec<(String, String)> {
        self.imported.lock().clone()
    }
}

#[async_trait]
impl SubscriptionImporter for RecordingImporter {
    async fn import(&self, name: &str, url: &str) -> Result<(), ImportError> {
        self.imported.lock().push((name.to_string(), url.to_string()));
        if self.fail {
            return Err(ImportError::Failed("profile store unavailable".to_string()));
        }
        Ok(())
    }
}

/// Everything a screen test needs, wired over one scripted transport.
pub struct Harness {
    pub transport: Arc<ScriptedTransport>,
    pub session: Session,
    pub importer: Arc<RecordingImporter>,
    pub env: ScreenEnv,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_importer(RecordingImporter::default())
    }

    pub fn with_importer(importer: RecordingImporter) -> Self {
        let transport = ScriptedTransport::new();
        let session = Session::in_memory();
        let importer = Arc::new(importer);
        let repository = Repository::new(transport.clone(), BASE_URL, session.clone());
        let env = ScreenEnv::new(repository, importer.clone());
        Self {
            transport,
            session,
            importer,
            env,
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.env.repository
    }

    /// Spawn `screen` and wait for its initial load.
    pub async fn open<S: Screen>(&self, screen: S) -> ScreenHandle<S> {
        let mut handle = ScreenController::spawn(screen, self.env.clone());
        handle.settle().await;
        handle
    }
}

pub fn json_body(request: &HttpRequest) -> serde_json::Value {
    request
        .body
        .as_deref()
        .and_then(|body| serde_json::from_str(body).ok())
        .unwrap_or(serde_json::Value::Null)
}
