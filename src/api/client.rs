use std::sync::Arc;

use serde_json::{Map, Value};

use super::classifier::classify_result;
use super::outcome::{Outcome, Payload};
use super::transport::{HttpMethod, HttpRequest, Transport};
use crate::session::Session;

/// Builds requests against the backend and classifies what comes back.
///
/// The session is read on every request so a credential stored by one
/// operation is used by the next.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>, session: Session) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, endpoint: &str) -> Outcome<Payload> {
        let request = self.build_request(endpoint, HttpMethod::Get, None);
        self.send(request).await
    }

    pub async fn post(&self, endpoint: &str, body: Map<String, Value>) -> Outcome<Payload> {
        let body = Value::Object(body).to_string();
        let request = self.build_request(endpoint, HttpMethod::Post, Some(body));
        self.send(request).await
    }

    fn build_request(&self, endpoint: &str, method: HttpMethod, body: Option<String>) -> HttpRequest {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];

        // Sent verbatim, the stored credential already carries its scheme.
        let auth_data = self.session.auth_data();
        if !auth_data.expose().trim().is_empty() {
            headers.push(("Authorization".to_string(), auth_data.expose().to_string()));
        }

        HttpRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body,
        }
    }

    async fn send(&self, request: HttpRequest) -> Outcome<Payload> {
        let method = request.method;
        let url = request.url.clone();
        let outcome = classify_result(self.transport.execute(request).await);

        tracing::debug!(
            method = method.as_str(),
            url = %url,
            outcome = outcome.kind(),
            "API request finished"
        );

        outcome
    }
}
