//! Domain operations over the backend API.
//!
//! One method per backend action. Each returns an [`Outcome`] so screens
//! handle failures uniformly; only the success payload type differs.
//!
//! Decoding policy:
//! - list endpoints degrade a malformed payload to an empty list
//! - record endpoints report a malformed payload as `ServerError`

pub mod models;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::api::{
    endpoints, ApiClient, Outcome, Payload, ReqwestTransport, TimeoutConfig, Transport,
    TransportError,
};
use crate::config::Config;
use crate::session::Session;

pub use models::{
    CheckoutResult, DashboardStats, LoginResponse, Order, PaymentMethod, Plan, PlanPeriod,
    ServerNode, SubscribeData, SystemConfig, UserInfo, PERIODS,
};

#[derive(Clone)]
pub struct Repository {
    api: ApiClient,
    session: Session,
}

impl Repository {
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>, session: Session) -> Self {
        let api = ApiClient::new(transport, base_url, session.clone());
        Self { api, session }
    }

    /// Repository over the production `reqwest` transport.
    pub fn from_config(config: &Config, session: Session) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(TimeoutConfig::from(&config.api))?;
        Ok(Self::new(Arc::new(transport), config.api.base_url.clone(), session))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn user_email(&self) -> String {
        self.session.user_email()
    }

    pub fn stored_subscribe_url(&self) -> String {
        self.session.subscribe_url()
    }

    pub async fn login(&self, email: &str, password: &str) -> Outcome<LoginResponse> {
        let mut body = Map::new();
        body.insert("email".into(), email.into());
        body.insert("password".into(), password.into());

        self.api
            .post(endpoints::LOGIN, body)
            .await
            .and_then(|payload| decode_record::<LoginResponse>(payload.data, "login response"))
            .and_then(|response| self.remember_login(response, email))
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        invite_code: Option<&str>,
        email_code: Option<&str>,
    ) -> Outcome<LoginResponse> {
        let mut body = Map::new();
        body.insert("email".into(), email.into());
        body.insert("password".into(), password.into());
        if let Some(code) = invite_code {
            body.insert("invite_code".into(), code.into());
        }
        if let Some(code) = email_code {
            body.insert("email_code".into(), code.into());
        }

        self.api
            .post(endpoints::REGISTER, body)
            .await
            .and_then(|payload| decode_record::<LoginResponse>(payload.data, "register response"))
            .and_then(|response| self.remember_login(response, email))
    }

    pub async fn forgot_password(
        &self,
        email: &str,
        password: &str,
        email_code: &str,
    ) -> Outcome<()> {
        let mut body = Map::new();
        body.insert("email".into(), email.into());
        body.insert("password".into(), password.into());
        body.insert("email_code".into(), email_code.into());

        self.api.post(endpoints::FORGOT_PASSWORD, body).await.map(|_| ())
    }

    pub async fn send_email_verify(&self, email: &str) -> Outcome<()> {
        let mut body = Map::new();
        body.insert("email".into(), email.into());

        self.api.post(endpoints::SEND_EMAIL_VERIFY, body).await.map(|_| ())
    }

    pub async fn get_config(&self) -> Outcome<SystemConfig> {
        self.api
            .get(endpoints::GET_CONFIG)
            .await
            .and_then(|payload| decode_record(payload.data, "system config"))
    }

    pub async fn get_user_info(&self) -> Outcome<UserInfo> {
        self.api
            .get(endpoints::GET_USER_INFO)
            .await
            .and_then(|payload| decode_record(payload.data, "user info"))
    }

    /// Fetch subscription data, caching a non-blank subscribe URL in the
    /// session whether or not the caller uses it.
    pub async fn get_subscribe(&self) -> Outcome<SubscribeData> {
        self.api
            .get(endpoints::GET_SUBSCRIBE)
            .await
            .and_then(|payload| decode_record::<SubscribeData>(payload.data, "subscription"))
            .map(|data| {
                if !data.subscribe_url.trim().is_empty() {
                    self.session.set_subscribe_url(&data.subscribe_url);
                }
                data
            })
    }

    pub async fn get_dashboard_stats(&self) -> Outcome<DashboardStats> {
        self.api
            .get(endpoints::GET_DASHBOARD)
            .await
            .and_then(|payload| decode_record(payload.data, "dashboard stats"))
    }

    pub async fn get_plans(&self) -> Outcome<Vec<Plan>> {
        self.api
            .get(endpoints::GET_PLANS)
            .await
            .map(|payload| decode_list(payload, "plans"))
    }

    /// Plans visible without a session.
    pub async fn get_public_plans(&self) -> Outcome<Vec<Plan>> {
        self.api
            .get(endpoints::GET_PUBLIC_PLANS)
            .await
            .map(|payload| decode_list(payload, "public plans"))
    }

    pub async fn get_servers(&self) -> Outcome<Vec<ServerNode>> {
        self.api
            .get(endpoints::GET_SERVERS)
            .await
            .map(|payload| decode_list(payload, "servers"))
    }

    pub async fn get_orders(&self) -> Outcome<Vec<Order>> {
        self.api
            .get(endpoints::GET_ORDERS)
            .await
            .map(|payload| decode_list(payload, "orders"))
    }

    pub async fn get_payment_methods(&self) -> Outcome<Vec<PaymentMethod>> {
        self.api
            .get(endpoints::GET_PAYMENT_METHODS)
            .await
            .map(|payload| decode_list(payload, "payment methods"))
    }

    /// Create an order and return its trade number.
    pub async fn create_order(
        &self,
        plan_id: i64,
        period: &str,
        coupon_code: Option<&str>,
    ) -> Outcome<String> {
        let mut body = Map::new();
        body.insert("plan_id".into(), plan_id.into());
        body.insert("period".into(), period.into());
        if let Some(code) = coupon_code {
            body.insert("coupon_code".into(), code.into());
        }

        self.api
            .post(endpoints::CREATE_ORDER, body)
            .await
            .map(|payload| match payload.data {
                Value::String(trade_no) => trade_no,
                other => other.to_string(),
            })
    }

    pub async fn checkout_order(&self, trade_no: &str, method: i64) -> Outcome<CheckoutResult> {
        let mut body = Map::new();
        body.insert("trade_no".into(), trade_no.into());
        body.insert("method".into(), method.into());

        self.api
            .post(endpoints::CHECKOUT_ORDER, body)
            .await
            .and_then(decode_checkout)
    }

    /// Clear the session. Local only, never fails.
    pub fn logout(&self) {
        self.session.clear();
    }

    fn remember_login(&self, response: LoginResponse, email: &str) -> Outcome<LoginResponse> {
        let credential = response.credential();
        if !credential.trim().is_empty() {
            let stored = self.session.store_credentials(
                credential,
                response.token.as_deref().unwrap_or_default(),
                email,
            );
            if let Err(err) = stored {
                tracing::error!(error = %err, "Failed to persist session");
                return Outcome::ServerError(format!("Failed to save session: {}", err));
            }
        }
        Outcome::Success(response)
    }
}

/// Checkout responses put `type` next to `data` at the top level, so the
/// envelope is the record. Bodies without `type` fall back to `data`.
fn decode_checkout(payload: Payload) -> Outcome<CheckoutResult> {
    let has_type = payload
        .envelope
        .as_object()
        .is_some_and(|object| object.contains_key("type"));
    let source = if has_type { payload.envelope } else { payload.data };
    decode_record(source, "checkout result")
}

fn decode_record<T: DeserializeOwned>(value: Value, what: &str) -> Outcome<T> {
    match serde_json::from_value(value) {
        Ok(record) => Outcome::Success(record),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to decode {}", what);
            Outcome::ServerError(format!("Failed to decode {}: {}", what, err))
        }
    }
}

fn decode_list<T: DeserializeOwned>(payload: Payload, what: &str) -> Vec<T> {
    match serde_json::from_value(payload.data) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, "Malformed {} payload, treating as empty", what);
            Vec::new()
        }
    }
}
