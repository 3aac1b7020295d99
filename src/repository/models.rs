//! Immutable records decoded from backend payloads.
//!
//! Every field defaults when absent. Optional prices are `None` when that
//! purchase period is not offered, which is not the same as free.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub auth_data: Option<String>,
}

impl LoginResponse {
    /// Credential to send as `Authorization`: `auth_data`, else `token`.
    pub fn credential(&self) -> &str {
        self.auth_data
            .as_deref()
            .or(self.token.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SystemConfig {
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_email_verify: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_invite_force: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_recaptcha: bool,
    #[serde(default)]
    pub recaptcha_site_key: Option<String>,
    #[serde(default)]
    pub app_description: Option<String>,
    #[serde(default)]
    pub app_url: Option<String>,
    #[serde(default)]
    pub tos_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub transfer_enable: i64,
    #[serde(default)]
    pub last_login_at: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: i64,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub banned: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub remind_expire: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub remind_traffic: bool,
    #[serde(default)]
    pub expired_at: Option<i64>,
    /// Account balance in cents.
    #[serde(default, deserialize_with = "null_default")]
    pub balance: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub commission_balance: i64,
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default)]
    pub discount: Option<i64>,
    #[serde(default)]
    pub commission_rate: Option<i64>,
    #[serde(default)]
    pub telegram_id: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub uuid: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub u: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub d: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubscribeData {
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub token: String,
    #[serde(default)]
    pub expired_at: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub u: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub d: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub transfer_enable: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub subscribe_url: String,
    #[serde(default)]
    pub reset_day: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "null_default")]
    pub u: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub d: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub transfer_enable: i64,
    #[serde(default)]
    pub expired_at: Option<i64>,
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default)]
    pub subscribe_url: Option<String>,
    #[serde(default)]
    pub reset_day: Option<i64>,
}

/// Purchase period keys as the order endpoint expects them.
pub const PERIODS: [&str; 7] = [
    "month_price",
    "quarter_price",
    "half_year_price",
    "year_price",
    "two_year_price",
    "three_year_price",
    "onetime_price",
];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Plan {
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub group_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub transfer_enable: i64,
    #[serde(default)]
    pub month_price: Option<i64>,
    #[serde(default)]
    pub quarter_price: Option<i64>,
    #[serde(default)]
    pub half_year_price: Option<i64>,
    #[serde(default)]
    pub year_price: Option<i64>,
    #[serde(default)]
    pub two_year_price: Option<i64>,
    #[serde(default)]
    pub three_year_price: Option<i64>,
    #[serde(default)]
    pub onetime_price: Option<i64>,
    #[serde(default)]
    pub reset_price: Option<i64>,
    #[serde(default)]
    pub sort: Option<i64>,
    #[serde(default = "default_true", deserialize_with = "flexible_bool_true")]
    pub renew: bool,
    #[serde(default)]
    pub reset_traffic_method: Option<i64>,
}

/// A purchasable period of a plan with its price in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanPeriod {
    pub key: &'static str,
    pub price: i64,
}

impl Plan {
    pub fn price_for(&self, period: &str) -> Option<i64> {
        match period {
            "month_price" => self.month_price,
            "quarter_price" => self.quarter_price,
            "half_year_price" => self.half_year_price,
            "year_price" => self.year_price,
            "two_year_price" => self.two_year_price,
            "three_year_price" => self.three_year_price,
            "onetime_price" => self.onetime_price,
            "reset_price" => self.reset_price,
            _ => None,
        }
    }

    /// Offered periods in display order, skipping the ones without a price.
    pub fn periods(&self) -> Vec<PlanPeriod> {
        PERIODS
            .iter()
            .filter_map(|&key| self.price_for(key).map(|price| PlanPeriod { key, price }))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerNode {
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub group_id: Vec<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub host: String,
    #[serde(default, deserialize_with = "null_default")]
    pub port: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub server_port: i64,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default = "default_rate", deserialize_with = "flexible_string")]
    pub rate: String,
    #[serde(rename = "class", default, deserialize_with = "null_default")]
    pub server_class: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub online: i64,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub server_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Order {
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    #[serde(default)]
    pub invite_user_id: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub plan_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub period: String,
    #[serde(default, deserialize_with = "null_default")]
    pub trade_no: String,
    #[serde(default, deserialize_with = "null_default")]
    pub total_amount: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub status: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub commission_status: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub commission_balance: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaymentMethod {
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub payment: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// What the backend wants the client to do after checkout.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CheckoutResult {
    /// `1`: open `data` as a payment URL. `0`/`-1`: paid, nothing to do.
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub kind: i64,
    #[serde(default, deserialize_with = "flexible_optional_string")]
    pub data: Option<String>,
}

impl CheckoutResult {
    pub fn payment_url(&self) -> Option<&str> {
        match (self.kind, self.data.as_deref()) {
            (1, Some(url)) if !url.trim().is_empty() => Some(url),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.kind, 0 | -1)
    }
}

fn default_true() -> bool {
    true
}

fn default_rate() -> String {
    "1".to_string()
}

/// `null` decodes as the type's default.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn bool_from_value(value: Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.as_str() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Backend flags arrive as `true`, `1` or `"1"`.
fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(bool_from_value(Value::deserialize(deserializer)?).unwrap_or(false))
}

fn flexible_bool_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(bool_from_value(Value::deserialize(deserializer)?).unwrap_or(true))
}

fn flexible_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flexible_optional_string(deserializer)?.unwrap_or_else(default_rate))
}

fn flexible_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plan_periods_skip_missing_prices() {
        let plan: Plan = serde_json::from_value(json!({
            "id": 3,
            "name": "Pro",
            "month_price": 1000,
            "year_price": 9900,
            "quarter_price": null
        }))
        .unwrap();

        let keys: Vec<_> = plan.periods().iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["month_price", "year_price"]);
        assert_eq!(plan.price_for("quarter_price"), None);
        assert!(plan.renew);
    }

    #[test]
    fn test_zero_price_is_offered() {
        let plan: Plan = serde_json::from_value(json!({"onetime_price": 0})).unwrap();
        assert_eq!(
            plan.periods(),
            vec![PlanPeriod {
                key: "onetime_price",
                price: 0
            }]
        );
    }

    #[test]
    fn test_numeric_flags_decode_as_bools() {
        let config: SystemConfig = serde_json::from_value(json!({
            "is_email_verify": 1,
            "is_invite_force": 0,
            "is_recaptcha": null
        }))
        .unwrap();
        assert!(config.is_email_verify);
        assert!(!config.is_invite_force);
        assert!(!config.is_recaptcha);
    }

    #[test]
    fn test_nulls_fall_back_to_defaults() {
        let user: UserInfo = serde_json::from_value(json!({
            "email": null,
            "balance": null,
            "plan_id": 2
        }))
        .unwrap();
        assert_eq!(user.email, "");
        assert_eq!(user.balance, 0);
        assert_eq!(user.plan_id, Some(2));
    }

    #[test]
    fn test_login_credential_prefers_auth_data() {
        let both = LoginResponse {
            token: Some("tok".to_string()),
            auth_data: Some("Bearer tok".to_string()),
        };
        assert_eq!(both.credential(), "Bearer tok");

        let token_only = LoginResponse {
            token: Some("tok".to_string()),
            auth_data: None,
        };
        assert_eq!(token_only.credential(), "tok");
        assert_eq!(LoginResponse::default().credential(), "");
    }

    #[test]
    fn test_checkout_result_payment_url() {
        let redirect: CheckoutResult =
            serde_json::from_value(json!({"type": 1, "data": "https://pay.example/x"})).unwrap();
        assert_eq!(redirect.payment_url(), Some("https://pay.example/x"));
        assert!(!redirect.is_completed());

        let paid: CheckoutResult = serde_json::from_value(json!({"type": -1, "data": true})).unwrap();
        assert_eq!(paid.payment_url(), None);
        assert!(paid.is_completed());
    }

    #[test]
    fn test_server_rate_accepts_numbers() {
        let node: ServerNode =
            serde_json::from_value(json!({"name": "Tokyo", "rate": 1.5, "class": 2})).unwrap();
        assert_eq!(node.rate, "1.5");
        assert_eq!(node.server_class, 2);
    }
}
