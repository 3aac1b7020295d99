//! Figures shared by the dashboard and account screens.

use crate::api::Outcome;
use crate::repository::Repository;

/// Traffic used against the plan allowance, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub used: i64,
    pub total: i64,
    /// 0..=100, zero when there is no allowance.
    pub percent: u8,
}

impl Usage {
    pub fn new(upload: i64, download: i64, total: i64) -> Self {
        let used = upload.saturating_add(download);
        let percent = if total > 0 {
            (used.max(0) as f64 / total as f64 * 100.0).clamp(0.0, 100.0) as u8
        } else {
            0
        };
        Self {
            used,
            total,
            percent,
        }
    }
}

/// Name of the plan with `plan_id`, looked up in the plan list.
///
/// Any failure only costs the label, so it is logged and mapped to `None`.
pub(crate) async fn resolve_plan_name(
    repository: &Repository,
    plan_id: Option<i64>,
) -> Option<String> {
    let plan_id = plan_id?;
    match repository.get_plans().await {
        Outcome::Success(plans) => plans
            .into_iter()
            .find(|plan| plan.id == plan_id)
            .map(|plan| plan.name),
        other => {
            tracing::debug!(plan_id, outcome = other.kind(), "Plan name lookup failed");
            None
        }
    }
}
