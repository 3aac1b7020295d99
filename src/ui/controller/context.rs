use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::api::Outcome;
use crate::repository::Repository;
use crate::ui::mvi::ScreenState;

use super::cooldown::{Cooldown, CooldownTick};
use super::effects::ScreenEffect;
use super::importer::SubscriptionImporter;
use super::messages;
use super::status::{Field, ViewStatus};
use super::teardown::TeardownSignal;

/// Name given to the profile created from the subscription URL.
pub const IMPORTED_PROFILE_NAME: &str = "Panel";

/// Dependencies shared by every screen a host opens.
#[derive(Clone)]
pub struct ScreenEnv {
    pub repository: Repository,
    pub importer: Arc<dyn SubscriptionImporter>,
    pub email_code_cooldown_seconds: u32,
}

impl ScreenEnv {
    pub fn new(repository: Repository, importer: Arc<dyn SubscriptionImporter>) -> Self {
        Self {
            repository,
            importer,
            email_code_cooldown_seconds: 60,
        }
    }

    pub fn with_cooldown(mut self, seconds: u32) -> Self {
        self.email_code_cooldown_seconds = seconds;
        self
    }
}

/// Everything a screen handler touches.
///
/// State and effects are both gated on the teardown signal, so a handler
/// finishing after the host discarded the screen changes nothing.
pub struct ScreenContext<S: ScreenState> {
    env: ScreenEnv,
    state: watch::Sender<S>,
    effects: mpsc::UnboundedSender<ScreenEffect>,
    cooldown: Cooldown,
    teardown: TeardownSignal,
}

impl<S: ScreenState> ScreenContext<S> {
    pub(crate) fn new(
        env: ScreenEnv,
        state: watch::Sender<S>,
        effects: mpsc::UnboundedSender<ScreenEffect>,
        ticks: mpsc::UnboundedSender<CooldownTick>,
        teardown: TeardownSignal,
    ) -> Self {
        Self {
            env,
            state,
            effects,
            cooldown: Cooldown::new(ticks),
            teardown,
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.env.repository
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> S {
        self.state.borrow().clone()
    }

    pub fn update(&self, f: impl FnOnce(&mut S)) {
        if self.teardown.is_torn_down() {
            return;
        }
        self.state.send_modify(f);
    }

    pub fn emit(&self, effect: ScreenEffect) {
        if self.teardown.is_torn_down() {
            return;
        }
        tracing::debug!(?effect, "Screen effect");
        if self.effects.send(effect).is_err() {
            tracing::trace!("Screen effect dropped (host gone)");
        }
    }

    pub fn set_loading(&self, loading: bool) {
        self.update(|s| s.status_mut().loading = loading);
    }

    pub fn clear_errors(&self) {
        self.update(|s| s.status_mut().clear_errors());
    }

    pub fn set_field_error(&self, field: Field, message: &str) {
        self.update(|s| {
            s.status_mut()
                .field_errors
                .insert(field, message.to_string());
        });
    }

    pub fn set_general_error(&self, message: &str) {
        self.update(|s| s.status_mut().general_error = Some(message.to_string()));
    }

    /// Show a general error and stop loading.
    pub fn fail(&self, message: &str) {
        self.update(|s| {
            let status = s.status_mut();
            status.general_error = Some(message.to_string());
            status.loading = false;
        });
    }

    /// Render a failed outcome onto the status block and stop loading.
    ///
    /// Validation errors land on the `shown` fields, first message each. When
    /// none of them applies the general message is shown instead.
    pub fn show_failure<T>(&self, outcome: &Outcome<T>, shown: &[Field]) {
        self.update(|s| {
            let status = s.status_mut();
            render_failure(status, outcome, shown);
            status.loading = false;
        });
    }

    /// Like [`show_failure`](Self::show_failure) but leaves `loading` alone,
    /// for population steps that keep going after a failed call.
    pub fn record_failure<T>(&self, outcome: &Outcome<T>, shown: &[Field]) {
        self.update(|s| render_failure(s.status_mut(), outcome, shown));
    }

    pub fn start_cooldown(&mut self) {
        let seconds = self.env.email_code_cooldown_seconds;
        self.cooldown.start(seconds);
    }

    pub(crate) fn cooldown(&self) -> &Cooldown {
        &self.cooldown
    }

    /// Fetch the subscription and hand its URL to the importer.
    ///
    /// Best effort: every failure is logged here and never reaches the
    /// caller, whose own operation already succeeded.
    pub async fn import_subscription(&self) {
        match self.env.repository.get_subscribe().await {
            Outcome::Success(data) if !data.subscribe_url.trim().is_empty() => {
                if let Err(err) = self
                    .env
                    .importer
                    .import(IMPORTED_PROFILE_NAME, &data.subscribe_url)
                    .await
                {
                    tracing::warn!(error = %err, "Subscription import failed");
                }
            }
            Outcome::Success(_) => {
                tracing::debug!("No subscription URL to import");
            }
            other => {
                tracing::warn!(outcome = other.kind(), "Subscription fetch failed");
            }
        }
    }
}

fn render_failure<T>(status: &mut ViewStatus, outcome: &Outcome<T>, shown: &[Field]) {
    match outcome {
        Outcome::Success(_) => {}
        Outcome::ValidationError {
            message,
            field_errors,
        } => {
            for (key, list) in field_errors {
                let field = Field::from_key(key).filter(|f| shown.contains(f));
                if let (Some(field), Some(first)) = (field, list.first()) {
                    status.field_errors.insert(field, first.clone());
                }
            }
            if status.field_errors.is_empty() {
                status.general_error = Some(message.clone());
            }
        }
        Outcome::AuthError(message) | Outcome::ServerError(message) => {
            status.general_error = Some(message.clone());
        }
        Outcome::NetworkError(_) => {
            status.general_error = Some(messages::NETWORK_ERROR.to_string());
        }
    }
}
