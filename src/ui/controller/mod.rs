//! Generic screen controller.
//!
//! Every screen runs as one cooperative task:
//!
//! ```text
//! Initializing ──load()──→ Ready ──teardown──→ Terminated
//!                            │
//!          select! { lifecycle event | user request | cooldown tick }
//! ```
//!
//! A screen supplies its initial population ([`Screen::load`]), its request
//! handlers ([`Screen::handle`]) and optionally lifecycle and cooldown
//! reactions. The controller owns the state sink and both input queues.

mod context;
mod cooldown;
mod effects;
mod importer;
pub mod messages;
mod status;
mod teardown;

use std::future::Future;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::ui::mvi::{Intent, ScreenState};

pub use context::{ScreenContext, ScreenEnv, IMPORTED_PROFILE_NAME};
pub use cooldown::{Cooldown, CooldownTick};
pub use effects::{Destination, LifecycleEvent, ScreenEffect, ScreenResult};
pub use importer::{ImportError, LogImporter, SubscriptionImporter};
pub use status::{Field, ViewStatus};
pub use teardown::TeardownSignal;

/// Behaviour of one screen, driven by [`ScreenController`].
#[async_trait]
pub trait Screen: Send + 'static {
    type Request: Intent;
    type State: ScreenState;

    fn name(&self) -> &'static str;

    /// Initial state, published before [`Screen::load`] runs.
    fn initial_state(&self) -> Self::State {
        Self::State::default()
    }

    /// Eager population on entering the ready state.
    async fn load(&mut self, _ctx: &mut ScreenContext<Self::State>) {}

    async fn handle(&mut self, request: Self::Request, ctx: &mut ScreenContext<Self::State>);

    /// Resuming re-runs the initial population; results of child screens are
    /// ignored unless a screen cares.
    async fn on_lifecycle(&mut self, event: LifecycleEvent, ctx: &mut ScreenContext<Self::State>) {
        if event == LifecycleEvent::Resumed {
            self.load(ctx).await;
        }
    }

    fn on_cooldown(&mut self, _remaining: u32, _ctx: &mut ScreenContext<Self::State>) {}
}

/// The actor owning a screen, its context and its input queues.
pub struct ScreenController<S: Screen> {
    screen: S,
    ctx: ScreenContext<S::State>,
    requests: mpsc::UnboundedReceiver<S::Request>,
    lifecycle: mpsc::UnboundedReceiver<LifecycleEvent>,
    ticks: mpsc::UnboundedReceiver<CooldownTick>,
    teardown: TeardownSignal,
    processed: watch::Sender<u64>,
}

impl<S: Screen> ScreenController<S> {
    /// Spawn the controller task and hand back the host's end.
    pub fn spawn(screen: S, env: ScreenEnv) -> ScreenHandle<S> {
        let (request_tx, requests) = mpsc::unbounded_channel();
        let (lifecycle_tx, lifecycle) = mpsc::unbounded_channel();
        let (tick_tx, ticks) = mpsc::unbounded_channel();
        let (effect_tx, effects) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(screen.initial_state());
        let (processed_tx, processed_rx) = watch::channel(0);
        let teardown = TeardownSignal::new();

        let ctx = ScreenContext::new(env, state_tx, effect_tx, tick_tx, teardown.clone());
        let controller = Self {
            screen,
            ctx,
            requests,
            lifecycle,
            ticks,
            teardown: teardown.clone(),
            processed: processed_tx,
        };
        let task = tokio::spawn(controller.run());

        ScreenHandle {
            requests: request_tx,
            lifecycle: lifecycle_tx,
            state: state_rx,
            effects,
            processed: processed_rx,
            // The initial load counts as the first input.
            submitted: 1,
            teardown,
            task: Some(task),
        }
    }

    async fn run(mut self) {
        let name = self.screen.name();
        tracing::info!(screen = name, "Screen started");

        let teardown = self.teardown.clone();
        if !until_teardown(&teardown, self.screen.load(&mut self.ctx)).await {
            tracing::info!(screen = name, "Screen torn down while loading");
            return;
        }
        mark_processed(&self.processed);

        loop {
            // No `biased;`: whichever source is ready first wins. Both queues
            // are unbounded so nothing waiting is ever dropped.
            tokio::select! {
                _ = teardown.wait() => break,
                Some(event) = self.lifecycle.recv() => {
                    tracing::debug!(screen = name, ?event, "Lifecycle event");
                    if !until_teardown(&teardown, self.screen.on_lifecycle(event, &mut self.ctx)).await {
                        break;
                    }
                    mark_processed(&self.processed);
                }
                Some(request) = self.requests.recv() => {
                    tracing::debug!(screen = name, ?request, "Screen request");
                    if !until_teardown(&teardown, self.screen.handle(request, &mut self.ctx)).await {
                        break;
                    }
                    mark_processed(&self.processed);
                }
                Some(tick) = self.ticks.recv() => {
                    if self.ctx.cooldown().accepts(&tick) {
                        self.screen.on_cooldown(tick.remaining, &mut self.ctx);
                    }
                }
            }
        }

        tracing::info!(screen = name, "Screen terminated");
    }
}

fn mark_processed(processed: &watch::Sender<u64>) {
    processed.send_modify(|count| *count += 1);
}

/// Run `fut` unless teardown wins first. Returns false on teardown, in which
/// case `fut` (and any request it was awaiting) is dropped.
async fn until_teardown(teardown: &TeardownSignal, fut: impl Future<Output = ()>) -> bool {
    tokio::select! {
        _ = teardown.wait() => false,
        _ = fut => true,
    }
}

/// Host-side handle to a running screen.
///
/// Dropping the handle tears the screen down.
pub struct ScreenHandle<S: Screen> {
    requests: mpsc::UnboundedSender<S::Request>,
    lifecycle: mpsc::UnboundedSender<LifecycleEvent>,
    state: watch::Receiver<S::State>,
    effects: mpsc::UnboundedReceiver<ScreenEffect>,
    processed: watch::Receiver<u64>,
    submitted: u64,
    teardown: TeardownSignal,
    task: Option<JoinHandle<()>>,
}

impl<S: Screen> ScreenHandle<S> {
    /// Queue a user request. Returns false if the controller is gone.
    pub fn send(&mut self, request: S::Request) -> bool {
        let sent = self.requests.send(request).is_ok();
        if sent {
            self.submitted += 1;
        }
        sent
    }

    /// Deliver a lifecycle event. Returns false if the controller is gone.
    pub fn notify(&mut self, event: LifecycleEvent) -> bool {
        let sent = self.lifecycle.send(event).is_ok();
        if sent {
            self.submitted += 1;
        }
        sent
    }

    /// Current view state.
    pub fn state(&self) -> S::State {
        self.state.borrow().clone()
    }

    /// Receiver for observing every state change.
    pub fn subscribe(&self) -> watch::Receiver<S::State> {
        self.state.clone()
    }

    /// Wait until the controller has finished handling everything submitted
    /// so far, including the initial load.
    pub async fn settle(&mut self) {
        let target = self.submitted;
        if self.processed.wait_for(|count| *count >= target).await.is_err() {
            tracing::trace!("Screen settled by termination");
        }
    }

    pub async fn next_effect(&mut self) -> Option<ScreenEffect> {
        self.effects.recv().await
    }

    /// Effects emitted so far and not yet taken.
    pub fn drain_effects(&mut self) -> Vec<ScreenEffect> {
        let mut drained = Vec::new();
        while let Ok(effect) = self.effects.try_recv() {
            drained.push(effect);
        }
        drained
    }

    pub fn is_torn_down(&self) -> bool {
        self.teardown.is_torn_down()
    }

    /// Tear the screen down and wait for its task to stop.
    pub async fn teardown(mut self) {
        self.teardown.signal();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "Screen task ended abnormally");
            }
        }
    }
}

impl<S: Screen> Drop for ScreenHandle<S> {
    fn drop(&mut self) {
        self.teardown.signal();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
