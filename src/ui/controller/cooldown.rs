//! Resend countdown owned by a screen controller.
//!
//! The timer runs as its own task and reports each second back to the
//! controller loop as a [`CooldownTick`], so view state is still only
//! mutated on the controller's task. Starting a new countdown cancels the
//! previous one; ticks already queued from it carry a stale generation and
//! are dropped by [`Cooldown::accepts`].

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownTick {
    pub generation: u64,
    pub remaining: u32,
}

pub struct Cooldown {
    ticks: mpsc::UnboundedSender<CooldownTick>,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl Cooldown {
    pub fn new(ticks: mpsc::UnboundedSender<CooldownTick>) -> Self {
        Self {
            ticks,
            generation: 0,
            task: None,
        }
    }

    /// Count down from `seconds` to zero, one tick per second, starting now.
    pub fn start(&mut self, seconds: u32) {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let ticks = self.ticks.clone();
        self.task = Some(tokio::spawn(async move {
            for remaining in (0..=seconds).rev() {
                if ticks.send(CooldownTick { generation, remaining }).is_err() {
                    return;
                }
                if remaining > 0 {
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!(generation = self.generation, "Cooldown cancelled");
        }
    }

    /// Whether a tick belongs to the countdown currently running.
    pub fn accepts(&self, tick: &CooldownTick) -> bool {
        tick.generation == self.generation
    }
}

impl Drop for Cooldown {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
