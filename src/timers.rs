//! Dioxus side of the one-shot timers.
//!
//! [`OneShot`] pairs a core [`TimerSlot`] with the spawned sleep task so a
//! delay can be superseded or cancelled. Cancelling aborts the task; the
//! slot additionally guarantees a stale task never runs its action.

use std::time::Duration;

use dioxus::prelude::*;
use invitation_core::TimerSlot;

/// A cancelable delayed action owned by a component
#[derive(Clone, Copy)]
pub struct OneShot {
    slot: Signal<TimerSlot>,
    task: Signal<Option<Task>>,
}

impl OneShot {
    /// Run `action` after `delay`, replacing any pending action
    pub fn schedule(&mut self, delay: Duration, action: impl FnOnce() + 'static) {
        self.cancel();
        let ticket = self.slot.write().arm();
        let mut slot = self.slot;
        let task = spawn(async move {
            tokio::time::sleep(delay).await;
            if slot.write().fire(ticket) {
                action();
            }
        });
        self.task.set(Some(task));
    }

    /// Drop the pending action, if any
    pub fn cancel(&mut self) {
        if self.slot.write().cancel() {
            tracing::debug!("Cancelled pending timer");
        }
        if let Some(task) = self.task.write().take() {
            task.cancel();
        }
    }
}

/// Hook creating a [`OneShot`] scoped to the calling component
pub fn use_one_shot() -> OneShot {
    let slot = use_signal(TimerSlot::new);
    let task = use_signal(|| None);
    OneShot { slot, task }
}
