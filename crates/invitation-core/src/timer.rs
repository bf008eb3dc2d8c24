//! Cancelable one-shot timer slots.
//!
//! Transient visual state (confetti overlay, thank-you screen) reverts after
//! a fixed delay. Each such delay owns a [`TimerSlot`]: arming it hands out a
//! [`Ticket`], and only the most recently armed, uncancelled ticket is
//! allowed to fire. Re-arming supersedes the pending ticket, so a later
//! action always overwrites an earlier timer's effect.
//!
//! The slot holds no clock. Callers pair it with whatever sleep primitive
//! their runtime offers and call [`TimerSlot::fire`] when it elapses.

/// Handle for one scheduled firing
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Ticket(u64);

/// A single cancelable one-shot delay
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerSlot {
    generation: u64,
    armed: Option<u64>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a new firing, superseding any pending one
    pub fn arm(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.armed = Some(self.generation);
        Ticket(self.generation)
    }

    /// Drop the pending firing, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.armed.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.armed.is_some()
    }

    /// Consume `ticket` if it is still the live one.
    ///
    /// Returns `true` exactly once per live ticket; stale or cancelled
    /// tickets return `false`.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.armed == Some(ticket.0) {
            self.armed = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;

    #[test]
    fn fires_once() {
        let mut slot = TimerSlot::new();
        let ticket = slot.arm();
        assert!(slot.is_pending());
        assert!(slot.fire(ticket));
        assert!(!slot.fire(ticket));
        assert!(!slot.is_pending());
    }

    #[test]
    fn rearm_supersedes() {
        let mut slot = TimerSlot::new();
        let first = slot.arm();
        let second = slot.arm();
        assert!(!slot.fire(first));
        assert!(slot.fire(second));
    }

    #[test]
    fn cancel_blocks_firing() {
        let mut slot = TimerSlot::new();
        let ticket = slot.arm();
        assert!(slot.cancel());
        assert!(!slot.cancel());
        assert!(!slot.fire(ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn later_action_overwrites_pending_timer() {
        let slot = Arc::new(Mutex::new(TimerSlot::new()));
        let fired = Arc::new(Mutex::new(Vec::new()));

        let mut handles = Vec::new();
        for (label, delay_ms) in [("first", 4000u64), ("second", 4000u64)] {
            let ticket = slot.lock().unwrap().arm();
            let slot = slot.clone();
            let fired = fired.clone();
            handles.push(tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                if slot.lock().unwrap().fire(ticket) {
                    fired.lock().unwrap().push(label);
                }
            }));
            tokio::time::sleep(Duration::from_millis(1000)).await;
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(*fired.lock().unwrap(), vec!["second"]);
    }
}
