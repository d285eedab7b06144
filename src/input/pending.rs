use std::time::{Duration, Instant};

/// Identifies one arming of a [`PendingAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingToken(u64);

/// A deferred action that fires once its deadline passes unless canceled.
///
/// Holds at most one payload. Arming again replaces the previous payload,
/// so a newer event always supersedes an older one. The owner drives it by
/// calling [`poll`](PendingAction::poll) with the current time.
#[derive(Debug)]
pub struct PendingAction<T> {
    slot: Option<(PendingToken, T, Instant)>,
    next_token: u64,
}

impl<T> Default for PendingAction<T> {
    fn default() -> Self {
        Self {
            slot: None,
            next_token: 0,
        }
    }
}

impl<T> PendingAction<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to fire `delay` after `now`.
    pub fn arm(&mut self, payload: T, now: Instant, delay: Duration) -> PendingToken {
        let token = PendingToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.slot = Some((token, payload, now + delay));
        token
    }

    /// Drop whatever is armed, returning its payload.
    pub fn cancel(&mut self) -> Option<T> {
        self.slot.take().map(|(_, payload, _)| payload)
    }

    /// Take the payload if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.deadline().is_some_and(|deadline| now >= deadline) {
            self.cancel()
        } else {
            None
        }
    }

    pub fn is_armed(&self) -> bool {
        self.slot.is_some()
    }

    /// Whether `token` is the arming currently waiting to fire.
    pub fn is_current(&self, token: PendingToken) -> bool {
        matches!(&self.slot, Some((t, _, _)) if *t == token)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.slot.as_ref().map(|(_, _, deadline)| *deadline)
    }
}
