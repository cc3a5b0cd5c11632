// SPDX-License-Identifier: MIT
//
// Pending-result tracking for the asynchronous `present` lifecycle.
//
// At most one unresolved response slot exists at any time. `begin`
// unconditionally replaces any prior slot — the native SDK permits only
// one active presentation, so an overlapping `present` orphans the
// previous caller's response. `resolve` delivers exactly once; calls
// against a resolved or stale handle are silent no-ops.

use std::sync::{Arc, Mutex};

use sheetkit_core::{MethodResponse, Responder};

/// Identity of one `begin` registration. Stale handles resolve nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingHandle {
    seq: u64,
}

#[derive(Default)]
struct Slot {
    seq: u64,
    responder: Option<Responder>,
}

/// Shared tracker for the single outstanding `present` response.
#[derive(Clone, Default)]
pub struct PendingResults {
    inner: Arc<Mutex<Slot>>,
}

impl PendingResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the responder for a new `present` call.
    ///
    /// Any prior unresolved responder is dropped unanswered.
    pub fn begin(&self, responder: Responder) -> PendingHandle {
        let mut slot = self.lock();
        if slot.responder.is_some() {
            tracing::warn!("replacing unresolved pending result with a new present call");
        }
        slot.seq += 1;
        slot.responder = Some(responder);
        PendingHandle { seq: slot.seq }
    }

    /// Deliver `response` to the caller registered under `handle`.
    ///
    /// The single path by which a native callback completes the original
    /// command. The responder runs outside the lock.
    pub fn resolve(&self, handle: PendingHandle, response: MethodResponse) {
        let responder = {
            let mut slot = self.lock();
            if slot.seq != handle.seq {
                tracing::debug!(seq = handle.seq, "ignoring resolve against stale handle");
                return;
            }
            slot.responder.take()
        };
        match responder {
            Some(respond) => respond(response),
            None => tracing::debug!(seq = handle.seq, "pending result already resolved"),
        }
    }

    /// Whether a response is still owed.
    pub fn is_outstanding(&self) -> bool {
        self.lock().responder.is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Slot> {
        // A poisoned slot still holds valid state; keep resolving.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
