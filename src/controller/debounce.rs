// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A cancelable one-shot timer, driven by explicit timestamps.
//!
//! The host owns the real clock: it reports `now` on every event and polls when
//! its timer fires. Scheduling again before the deadline replaces the pending
//! value, so at most one value is ever pending and earlier ones are dropped
//! unexecuted.

use crate::types::Millis;

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    value: T,
    deadline: Millis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// (Re)start the timer with `value`, superseding anything pending.
    pub fn schedule(&mut self, value: T, now: Millis) {
        self.pending = Some(Pending {
            value,
            deadline: now.after(self.delay_ms),
        });
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Take the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Millis) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if due {
            self.cancel()
        } else {
            None
        }
    }
}
