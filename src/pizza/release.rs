// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::errors::PizzaError;
use crate::observability::messages::pizza::PizzaReleased;
use crate::observability::messages::StructuredLog;
use crate::pizza::CookState;

/// Handle to a pending charring timer, delivered with `cookFinished`.
///
/// Calling [`release`](ReleaseHandle::release) takes the pizza out of the oven
/// and stops the timer. Clones share the same timer.
#[derive(Clone)]
pub struct ReleaseHandle {
    state: Arc<watch::Sender<CookState>>,
    token: CancellationToken,
}

impl ReleaseHandle {
    pub(crate) fn new(state: Arc<watch::Sender<CookState>>, token: CancellationToken) -> Self {
        Self { state, token }
    }

    /// Move the pizza from `Ready` to `Released` and cancel the charring timer.
    ///
    /// Releasing twice is harmless. Releasing after the timer already fired
    /// fails with [`PizzaError::AlreadyCharred`].
    pub fn release(&self) -> Result<(), PizzaError> {
        let mut charred = false;
        let released = self.state.send_if_modified(|state| match state {
            CookState::Ready => {
                *state = CookState::Released;
                true
            }
            CookState::Charred => {
                charred = true;
                false
            }
            _ => false,
        });

        if charred {
            return Err(PizzaError::AlreadyCharred);
        }

        self.token.cancel();
        if released {
            PizzaReleased.log();
        }
        Ok(())
    }

    pub fn is_released(&self) -> bool {
        *self.state.borrow() == CookState::Released
    }

    pub(crate) fn cancelled(&self) -> tokio_util::sync::WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}

impl fmt::Debug for ReleaseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseHandle")
            .field("state", &*self.state.borrow())
            .field("cancelled", &self.token.is_cancelled())
            .finish()
    }
}
