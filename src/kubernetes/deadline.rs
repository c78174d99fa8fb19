// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deadline shared by every API call of a run

use crate::error::{Result, SmokeTestError};
use std::future::Future;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};

/// A fixed point in time after which pending API calls are abandoned.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Deadline `timeout` from now
    pub fn after(timeout: Duration) -> Self {
        Self {
            at: Instant::now() + timeout,
        }
    }

    /// Time left before the deadline, zero once it has passed
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    /// Drive `fut` to completion unless the deadline passes first.
    ///
    /// `operation` names the call in the resulting error.
    pub async fn bound<F>(&self, operation: &str, fut: F) -> Result<F::Output>
    where
        F: Future,
    {
        timeout_at(self.at, fut)
            .await
            .map_err(|_| SmokeTestError::DeadlineExceeded(operation.to_string()))
    }
}
