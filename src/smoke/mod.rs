// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster queries and the readiness report built from them.

pub mod checks;
pub mod reporter;

pub use reporter::{Outcome, Report, Reporter, Summary};
