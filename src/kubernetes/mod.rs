// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and bounding API calls.

pub mod client;
pub mod deadline;

pub use client::create_client;
pub use deadline::Deadline;
