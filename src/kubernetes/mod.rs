// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for capability discovery and the OpenShift
//! resources this operator touches.

pub mod capabilities;
pub mod openshift;

pub use capabilities::{api_capabilities, ApiServerSpec};
pub use openshift::{ConsoleLink, Route};
