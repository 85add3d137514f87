// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::configuration::types::SyndesisConfig;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The user-facing override resource. Its spec carries the same shape as the
/// component/addon configuration tree, so user-specified fields overlay the
/// resolved configuration directly.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, JsonSchema)]
#[kube(group = "syndesis.io", version = "v1beta2", kind = "Syndesis")]
#[kube(namespaced)]
pub struct SyndesisSpec {
    #[serde(flatten)]
    pub config: SyndesisConfig,
}

impl Syndesis {
    /// Whether the resource is in the middle of being deleted
    pub fn is_being_deleted(&self) -> bool {
        self.metadata.deletion_timestamp.is_some()
    }
}
