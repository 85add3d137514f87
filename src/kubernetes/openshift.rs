// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Local declarations of the OpenShift route and console link resources,
//! limited to the fields this operator reads and writes.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, JsonSchema)]
#[kube(group = "route.openshift.io", version = "v1", kind = "Route")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct RouteSpec {
    /// Externally reachable hostname of the route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

/// Location value placing a console link on the namespace dashboard
pub const NAMESPACE_DASHBOARD: &str = "NamespaceDashboard";

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, JsonSchema)]
#[kube(group = "console.openshift.io", version = "v1", kind = "ConsoleLink")]
#[serde(rename_all = "camelCase")]
pub struct ConsoleLinkSpec {
    /// Display text of the link
    pub text: String,
    /// Absolute URL the link points at
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_dashboard: Option<NamespaceDashboardSpec>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceDashboardSpec {
    pub namespaces: Vec<String>,
}
