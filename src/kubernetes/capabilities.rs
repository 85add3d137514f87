// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API server capability discovery

use crate::error::Result;
use kube::{discovery::Discovery, Client};
use serde::{Deserialize, Serialize};
use tracing::debug;

const ROUTE_GROUP: &str = "route.openshift.io";
const CONSOLE_GROUP: &str = "console.openshift.io";
const IMAGE_GROUP: &str = "image.openshift.io";
const USER_GROUP: &str = "user.openshift.io";
const OLM_GROUP: &str = "operators.coreos.com";

/// Snapshot of the capabilities the API server advertises. Recorded once per
/// resolution and treated as read-only afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiServerSpec {
    /// Version reported by the API server
    pub version: String,
    /// The cluster serves imagestream objects
    pub image_streams: bool,
    /// The cluster serves route objects
    pub routes: bool,
    /// The cluster ships its own OAuth provider
    pub embedded_provider: bool,
    /// The cluster serves console link objects
    pub console_link: bool,
    /// The operator-lifecycle-manager is installed
    pub olm_support: bool,
}

/// Query the API server for the capabilities relevant to an installation
pub async fn api_capabilities(client: &Client) -> Result<ApiServerSpec> {
    let version = client.apiserver_version().await?;

    let discovery = Discovery::new(client.clone())
        .filter(&[ROUTE_GROUP, CONSOLE_GROUP, IMAGE_GROUP, USER_GROUP, OLM_GROUP])
        .run()
        .await?;

    let mut spec = ApiServerSpec {
        version: version.git_version,
        ..Default::default()
    };

    for group in discovery.groups() {
        match group.name() {
            ROUTE_GROUP => spec.routes = true,
            IMAGE_GROUP => spec.image_streams = true,
            USER_GROUP => spec.embedded_provider = true,
            OLM_GROUP => spec.olm_support = true,
            CONSOLE_GROUP => {
                spec.console_link = group
                    .recommended_resources()
                    .iter()
                    .any(|(ar, _)| ar.kind == "ConsoleLink");
            }
            _ => {}
        }
    }

    debug!("API server capabilities: {:?}", spec);
    Ok(spec)
}
