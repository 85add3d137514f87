// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Route hostname adoption

use crate::configuration::types::Config;
use crate::constants::{env_vars, ROUTE_NAME};
use crate::error::Result;
use crate::kubernetes::openshift::Route;
use crate::types::syndesis::Syndesis;
use kube::{Api, Client, ResourceExt};
use std::env;
use tracing::{debug, instrument};

/// Adopt the externally observable route hostname. An explicit environment
/// override wins; otherwise the hostname is read from the route object. A
/// route that does not exist yet leaves the current value untouched, since
/// the route appears later in the deployment lifecycle.
#[instrument(skip_all, fields(syndesis = %syndesis.name_any()))]
pub async fn set_route(config: &mut Config, client: &Client, syndesis: &Syndesis) -> Result<()> {
    let hostname_override = env::var(env_vars::ROUTE_HOSTNAME)
        .ok()
        .filter(|v| !v.is_empty());
    set_route_with(config, client, syndesis, hostname_override).await
}

pub(crate) async fn set_route_with(
    config: &mut Config,
    client: &Client,
    syndesis: &Syndesis,
    hostname_override: Option<String>,
) -> Result<()> {
    if let Some(hostname) = hostname_override {
        debug!("Adopting route hostname {} from the environment", hostname);
        config.syndesis.route_hostname = hostname;
        return Ok(());
    }

    let namespace = syndesis.namespace().unwrap_or_default();
    let routes: Api<Route> = Api::namespaced(client.clone(), &namespace);

    match routes.get(ROUTE_NAME).await {
        Ok(route) => {
            config.syndesis.route_hostname = route.spec.host.clone().unwrap_or_default();
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("Route {}/{} not found yet", namespace, ROUTE_NAME);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
