// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::{Api, Client};
use std::path::Path;
use tracing::info;

use syndesis_operator::configuration::{self, AlphanumericGenerator};
use syndesis_operator::sync::{set_console_link, set_route};
use syndesis_operator::types::syndesis::Syndesis;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Syndesis configuration resolver");

    let config_file =
        std::env::var("SYNDESIS_CONFIG_FILE").unwrap_or_else(|_| "conf/config.yaml".to_string());
    let name = std::env::var("SYNDESIS_NAME").unwrap_or_else(|_| "syndesis".to_string());
    let namespace =
        std::env::var("SYNDESIS_NAMESPACE").unwrap_or_else(|_| "syndesis".to_string());

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let api: Api<Syndesis> = Api::namespaced(client.clone(), &namespace);
    let syndesis = api.get(&name).await?;

    let generator = AlphanumericGenerator::new();
    let mut config = configuration::resolve(
        Path::new(&config_file),
        Some(&client),
        &syndesis,
        &generator,
    )
    .await?;

    set_route(&mut config, &client, &syndesis).await?;
    let route_host = config.syndesis.route_hostname.clone();
    set_console_link(&config, &client, &syndesis, &route_host).await?;

    info!(
        "Resolved configuration for {}/{}: version={}, route={}",
        namespace, name, config.version, route_host
    );

    Ok(())
}
