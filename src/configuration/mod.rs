// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolution of the authoritative configuration for one installation.
//!
//! Default values are loaded from a file, persisted secrets are recovered
//! from the global configuration secret (and generated when missing),
//! selected fields are overridden from environment variables, and finally
//! the custom resource overrides whatever the user specified. Later layers
//! win field-by-field, but only with non-empty values.

pub mod addons;
pub mod password;
pub mod types;

mod env;
mod merge;
mod secrets;

use crate::error::Result;
use crate::kubernetes::capabilities::api_capabilities;
use crate::types::syndesis::Syndesis;
use kube::{Client, ResourceExt};
use merge::Merge;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};
use url::Url;

pub use password::{AlphanumericGenerator, SecretGenerator};
pub use types::{Config, SyndesisConfig};

impl Config {
    /// Load default values from a YAML or JSON file. The format is picked by
    /// file extension; a parse failure aborts resolution.
    pub fn load_from_file(file: &Path) -> Result<Self> {
        let data = fs::read(file)?;

        match file.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_slice(&data)?),
            _ => Ok(serde_json::from_slice(&data)?),
        }
    }
}

/// Produce the fully resolved configuration for one custom resource.
///
/// Layers are applied in order: file defaults, persisted secrets, generated
/// secrets, environment variables, custom resource fields, and finally the
/// external database override. Without a client the cluster-backed layers
/// are skipped and resolution works purely from defaults and environment.
#[instrument(skip_all, fields(syndesis = %syndesis.name_any()))]
pub async fn resolve(
    file: &Path,
    client: Option<&Client>,
    syndesis: &Syndesis,
    generator: &dyn SecretGenerator,
) -> Result<Config> {
    let mut config = Config::load_from_file(file)?;

    if let Some(client) = client {
        config.api_server = api_capabilities(client).await?;
    }

    config.open_shift_project = syndesis.namespace().unwrap_or_default();
    config.syndesis.components.oauth.sar_namespace = config.open_shift_project.clone();

    if let Some(client) = client {
        let namespace = config.open_shift_project.clone();
        secrets::set_secrets_from_cluster(&mut config, client, &namespace).await?;
    }

    password::generate_secrets(&mut config, generator);
    env::apply_env_overrides(&mut config);
    apply_custom_resource(&mut config, syndesis);

    if client.is_some() {
        let external = &syndesis.spec.config.components.database.external_db_url;
        if !external.is_empty() {
            set_external_database(&mut config, external)?;
        }
    }

    Ok(config)
}

/// Overlay the fields of the custom resource onto the configuration
fn apply_custom_resource(config: &mut Config, syndesis: &Syndesis) {
    let overlay = syndesis.spec.config.clone();

    let maven = &overlay.components.server.features.maven;
    let replace_repositories = !maven.repositories.is_empty() && !maven.append;
    let repositories = maven.repositories.clone();

    config.syndesis.merge_from(overlay);

    // In non-append mode the maven repositories are replaced wholesale; the
    // general merge would union old and new keys.
    if replace_repositories {
        config.syndesis.components.server.features.maven.repositories = repositories;
    }
}

/// Point the database connection at an externally managed instance. A URL
/// without a path gets the configured database name as its path.
fn set_external_database(config: &mut Config, external_db_url: &str) -> Result<()> {
    let mut url = Url::parse(external_db_url)?;

    if url.path().is_empty() {
        url.set_path(&config.syndesis.components.database.name);
    }

    debug!("Using external database {}", url);
    config.syndesis.components.database.url = url.to_string();

    Ok(())
}
