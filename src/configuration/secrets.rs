// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Recovery of persisted secret values from the global configuration secret,
//! including migration of the deprecated single-blob layout. Read-only: the
//! secret is never written back from here.

use crate::configuration::types::Config;
use crate::constants::{secret_keys, GLOBAL_CONFIG_SECRET};
use crate::error::{Result, SyndesisError};
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Load persisted secret values into the configuration. A missing secret is
/// not an error: the fields stay empty and are generated afterwards.
#[instrument(skip(config, client))]
pub(crate) async fn set_secrets_from_cluster(
    config: &mut Config,
    client: &Client,
    namespace: &str,
) -> Result<()> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);

    let secret = match secrets.get(GLOBAL_CONFIG_SECRET).await {
        Ok(secret) => secret,
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!(
                "Secret {}/{} not found, secrets will be generated",
                namespace, GLOBAL_CONFIG_SECRET
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    apply_secret_bundle(config, &secret)
}

/// Copy the recognized keys of the secret onto the configuration. Keys absent
/// from the secret leave the field empty so it gets generated later.
pub(crate) fn apply_secret_bundle(config: &mut Config, secret: &Secret) -> Result<()> {
    let empty = Default::default();
    let data = secret.data.as_ref().unwrap_or(&empty);

    if data.contains_key(secret_keys::DATABASE_PASSWORD) {
        let field = |key: &str| -> String {
            data.get(key)
                .map(|v| String::from_utf8_lossy(&v.0).into_owned())
                .unwrap_or_default()
        };

        config.open_shift_oauth_client_secret = field(secret_keys::OAUTH_CLIENT_SECRET);
        config.syndesis.components.database.password = field(secret_keys::DATABASE_PASSWORD);
        config.syndesis.components.database.sampledb_password =
            field(secret_keys::SAMPLEDB_PASSWORD);
        config.syndesis.components.oauth.cookie_secret = field(secret_keys::OAUTH_COOKIE_SECRET);
        config.syndesis.components.server.syndesis_encrypt_key = field(secret_keys::ENCRYPT_KEY);
        config
            .syndesis
            .components
            .server
            .client_state_authentication_key = field(secret_keys::CLIENT_STATE_AUTHENTICATION_KEY);
        config.syndesis.components.server.client_state_encryption_key =
            field(secret_keys::CLIENT_STATE_ENCRYPTION_KEY);
    } else {
        // Old secret layout: all values live in one newline-delimited blob.
        // TODO: drop this path once the migration window closes
        let params = legacy_params(secret)?;
        let field = |key: &str| params.get(key).cloned().unwrap_or_default();

        config.open_shift_oauth_client_secret = field(secret_keys::OAUTH_CLIENT_SECRET);
        config.syndesis.components.database.password = field(secret_keys::DATABASE_PASSWORD);
        config.syndesis.components.database.sampledb_password =
            field(secret_keys::SAMPLEDB_PASSWORD);
        config.syndesis.components.oauth.cookie_secret = field(secret_keys::OAUTH_COOKIE_SECRET);
        config.syndesis.components.server.syndesis_encrypt_key = field(secret_keys::ENCRYPT_KEY);
        config
            .syndesis
            .components
            .server
            .client_state_authentication_key = field(secret_keys::CLIENT_STATE_AUTHENTICATION_KEY);
        config.syndesis.components.server.client_state_encryption_key =
            field(secret_keys::CLIENT_STATE_ENCRYPTION_KEY);
    }

    Ok(())
}

/// Extract the legacy blob and parse it into a lookup map
fn legacy_params(secret: &Secret) -> Result<HashMap<String, String>> {
    let blob = secret
        .data
        .as_ref()
        .and_then(|d| d.get(secret_keys::LEGACY_PARAMS))
        .ok_or(SyndesisError::NoConfiguration)?;

    Ok(parse_configuration_blob(&String::from_utf8_lossy(&blob.0)))
}

/// Parse a newline-delimited `key=value` blob. Lines are trimmed, blank lines
/// are skipped, and values keep any `=` characters past the first one.
fn parse_configuration_blob(blob: &str) -> HashMap<String, String> {
    let mut configs = HashMap::new();
    for line in blob.split('\n') {
        let line = line.trim_matches([' ', '\r', '\t']);
        if line.is_empty() {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            configs.insert(key.to_string(), value.to_string());
        }
    }
    configs
}
