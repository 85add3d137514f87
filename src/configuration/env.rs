// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Environment variable overrides for image references, persistent volume
//! settings and a pair of feature flags. A variable only takes effect when it
//! is present and non-empty, so an unset variable can never clear a field.

use crate::configuration::types::Config;
use crate::constants::env_vars;
use std::env;

/// Apply overrides from the process environment
pub(crate) fn apply_env_overrides(config: &mut Config) {
    apply_env_overrides_from(config, |name| env::var(name).ok());
}

/// Apply overrides from an arbitrary lookup, used directly by tests
pub(crate) fn apply_env_overrides_from<F>(config: &mut Config, get: F)
where
    F: Fn(&str) -> Option<String>,
{
    let components = &mut config.syndesis.components;

    override_string(&get, env_vars::RELATED_IMAGE_UI, &mut components.ui.image);
    override_string(&get, env_vars::RELATED_IMAGE_S2I, &mut components.s2i.image);
    override_string(&get, env_vars::RELATED_IMAGE_OAUTH, &mut components.oauth.image);
    override_string(&get, env_vars::RELATED_IMAGE_SERVER, &mut components.server.image);
    override_string(&get, env_vars::RELATED_IMAGE_META, &mut components.meta.image);
    override_string(
        &get,
        env_vars::RELATED_IMAGE_DATABASE,
        &mut components.database.image,
    );
    override_string(
        &get,
        env_vars::RELATED_IMAGE_PSQL_EXPORTER,
        &mut components.database.exporter.image,
    );
    override_string(
        &get,
        env_vars::RELATED_IMAGE_PROMETHEUS,
        &mut components.prometheus.image,
    );
    override_string(
        &get,
        env_vars::RELATED_IMAGE_UPGRADE,
        &mut components.upgrade.image,
    );
    override_string(&get, env_vars::RELATED_IMAGE_AMQ, &mut components.amq.image);
    override_string(
        &get,
        env_vars::RELATED_IMAGE_TODO,
        &mut config.syndesis.addons.todo.image,
    );

    let components = &mut config.syndesis.components;

    override_string(
        &get,
        env_vars::PROMETHEUS_VOLUME_ACCESS_MODE,
        &mut components.prometheus.resources.volume_access_mode,
    );
    override_string(
        &get,
        env_vars::PROMETHEUS_STORAGE_CLASS,
        &mut components.prometheus.resources.volume_storage_class,
    );
    override_string(
        &get,
        env_vars::PROMETHEUS_VOLUME_NAME,
        &mut components.prometheus.resources.volume_name,
    );
    override_string(
        &get,
        env_vars::META_VOLUME_ACCESS_MODE,
        &mut components.meta.resources.volume_access_mode,
    );
    override_string(
        &get,
        env_vars::META_STORAGE_CLASS,
        &mut components.meta.resources.volume_storage_class,
    );
    override_string(
        &get,
        env_vars::META_VOLUME_NAME,
        &mut components.meta.resources.volume_name,
    );
    override_string(
        &get,
        env_vars::DATABASE_VOLUME_ACCESS_MODE,
        &mut components.database.resources.volume_access_mode,
    );
    override_string(
        &get,
        env_vars::DATABASE_STORAGE_CLASS,
        &mut components.database.resources.volume_storage_class,
    );
    override_string(
        &get,
        env_vars::DATABASE_VOLUME_NAME,
        &mut components.database.resources.volume_name,
    );

    config.dev_support = bool_from(&get, env_vars::DEV_SUPPORT, config.dev_support);
    config.syndesis.components.server.features.test_support = bool_from(
        &get,
        env_vars::TEST_SUPPORT,
        config.syndesis.components.server.features.test_support,
    );
}

fn override_string<F>(get: &F, name: &str, dst: &mut String)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = get(name) {
        if !value.is_empty() {
            *dst = value;
        }
    }
}

/// A set, non-empty variable wins; anything other than "true" reads as false.
/// An unset or empty variable keeps the current value.
fn bool_from<F>(get: &F, name: &str, current: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(value) if !value.is_empty() => value == "true",
        _ => current,
    }
}
