// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Uniform view over the optional addons so callers can enumerate and query
//! them without knowing each concrete configuration type.

use crate::configuration::types::{
    Config, JaegerConfiguration, KnativeConfiguration, OlmSpec, OpsConfiguration,
    PublicApiConfiguration, TodoConfiguration,
};

/// Capabilities shared by every addon
pub trait AddonInfo {
    fn name(&self) -> &'static str;
    fn is_enabled(&self) -> bool;
    /// Package manager coordinates, or `None` when the addon must not be
    /// installed through the package manager at all
    fn olm_spec(&self) -> Option<&OlmSpec>;
    /// Whether the addon is compatible with the previous version scheme
    fn is_version_compatible(&self) -> bool;
}

/// The addons in their fixed display/iteration order
pub fn get_addons_info(config: &Config) -> [&dyn AddonInfo; 5] {
    let addons = &config.syndesis.addons;
    [
        &addons.jaeger,
        &addons.ops,
        &addons.knative,
        &addons.public_api,
        &addons.todo,
    ]
}

impl AddonInfo for JaegerConfiguration {
    fn name(&self) -> &'static str {
        "jaeger"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn olm_spec(&self) -> Option<&OlmSpec> {
        if self.client_only {
            // A client-only deployment must not install an operator, not
            // even through the operatorhub. Callers check for an olm spec to
            // decide whether the operatorhub should be used, so returning
            // None here stops the installation.
            return None;
        }

        Some(&self.olm)
    }

    fn is_version_compatible(&self) -> bool {
        false
    }
}

impl AddonInfo for OpsConfiguration {
    fn name(&self) -> &'static str {
        "ops"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn olm_spec(&self) -> Option<&OlmSpec> {
        Some(&self.olm)
    }

    fn is_version_compatible(&self) -> bool {
        true
    }
}

impl AddonInfo for TodoConfiguration {
    fn name(&self) -> &'static str {
        "todo"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn olm_spec(&self) -> Option<&OlmSpec> {
        Some(&self.olm)
    }

    fn is_version_compatible(&self) -> bool {
        true
    }
}

impl AddonInfo for KnativeConfiguration {
    fn name(&self) -> &'static str {
        "knative"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn olm_spec(&self) -> Option<&OlmSpec> {
        Some(&self.olm)
    }

    fn is_version_compatible(&self) -> bool {
        true
    }
}

impl AddonInfo for PublicApiConfiguration {
    fn name(&self) -> &'static str {
        "publicApi"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn olm_spec(&self) -> Option<&OlmSpec> {
        Some(&self.olm)
    }

    fn is_version_compatible(&self) -> bool {
        true
    }
}
