// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Field-by-field "non-empty wins" merge of an overlay configuration onto a
//! base. Written out by hand per structure so the precedence rules stay
//! explicit: an empty string, a zero integer, `false`, or an empty map never
//! replaces an already-resolved value. Maps merge key-by-key with the
//! overlay winning on conflicts.

use super::types::*;
use std::collections::BTreeMap;

pub(crate) trait Merge {
    /// Overwrite fields of `self` with the non-empty fields of `overlay`.
    fn merge_from(&mut self, overlay: Self);
}

fn merge_string(dst: &mut String, overlay: String) {
    if !overlay.is_empty() {
        *dst = overlay;
    }
}

fn merge_bool(dst: &mut bool, overlay: bool) {
    if overlay {
        *dst = true;
    }
}

fn merge_int(dst: &mut i32, overlay: i32) {
    if overlay != 0 {
        *dst = overlay;
    }
}

fn merge_map(dst: &mut BTreeMap<String, String>, overlay: BTreeMap<String, String>) {
    for (key, value) in overlay {
        dst.insert(key, value);
    }
}

impl Merge for SyndesisConfig {
    fn merge_from(&mut self, overlay: Self) {
        merge_bool(&mut self.demo_data, overlay.demo_data);
        merge_bool(&mut self.sha, overlay.sha);
        merge_string(&mut self.route_hostname, overlay.route_hostname);
        self.components.merge_from(overlay.components);
        self.addons.merge_from(overlay.addons);
    }
}

impl Merge for ComponentsSpec {
    fn merge_from(&mut self, overlay: Self) {
        self.ui.merge_from(overlay.ui);
        self.s2i.merge_from(overlay.s2i);
        self.oauth.merge_from(overlay.oauth);
        self.server.merge_from(overlay.server);
        self.meta.merge_from(overlay.meta);
        self.database.merge_from(overlay.database);
        self.prometheus.merge_from(overlay.prometheus);
        self.grafana.merge_from(overlay.grafana);
        self.upgrade.merge_from(overlay.upgrade);
        self.amq.merge_from(overlay.amq);
    }
}

impl Merge for UiConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.image, overlay.image);
    }
}

impl Merge for S2iConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.image, overlay.image);
    }
}

impl Merge for AmqConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.image, overlay.image);
    }
}

impl Merge for OauthConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.image, overlay.image);
        merge_string(&mut self.cookie_secret, overlay.cookie_secret);
        merge_bool(&mut self.disable_sar_check, overlay.disable_sar_check);
        merge_string(&mut self.sar_namespace, overlay.sar_namespace);
        merge_map(&mut self.environment, overlay.environment);
    }
}

impl Merge for ServerConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.image, overlay.image);
        self.resources.merge_from(overlay.resources);
        self.features.merge_from(overlay.features);
        merge_string(&mut self.syndesis_encrypt_key, overlay.syndesis_encrypt_key);
        merge_string(
            &mut self.client_state_authentication_key,
            overlay.client_state_authentication_key,
        );
        merge_string(
            &mut self.client_state_encryption_key,
            overlay.client_state_encryption_key,
        );
        self.connection_pool.merge_from(overlay.connection_pool);
        merge_string(&mut self.java_options, overlay.java_options);
    }
}

impl Merge for MetaConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.image, overlay.image);
        self.resources.merge_from(overlay.resources);
        merge_string(&mut self.java_options, overlay.java_options);
    }
}

impl Merge for DatabaseConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.image, overlay.image);
        merge_string(&mut self.user, overlay.user);
        merge_string(&mut self.name, overlay.name);
        merge_string(&mut self.url, overlay.url);
        merge_string(&mut self.external_db_url, overlay.external_db_url);
        self.resources.merge_from(overlay.resources);
        self.exporter.merge_from(overlay.exporter);
        merge_string(&mut self.password, overlay.password);
        merge_string(&mut self.sampledb_password, overlay.sampledb_password);
        merge_string(&mut self.backup_image, overlay.backup_image);
        merge_string(&mut self.restore_image, overlay.restore_image);
        merge_string(&mut self.logger_image, overlay.logger_image);
    }
}

impl Merge for ExporterConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.image, overlay.image);
    }
}

impl Merge for PrometheusConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.image, overlay.image);
        merge_string(&mut self.rules, overlay.rules);
        self.resources.merge_from(overlay.resources);
    }
}

impl Merge for GrafanaConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        self.resources.merge_from(overlay.resources);
    }
}

impl Merge for UpgradeConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.image, overlay.image);
        self.resources.merge_from(overlay.resources);
    }
}

impl Merge for ResourceParams {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.memory, overlay.memory);
        merge_string(&mut self.cpu, overlay.cpu);
    }
}

impl Merge for Resources {
    fn merge_from(&mut self, overlay: Self) {
        self.limit.merge_from(overlay.limit);
        self.request.merge_from(overlay.request);
    }
}

impl Merge for ResourcesWithPersistentVolume {
    fn merge_from(&mut self, overlay: Self) {
        self.limit.merge_from(overlay.limit);
        self.request.merge_from(overlay.request);
        merge_string(&mut self.volume_capacity, overlay.volume_capacity);
        merge_string(&mut self.volume_name, overlay.volume_name);
        merge_string(&mut self.volume_access_mode, overlay.volume_access_mode);
        merge_string(&mut self.volume_storage_class, overlay.volume_storage_class);
        merge_map(&mut self.volume_labels, overlay.volume_labels);
    }
}

impl Merge for VolumeOnlyResources {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.volume_capacity, overlay.volume_capacity);
    }
}

impl Merge for ServerFeatures {
    fn merge_from(&mut self, overlay: Self) {
        merge_int(&mut self.integration_limit, overlay.integration_limit);
        merge_int(
            &mut self.integration_state_check_interval,
            overlay.integration_state_check_interval,
        );
        merge_bool(&mut self.deploy_integrations, overlay.deploy_integrations);
        merge_bool(&mut self.test_support, overlay.test_support);
        merge_string(&mut self.open_shift_master, overlay.open_shift_master);
        merge_string(
            &mut self.management_url_for3scale,
            overlay.management_url_for3scale,
        );
        self.maven.merge_from(overlay.maven);
        merge_bool(&mut self.auditing, overlay.auditing);
    }
}

impl Merge for ConnectionPool {
    fn merge_from(&mut self, overlay: Self) {
        merge_int(&mut self.connection_timeout, overlay.connection_timeout);
        merge_int(&mut self.idle_timeout, overlay.idle_timeout);
        merge_int(
            &mut self.leak_detection_threshold,
            overlay.leak_detection_threshold,
        );
        merge_int(&mut self.maximum_pool_size, overlay.maximum_pool_size);
        merge_int(&mut self.max_lifetime, overlay.max_lifetime);
        merge_int(&mut self.minimum_idle, overlay.minimum_idle);
    }
}

impl Merge for MavenConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_bool(&mut self.append, overlay.append);
        merge_string(&mut self.additional_arguments, overlay.additional_arguments);
        merge_map(&mut self.repositories, overlay.repositories);
    }
}

impl Merge for AddonsSpec {
    fn merge_from(&mut self, overlay: Self) {
        self.jaeger.merge_from(overlay.jaeger);
        self.ops.merge_from(overlay.ops);
        self.todo.merge_from(overlay.todo);
        self.knative.merge_from(overlay.knative);
        self.public_api.merge_from(overlay.public_api);
    }
}

impl Merge for OlmSpec {
    fn merge_from(&mut self, overlay: Self) {
        merge_string(&mut self.package, overlay.package);
        merge_string(&mut self.channel, overlay.channel);
    }
}

impl Merge for JaegerConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_bool(&mut self.enabled, overlay.enabled);
        self.olm.merge_from(overlay.olm);
        merge_bool(&mut self.client_only, overlay.client_only);
        merge_bool(&mut self.operator_only, overlay.operator_only);
        merge_string(&mut self.query_uri, overlay.query_uri);
        merge_string(&mut self.collector_uri, overlay.collector_uri);
        merge_string(&mut self.sampler_type, overlay.sampler_type);
        merge_string(&mut self.sampler_param, overlay.sampler_param);
        merge_string(&mut self.image_agent, overlay.image_agent);
        merge_string(&mut self.image_all_in_one, overlay.image_all_in_one);
        merge_string(&mut self.image_operator, overlay.image_operator);
    }
}

impl Merge for OpsConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_bool(&mut self.enabled, overlay.enabled);
        self.olm.merge_from(overlay.olm);
    }
}

impl Merge for TodoConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_bool(&mut self.enabled, overlay.enabled);
        self.olm.merge_from(overlay.olm);
        merge_string(&mut self.image, overlay.image);
    }
}

impl Merge for KnativeConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_bool(&mut self.enabled, overlay.enabled);
        self.olm.merge_from(overlay.olm);
    }
}

impl Merge for PublicApiConfiguration {
    fn merge_from(&mut self, overlay: Self) {
        merge_bool(&mut self.enabled, overlay.enabled);
        self.olm.merge_from(overlay.olm);
        merge_string(&mut self.route_hostname, overlay.route_hostname);
        merge_bool(&mut self.disable_sar_check, overlay.disable_sar_check);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_string_overrides() {
        let mut base = UiConfiguration {
            image: "registry/ui:1.0".to_string(),
        };
        base.merge_from(UiConfiguration {
            image: "registry/ui:2.0".to_string(),
        });
        assert_eq!(base.image, "registry/ui:2.0");
    }

    #[test]
    fn test_empty_string_keeps_base() {
        let mut base = UiConfiguration {
            image: "registry/ui:1.0".to_string(),
        };
        base.merge_from(UiConfiguration::default());
        assert_eq!(base.image, "registry/ui:1.0");
    }

    #[test]
    fn test_true_overrides_false_never_clears() {
        let mut features = ServerFeatures {
            auditing: true,
            deploy_integrations: false,
            ..Default::default()
        };
        features.merge_from(ServerFeatures {
            auditing: false,
            deploy_integrations: true,
            ..Default::default()
        });
        assert!(features.auditing);
        assert!(features.deploy_integrations);
    }

    #[test]
    fn test_zero_int_keeps_base() {
        let mut pool = ConnectionPool {
            maximum_pool_size: 10,
            idle_timeout: 600000,
            ..Default::default()
        };
        pool.merge_from(ConnectionPool {
            maximum_pool_size: 20,
            idle_timeout: 0,
            ..Default::default()
        });
        assert_eq!(pool.maximum_pool_size, 20);
        assert_eq!(pool.idle_timeout, 600000);
    }

    #[test]
    fn test_maps_merge_key_by_key() {
        let mut maven = MavenConfiguration::default();
        maven
            .repositories
            .insert("central".to_string(), "https://repo1.maven.org".to_string());
        maven
            .repositories
            .insert("jboss".to_string(), "https://old.example.com".to_string());

        let mut overlay = MavenConfiguration::default();
        overlay
            .repositories
            .insert("jboss".to_string(), "https://new.example.com".to_string());
        overlay
            .repositories
            .insert("custom".to_string(), "https://custom.example.com".to_string());

        maven.merge_from(overlay);

        assert_eq!(maven.repositories.len(), 3);
        assert_eq!(maven.repositories["central"], "https://repo1.maven.org");
        assert_eq!(maven.repositories["jboss"], "https://new.example.com");
        assert_eq!(maven.repositories["custom"], "https://custom.example.com");
    }

    #[test]
    fn test_nested_components_merge() {
        let mut base = SyndesisConfig::default();
        base.components.database.user = "syndesis".to_string();
        base.components.database.name = "syndesis".to_string();
        base.components.server.connection_pool.maximum_pool_size = 10;

        let mut overlay = SyndesisConfig::default();
        overlay.components.database.name = "override".to_string();
        overlay.route_hostname = "app.example.com".to_string();

        base.merge_from(overlay);

        assert_eq!(base.components.database.user, "syndesis");
        assert_eq!(base.components.database.name, "override");
        assert_eq!(base.components.server.connection_pool.maximum_pool_size, 10);
        assert_eq!(base.route_hostname, "app.example.com");
    }

    #[test]
    fn test_resource_params_merge_independently() {
        let mut resources = Resources {
            limit: ResourceParams {
                memory: "800Mi".to_string(),
                cpu: "750m".to_string(),
            },
            request: ResourceParams {
                memory: "256Mi".to_string(),
                cpu: "250m".to_string(),
            },
        };
        resources.merge_from(Resources {
            limit: ResourceParams {
                memory: "1Gi".to_string(),
                cpu: String::new(),
            },
            request: ResourceParams::default(),
        });
        assert_eq!(resources.limit.memory, "1Gi");
        assert_eq!(resources.limit.cpu, "750m");
        assert_eq!(resources.request.memory, "256Mi");
    }
}
