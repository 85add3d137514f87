// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The resolved configuration tree and its nested component/addon records.

use crate::kubernetes::capabilities::ApiServerSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration for one installation, produced by a single resolution
/// pass. Secret-bearing fields are only empty while resolution is in flight.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub allow_local_host: bool,
    pub productized: bool,
    /// Application version being installed
    pub version: String,
    /// Pull images from image tags instead of the upstream source
    pub dev_support: bool,
    /// Legacy flag to mark imagestreams as scheduled
    pub scheduled: bool,
    /// Usually syndesis or fuse-online
    pub product_name: String,
    /// Extra prometheus rules, if any
    pub prometheus_rules: String,
    /// The project the application is being deployed into
    pub open_shift_project: String,
    /// OAuth client secret registered with the cluster
    pub open_shift_oauth_client_secret: String,
    pub supported_open_shift_versions: String,
    pub open_shift_console_url: String,
    /// Pull secrets attached to service accounts, filled in by the operator
    pub image_pull_secrets: Vec<String>,
    /// Set when the running database image no longer matches the configured one
    pub database_needs_upgrade: bool,
    /// Capabilities advertised by the API server, read-only here
    pub api_server: ApiServerSpec,
    /// Component and addon configuration, overridden from the environment
    /// and the custom resource
    pub syndesis: SyndesisConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SyndesisConfig {
    /// Start up with demo data
    pub demo_data: bool,
    /// Reference images by SHA instead of tag
    pub sha: bool,
    /// External hostname the application is reachable at
    pub route_hostname: String,
    pub components: ComponentsSpec,
    pub addons: AddonsSpec,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentsSpec {
    pub ui: UiConfiguration,
    pub s2i: S2iConfiguration,
    pub oauth: OauthConfiguration,
    pub server: ServerConfiguration,
    pub meta: MetaConfiguration,
    pub database: DatabaseConfiguration,
    pub prometheus: PrometheusConfiguration,
    pub grafana: GrafanaConfiguration,
    pub upgrade: UpgradeConfiguration,
    pub amq: AmqConfiguration,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfiguration {
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct S2iConfiguration {
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AmqConfiguration {
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct OauthConfiguration {
    pub image: String,
    /// Secret used to encrypt oauth cookies
    pub cookie_secret: String,
    /// Disable SAR checks altogether
    pub disable_sar_check: bool,
    /// Users need permission to list pods in this project to be granted access
    pub sar_namespace: String,
    /// Extra environment variables for the oauth proxy
    pub environment: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfiguration {
    pub image: String,
    pub resources: Resources,
    pub features: ServerFeatures,
    /// Key used to encrypt/decrypt stored secrets
    pub syndesis_encrypt_key: String,
    /// Key authenticating client side stored state
    pub client_state_authentication_key: String,
    /// Key encrypting client side stored state
    pub client_state_encryption_key: String,
    pub connection_pool: ConnectionPool,
    pub java_options: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaConfiguration {
    pub image: String,
    pub resources: ResourcesWithPersistentVolume,
    pub java_options: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseConfiguration {
    pub image: String,
    /// Connection user for the managed database
    pub user: String,
    /// Name of the database accessed
    pub name: String,
    /// Host and port of the database to access
    pub url: String,
    /// When set, an external database is used instead of the managed one
    pub external_db_url: String,
    pub resources: ResourcesWithPersistentVolume,
    pub exporter: ExporterConfiguration,
    pub password: String,
    pub sampledb_password: String,
    pub backup_image: String,
    pub restore_image: String,
    pub logger_image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ExporterConfiguration {
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PrometheusConfiguration {
    pub image: String,
    pub rules: String,
    pub resources: ResourcesWithPersistentVolume,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GrafanaConfiguration {
    pub resources: Resources,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpgradeConfiguration {
    pub image: String,
    pub resources: VolumeOnlyResources,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceParams {
    pub memory: String,
    pub cpu: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Resources {
    pub limit: ResourceParams,
    pub request: ResourceParams,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourcesWithPersistentVolume {
    pub limit: ResourceParams,
    pub request: ResourceParams,
    pub volume_capacity: String,
    pub volume_name: String,
    pub volume_access_mode: String,
    pub volume_storage_class: String,
    pub volume_labels: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeOnlyResources {
    pub volume_capacity: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerFeatures {
    /// Maximum number of integrations a single user can create
    pub integration_limit: i32,
    /// Interval for checking the state of integrations
    pub integration_state_check_interval: i32,
    pub deploy_integrations: bool,
    /// Enables the test-support endpoint on the backend API
    pub test_support: bool,
    /// Public OpenShift master address
    pub open_shift_master: String,
    pub management_url_for3scale: String,
    pub maven: MavenConfiguration,
    pub auditing: bool,
}

/// Connection pool parameters used by the server to manage database
/// connections. Time values are in milliseconds.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionPool {
    /// Maximum time to wait for a connection from the pool
    pub connection_timeout: i32,
    /// Maximum time a connection may sit idle in the pool
    pub idle_timeout: i32,
    /// Time a connection can be out of the pool before a possible leak is logged
    pub leak_detection_threshold: i32,
    /// Maximum pool size, counting both idle and in-use connections
    pub maximum_pool_size: i32,
    /// Maximum lifetime of a pooled connection
    pub max_lifetime: i32,
    /// Minimum number of idle connections kept in the pool
    pub minimum_idle: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MavenConfiguration {
    /// Append user repositories to the defaults instead of replacing them
    pub append: bool,
    /// Extra maven options
    pub additional_arguments: String,
    pub repositories: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AddonsSpec {
    pub jaeger: JaegerConfiguration,
    pub ops: OpsConfiguration,
    pub todo: TodoConfiguration,
    pub knative: KnativeConfiguration,
    pub public_api: PublicApiConfiguration,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct JaegerConfiguration {
    pub enabled: bool,
    pub olm: OlmSpec,
    /// Only deploy the client; skips any operator installation
    pub client_only: bool,
    /// Use an externally managed operator
    pub operator_only: bool,
    pub query_uri: String,
    pub collector_uri: String,
    pub sampler_type: String,
    pub sampler_param: String,
    pub image_agent: String,
    pub image_all_in_one: String,
    pub image_operator: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct OpsConfiguration {
    pub enabled: bool,
    pub olm: OlmSpec,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoConfiguration {
    pub enabled: bool,
    pub olm: OlmSpec,
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct KnativeConfiguration {
    pub enabled: bool,
    pub olm: OlmSpec,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicApiConfiguration {
    pub enabled: bool,
    pub olm: OlmSpec,
    pub route_hostname: String,
    pub disable_sar_check: bool,
}

/// Package manager coordinates for installing an addon operator
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct OlmSpec {
    /// Package name in the operator-lifecycle-manager catalog
    pub package: String,
    /// Preferred channel to install the operator from
    pub channel: String,
}
