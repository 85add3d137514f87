// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name of the secret carrying persisted credentials for an installation
pub const GLOBAL_CONFIG_SECRET: &str = "syndesis-global-config";

/// Name of the route exposing the application
pub const ROUTE_NAME: &str = "syndesis";

/// Keys recognized inside the global configuration secret
pub mod secret_keys {
    pub const OAUTH_CLIENT_SECRET: &str = "OPENSHIFT_OAUTH_CLIENT_SECRET";
    pub const DATABASE_PASSWORD: &str = "POSTGRESQL_PASSWORD";
    pub const SAMPLEDB_PASSWORD: &str = "POSTGRESQL_SAMPLEDB_PASSWORD";
    pub const OAUTH_COOKIE_SECRET: &str = "OAUTH_COOKIE_SECRET";
    pub const ENCRYPT_KEY: &str = "SYNDESIS_ENCRYPT_KEY";
    pub const CLIENT_STATE_AUTHENTICATION_KEY: &str = "CLIENT_STATE_AUTHENTICATION_KEY";
    pub const CLIENT_STATE_ENCRYPTION_KEY: &str = "CLIENT_STATE_ENCRYPTION_KEY";
    /// Blob key used by the deprecated secret layout
    pub const LEGACY_PARAMS: &str = "params";
}

/// Environment variables consumed during resolution
pub mod env_vars {
    pub const ROUTE_HOSTNAME: &str = "ROUTE_HOSTNAME";
    pub const DEV_SUPPORT: &str = "DEV_SUPPORT";
    pub const TEST_SUPPORT: &str = "TEST_SUPPORT";

    pub const RELATED_IMAGE_UI: &str = "RELATED_IMAGE_UI";
    pub const RELATED_IMAGE_S2I: &str = "RELATED_IMAGE_S2I";
    pub const RELATED_IMAGE_OAUTH: &str = "RELATED_IMAGE_OAUTH";
    pub const RELATED_IMAGE_SERVER: &str = "RELATED_IMAGE_SERVER";
    pub const RELATED_IMAGE_META: &str = "RELATED_IMAGE_META";
    pub const RELATED_IMAGE_DATABASE: &str = "RELATED_IMAGE_DATABASE";
    pub const RELATED_IMAGE_PSQL_EXPORTER: &str = "RELATED_IMAGE_PSQL_EXPORTER";
    pub const RELATED_IMAGE_PROMETHEUS: &str = "RELATED_IMAGE_PROMETHEUS";
    pub const RELATED_IMAGE_UPGRADE: &str = "RELATED_IMAGE_UPGRADE";
    pub const RELATED_IMAGE_AMQ: &str = "RELATED_IMAGE_AMQ";
    pub const RELATED_IMAGE_TODO: &str = "RELATED_IMAGE_TODO";

    pub const PROMETHEUS_VOLUME_ACCESS_MODE: &str = "PROMETHEUS_VOLUME_ACCESS_MODE";
    pub const PROMETHEUS_STORAGE_CLASS: &str = "PROMETHEUS_STORAGE_CLASS";
    pub const PROMETHEUS_VOLUME_NAME: &str = "PROMETHEUS_VOLUME_NAME";
    pub const META_VOLUME_ACCESS_MODE: &str = "META_VOLUME_ACCESS_MODE";
    pub const META_STORAGE_CLASS: &str = "META_STORAGE_CLASS";
    pub const META_VOLUME_NAME: &str = "META_VOLUME_NAME";
    pub const DATABASE_VOLUME_ACCESS_MODE: &str = "DATABASE_VOLUME_ACCESS_MODE";
    pub const DATABASE_STORAGE_CLASS: &str = "DATABASE_STORAGE_CLASS";
    pub const DATABASE_VOLUME_NAME: &str = "DATABASE_VOLUME_NAME";
}
