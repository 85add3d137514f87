// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyndesisError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid external database URL: {0}")]
    DatabaseUrl(#[from] url::ParseError),

    #[error("no configuration found")]
    NoConfiguration,
}

pub type Result<T> = std::result::Result<T, SyndesisError>;
