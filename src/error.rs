// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitStarError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("The repo name '{0}' is invalid, expected owner/repo")]
    InvalidIdentifier(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repo '{0}' has no star number")]
    MissingMetric(String),

    #[error("GitHub API error: {0}")]
    RemoteError(#[from] reqwest::Error),

    #[error("Invalid GitHub API url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

pub type Result<T> = std::result::Result<T, GitStarError>;
