// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables injected into every query job container
pub mod env {
    /// Name of the GitStar the job refreshes
    pub const GITSTAR_NAME: &str = "git_star_name";
    /// Namespace of the GitStar the job refreshes
    pub const GITSTAR_NAMESPACE: &str = "git_star_name_space";
}

/// Location of the optional GitHub token ConfigMap
pub mod token {
    pub const CONFIGMAP_NAMESPACE: &str = "default";
    pub const CONFIGMAP_NAME: &str = "gitstar-github-token";
    pub const CONFIGMAP_KEY: &str = "token";
    /// Length of a classic GitHub personal access token
    pub const LENGTH: usize = 40;
}

/// CronJob template settings
pub mod cronjob {
    /// Suffix appended to the GitStar name to build the CronJob name
    pub const NAME_SUFFIX: &str = "-gitstar";
    /// Suffix appended to the GitStar name to build the container name
    pub const CONTAINER_SUFFIX: &str = "-gitstarjob";
    /// Minute 12 of every hour
    pub const DEFAULT_SCHEDULE: &str = "12 * * * *";
    pub const DEFAULT_IMAGE: &str = "kurisux/gitstar-queryjob:latest";
    pub const SERVICE_ACCOUNT: &str = "gitstar-operator";
    pub const HISTORY_LIMIT: i32 = 5;
}

/// GitHub API endpoints
pub mod github {
    pub const PUBLIC_DOMAIN: &str = "github.com";
    pub const PUBLIC_API_URL: &str = "https://api.github.com";
    pub const USER_AGENT: &str = concat!("gitstar-operator/", env!("CARGO_PKG_VERSION"));
}

/// The operator name used as field manager for status patches
pub const OPERATOR_NAME: &str = "gitstar-operator";

/// Default period of the in-process ticker
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;

/// Requeue delay applied by the reconciler error policy
pub const ERROR_REQUEUE_SECS: u64 = 60;
