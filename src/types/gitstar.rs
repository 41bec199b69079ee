// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::cronjob::NAME_SUFFIX;
use crate::error::GitStarError;
use chrono::{DateTime, Utc};
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A GitHub repository whose star count is tracked in the status
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(group = "app.gitstar.io", version = "v1", kind = "GitStar")]
#[kube(namespaced)]
#[kube(status = "GitStarStatus")]
#[kube(shortname = "gs")]
#[kube(printcolumn = r#"{"name":"Repo","type":"string","jsonPath":".spec.repoName"}"#)]
#[kube(printcolumn = r#"{"name":"Stars","type":"integer","jsonPath":".status.starNumber"}"#)]
#[serde(rename_all = "camelCase")]
pub struct GitStarSpec {
    /// Host of the repository, `github.com` when empty
    #[serde(default)]
    pub repo_domain: String,
    /// Repository in `owner/repo` form
    pub repo_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitStarStatus {
    /// Last known star count, -1 when no fetch ever succeeded
    pub star_number: i64,
    pub updated_at: DateTime<Utc>,
    /// Empty after a successful fetch
    #[serde(default)]
    pub failed_reason: String,
}

impl GitStar {
    /// Name of the CronJob that refreshes this GitStar
    pub fn cron_job_name(&self) -> String {
        cron_job_name(&self.name_any())
    }

    /// Last known star count, if a status was ever written
    pub fn star_number(&self) -> Option<i64> {
        self.status.as_ref().map(|s| s.star_number)
    }
}

/// Name of the CronJob owned by the GitStar called `gitstar_name`
pub fn cron_job_name(gitstar_name: &str) -> String {
    format!("{}{}", gitstar_name, NAME_SUFFIX)
}

/// A parsed `owner/repo` identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoName {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoName {
    type Err = GitStarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Ok(RepoName {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(GitStarError::InvalidIdentifier(s.to_string())),
        }
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
