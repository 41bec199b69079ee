// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Star count lookup with failure classification

use crate::error::{GitStarError, Result};
use crate::github::{GitHubClient, Repository, RepositoryApi};
use crate::types::RepoName;
use tracing::{debug, instrument};

/// Look up the star count of `repo_name` (`owner/repo`) with a single call.
/// The identifier is validated before anything is sent.
#[instrument(skip(api))]
pub async fn fetch_star_count<A: RepositoryApi>(api: &A, repo_name: &str) -> Result<i64> {
    let repo: RepoName = repo_name.parse()?;

    match api.get_repository(&repo.owner, &repo.repo).await? {
        None => Err(GitStarError::NotFound(format!("repo '{}'", repo_name))),
        Some(Repository {
            stargazers_count: None,
            ..
        }) => Err(GitStarError::MissingMetric(repo_name.to_string())),
        Some(Repository {
            stargazers_count: Some(count),
            ..
        }) => {
            debug!("Repo {} has {} stars", repo, count);
            Ok(i64::try_from(count).unwrap_or(i64::MAX))
        }
    }
}

/// Build a client for `repo_domain` and look up the star count.
/// A host that yields no usable API url fails like any other lookup.
pub async fn fetch_stars(repo_domain: &str, repo_name: &str, token: &str) -> Result<i64> {
    repo_name.parse::<RepoName>()?;
    let client = GitHubClient::for_domain(repo_domain, token)?;
    fetch_star_count(&client, repo_name).await
}
