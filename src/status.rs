// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! GitStar status transitions and status subresource writes

use crate::constants::OPERATOR_NAME;
use crate::error::Result;
use crate::github::fetch_stars;
use crate::types::{GitStar, GitStarStatus};
use chrono::{DateTime, Utc};
use kube::{
    api::{Patch, PatchParams},
    Api, Client, ResourceExt,
};
use serde_json::json;
use tracing::{info, instrument, warn};

/// Compute the status after a fetch.
///
/// A failure only records the reason: the last known star number and its
/// timestamp are kept. Without any previous status the star number is -1
/// and the timestamp the unix epoch.
pub fn apply_result(
    previous: Option<&GitStarStatus>,
    result: &Result<i64>,
    now: DateTime<Utc>,
) -> GitStarStatus {
    match result {
        Ok(count) => GitStarStatus {
            star_number: *count,
            updated_at: now,
            failed_reason: String::new(),
        },
        Err(e) => match previous {
            Some(prev) => GitStarStatus {
                star_number: prev.star_number,
                updated_at: prev.updated_at,
                failed_reason: e.to_string(),
            },
            None => GitStarStatus {
                star_number: -1,
                updated_at: DateTime::<Utc>::UNIX_EPOCH,
                failed_reason: e.to_string(),
            },
        },
    }
}

/// Write the status of `gitstar` through the status subresource.
/// Spec and metadata are never touched.
#[instrument(skip(client, gitstar), fields(gitstar = %format!("{}/{}", gitstar.namespace().unwrap_or_default(), gitstar.name_any())))]
pub async fn persist(client: &Client, gitstar: &GitStar) -> Result<GitStar> {
    let namespace = gitstar.namespace().unwrap_or_default();
    let gitstars: Api<GitStar> = Api::namespaced(client.clone(), &namespace);

    let pp = PatchParams {
        field_manager: Some(OPERATOR_NAME.to_string()),
        ..Default::default()
    };
    let patch = json!({ "status": gitstar.status });

    Ok(gitstars
        .patch_status(&gitstar.name_any(), &pp, &Patch::Merge(&patch))
        .await?)
}

/// Fold a fetch result into the status of `gitstar` and persist it
pub async fn record(client: &Client, mut gitstar: GitStar, result: Result<i64>) -> Result<GitStar> {
    if let Err(e) = &result {
        warn!(
            "Failed to get star number of repo '{}': {}",
            gitstar.spec.repo_name, e
        );
    }

    gitstar.status = Some(apply_result(gitstar.status.as_ref(), &result, Utc::now()));
    persist(client, &gitstar).await
}

/// Fetch the star count from the host named by `spec.repoDomain` and record it.
/// An empty token means anonymous access.
pub async fn refresh_from_github(client: &Client, gitstar: GitStar, token: &str) -> Result<GitStar> {
    let result = fetch_stars(&gitstar.spec.repo_domain, &gitstar.spec.repo_name, token).await;
    record(client, gitstar, result).await
}

/// Star number written by a successful refresh, or why the refresh failed
pub fn outcome(gitstar: &GitStar) -> std::result::Result<i64, &str> {
    match &gitstar.status {
        Some(status) if status.failed_reason.is_empty() => Ok(status.star_number),
        Some(status) => Err(status.failed_reason.as_str()),
        None => Err("no status"),
    }
}

/// Log the outcome of a refresh that reached the store
pub fn log_outcome(gitstar: &GitStar) {
    match outcome(gitstar) {
        Ok(stars) => info!(
            "update repo '{}', star number: '{}'",
            gitstar.spec.repo_name, stars
        ),
        Err(reason) => warn!("repo '{}' not updated: {}", gitstar.spec.repo_name, reason),
    }
}
