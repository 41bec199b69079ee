// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! GitHub access: repository lookup and star counting.

pub mod client;
pub mod stars;

use crate::error::Result;
use serde::Deserialize;
use std::future::Future;

pub use client::GitHubClient;
pub use stars::{fetch_star_count, fetch_stars};

/// The subset of the GitHub repository payload we care about
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Repository {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
}

/// Source of repository metadata.
///
/// `Ok(None)` means the repository does not exist on the remote.
pub trait RepositoryApi {
    fn get_repository(
        &self,
        owner: &str,
        repo: &str,
    ) -> impl Future<Output = Result<Option<Repository>>> + Send;
}
