// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Single fetch-and-update cycle for one GitStar, run by every query job.

use crate::constants::env::{GITSTAR_NAME, GITSTAR_NAMESPACE};
use crate::credentials::resolve_token;
use crate::error::{GitStarError, Result};
use crate::status;
use crate::types::GitStar;
use kube::{Api, Client};
use std::env;
use std::fmt;
use tracing::{error, instrument};

/// Identity of the GitStar a run works on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub namespace: String,
    pub name: String,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Resolve the target from explicit hints, falling back to the job environment.
/// Empty hints count as absent.
pub fn resolve_target(
    namespace_hint: Option<&str>,
    name_hint: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Target> {
    let from_hint_or_env = |hint: Option<&str>, key: &str| -> Result<String> {
        match hint.filter(|h| !h.is_empty()) {
            Some(h) => Ok(h.to_string()),
            None => lookup(key).filter(|v| !v.is_empty()).ok_or_else(|| {
                GitStarError::ConfigurationError(format!(
                    "environment variable {} is empty or not set",
                    key
                ))
            }),
        }
    };

    Ok(Target {
        namespace: from_hint_or_env(namespace_hint, GITSTAR_NAMESPACE)?,
        name: from_hint_or_env(name_hint, GITSTAR_NAME)?,
    })
}

/// Refreshes the star count of one GitStar
#[derive(Clone)]
pub struct JobRunner {
    client: Client,
}

impl JobRunner {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Run once and log the outcome. The next attempt is left to the scheduler.
    pub async fn run(&self, namespace_hint: Option<&str>, name_hint: Option<&str>) {
        if let Err(e) = self.run_once(namespace_hint, name_hint).await {
            error!("GitStar query job failed: {}", e);
        }
    }

    /// Resolve the target and refresh it
    pub async fn run_once(
        &self,
        namespace_hint: Option<&str>,
        name_hint: Option<&str>,
    ) -> Result<GitStar> {
        let target = resolve_target(namespace_hint, name_hint, |key| env::var(key).ok())?;
        self.run_target(&target).await
    }

    /// Refresh a known target.
    /// Nothing is written when the GitStar cannot be read.
    #[instrument(skip(self, target), fields(gitstar = %target))]
    pub async fn run_target(&self, target: &Target) -> Result<GitStar> {
        let token = resolve_token(&self.client).await;

        let gitstars: Api<GitStar> = Api::namespaced(self.client.clone(), &target.namespace);
        let gitstar = gitstars.get(&target.name).await.map_err(|e| match e {
            kube::Error::Api(ae) if ae.code == 404 => {
                GitStarError::NotFound(format!("gitstar {}", target))
            }
            e => GitStarError::from(e),
        })?;

        let updated = status::refresh_from_github(&self.client, gitstar, &token).await?;
        status::log_outcome(&updated);
        Ok(updated)
    }
}
