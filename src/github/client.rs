// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! reqwest-backed GitHub REST client

use crate::constants::github::{PUBLIC_API_URL, PUBLIC_DOMAIN, USER_AGENT};
use crate::error::Result;
use crate::github::{Repository, RepositoryApi};
use reqwest::{header::ACCEPT, StatusCode};
use std::fmt;
use tracing::{debug, instrument};
use url::Url;

/// Client for the "get a repository" endpoint of the GitHub REST API
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client for the given API base url.
    /// An empty token yields an anonymous client.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let token = Some(token.trim().to_string()).filter(|t| !t.is_empty());

        Ok(Self {
            http,
            base_url: Url::parse(&base)?,
            token,
        })
    }

    /// Create a client for the host a GitStar points at
    pub fn for_domain(repo_domain: &str, token: &str) -> Result<Self> {
        Self::new(&api_url_for_domain(repo_domain), token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

// Never prints the token.
impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url.as_str())
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// API base url for a repository host.
/// Anything other than github.com is treated as a GitHub Enterprise server.
pub fn api_url_for_domain(repo_domain: &str) -> String {
    let domain = repo_domain
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');

    if domain.is_empty()
        || domain.eq_ignore_ascii_case(PUBLIC_DOMAIN)
        || domain.eq_ignore_ascii_case("www.github.com")
    {
        PUBLIC_API_URL.to_string()
    } else {
        format!("https://{}/api/v3", domain)
    }
}

impl RepositoryApi for GitHubClient {
    #[instrument(skip(self))]
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Option<Repository>> {
        let url = self.base_url.join(&format!("repos/{}/{}", owner, repo))?;
        debug!("GET {}", url);

        let mut request = self
            .http
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let repository = response.error_for_status()?.json::<Repository>().await?;
        Ok(Some(repository))
    }
}
