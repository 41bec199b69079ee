// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{cronjob, DEFAULT_POLL_INTERVAL_SECS};
use anyhow::{bail, Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;

/// How star counts get refreshed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Reconcile one CronJob per GitStar and let the jobs do the work
    Controller,
    /// Refresh every GitStar in-process on a fixed interval
    Ticker,
}

impl std::str::FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "controller" => Ok(Mode::Controller),
            "ticker" => Ok(Mode::Ticker),
            other => bail!("unknown GITSTAR_MODE '{}', expected controller or ticker", other),
        }
    }
}

/// Operator configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    pub mode: Mode,
    /// Image running the query job inside every CronJob
    pub job_image: String,
    pub schedule: String,
    /// Run the query job logic once right after a CronJob is created
    pub run_on_create: bool,
    pub poll_interval: Duration,
    /// Token used by the ticker; never printed
    pub github_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::Controller,
            job_image: cronjob::DEFAULT_IMAGE.to_string(),
            schedule: cronjob::DEFAULT_SCHEDULE.to_string(),
            run_on_create: true,
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            github_token: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("mode", &self.mode)
            .field("job_image", &self.job_image)
            .field("schedule", &self.schedule)
            .field("run_on_create", &self.run_on_create)
            .field("poll_interval", &self.poll_interval)
            .field("github_token", &self.github_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let mode = match lookup("GITSTAR_MODE") {
            Some(m) => m.parse().context("GITSTAR_MODE is invalid")?,
            None => defaults.mode,
        };
        let job_image = lookup("GITSTAR_JOB_IMAGE").unwrap_or(defaults.job_image);
        let schedule = lookup("GITSTAR_SCHEDULE").unwrap_or(defaults.schedule);
        let run_on_create = match lookup("GITSTAR_RUN_ON_CREATE") {
            Some(v) => v
                .trim()
                .parse()
                .context("GITSTAR_RUN_ON_CREATE must be true or false")?,
            None => defaults.run_on_create,
        };
        let poll_interval = match lookup("GITSTAR_POLL_INTERVAL_SECS") {
            Some(v) => {
                let secs: u64 = v
                    .trim()
                    .parse()
                    .context("GITSTAR_POLL_INTERVAL_SECS must be a number of seconds")?;
                if secs == 0 {
                    bail!("GITSTAR_POLL_INTERVAL_SECS must be at least 1");
                }
                Duration::from_secs(secs)
            }
            None => defaults.poll_interval,
        };
        let github_token = lookup("GITHUB_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Config {
            mode,
            job_image,
            schedule,
            run_on_create,
            poll_interval,
            github_token,
        })
    }
}
