// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-process refresh of every GitStar on a fixed interval.

use crate::config::Config;
use crate::constants::DEFAULT_POLL_INTERVAL_SECS;
use crate::credentials::resolve_token;
use crate::status::{log_outcome, refresh_from_github};
use crate::types::GitStar;
use kube::{api::ListParams, Api, Client, ResourceExt};
use std::time::Duration;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, error, info, instrument, warn};

/// Period used when a zero period is asked for
const FALLBACK_PERIOD: Duration = Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS);

pub struct TickerPoller {
    client: Client,
    token: String,
    period: Duration,
}

impl TickerPoller {
    /// A zero `period` falls back to the default poll interval.
    pub fn new(client: Client, token: String, period: Duration) -> Self {
        let period = if period.is_zero() {
            FALLBACK_PERIOD
        } else {
            period
        };
        Self {
            client,
            token,
            period,
        }
    }

    /// Create a poller whose token is fixed for the lifetime of the process:
    /// the configured one, or whatever the token ConfigMap holds at startup.
    pub async fn from_config(client: Client, config: &Config) -> Self {
        let token = match &config.github_token {
            Some(token) => token.clone(),
            None => resolve_token(&client).await,
        };
        Self::new(client, token, config.poll_interval)
    }

    /// Tick forever. Ticks never overlap: when a pass overruns the period the
    /// missed ticks are dropped.
    pub async fn run(self) -> anyhow::Result<()> {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "Ticker started, refreshing all GitStars every {:?} ({})",
            self.period,
            if self.token.is_empty() { "anonymous" } else { "authenticated" }
        );

        loop {
            ticker.tick().await;

            let started = Instant::now();
            let refreshed = self.poll_once().await;
            let elapsed = started.elapsed();

            debug!("Refreshed {} GitStars in {:?}", refreshed, elapsed);
            if elapsed > self.period {
                warn!(
                    "Refreshing GitStars took {:?}, longer than the {:?} period, skipping missed ticks",
                    elapsed, self.period
                );
            }
        }
    }

    /// Refresh every GitStar once, one after the other.
    /// Returns how many were written successfully.
    #[instrument(skip(self))]
    pub async fn poll_once(&self) -> usize {
        let gitstars: Api<GitStar> = Api::all(self.client.clone());
        let list = match gitstars.list(&ListParams::default()).await {
            Ok(l) => l,
            Err(e) => {
                error!("Failed to list GitStars: {}", e);
                return 0;
            }
        };

        let mut refreshed = 0;
        for gitstar in list.items {
            let id = format!("{}/{}", gitstar.namespace().unwrap_or_default(), gitstar.name_any());

            match refresh_from_github(&self.client, gitstar, &self.token).await {
                Ok(updated) => {
                    log_outcome(&updated);
                    refreshed += 1;
                }
                Err(e) => error!("Failed to update GitStar {}: {}", id, e),
            }
        }

        refreshed
    }
}
