// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use tracing::{info, warn};

use gitstar_operator::config::{Config, Mode};
use gitstar_operator::poller::TickerPoller;
use gitstar_operator::reconcilers::GitStarReconciler;
use gitstar_operator::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    info!("Starting GitStar operator");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: mode={:?}, schedule='{}', job_image={}",
        config.mode, config.schedule, config.job_image
    );

    // Create Kubernetes client
    let client = Client::try_default()
        .await
        .context("Failed to create Kubernetes client")?;
    info!("Connected to Kubernetes cluster");

    match config.mode {
        Mode::Controller => {
            info!("Starting GitStar reconciler...");
            GitStarReconciler::new(client, config).run().await?;
        }
        Mode::Ticker => {
            let poller = TickerPoller::from_config(client, &config).await;
            poller.run().await?;
        }
    }

    // This should never be reached as both modes run forever
    warn!("GitStar operator stopped unexpectedly");
    Ok(())
}
