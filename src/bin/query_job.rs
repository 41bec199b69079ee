// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use tracing::info;

use gitstar_operator::job::JobRunner;
use gitstar_operator::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();

    let client = Client::try_default()
        .await
        .context("Failed to create Kubernetes client")?;

    info!("Starting GitStar query job");

    // Target comes from git_star_name / git_star_name_space
    JobRunner::new(client).run(None, None).await;

    Ok(())
}
