// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! GitStar reconciler - keeps exactly one CronJob per GitStar.

use crate::config::Config;
use crate::constants::ERROR_REQUEUE_SECS;
use crate::error::{GitStarError, Result};
use crate::job::{JobRunner, Target};
use crate::resources::desired_cronjob;
use crate::types::{cron_job_name, GitStar};
use futures::StreamExt;
use k8s_openapi::api::batch::v1::CronJob;
use kube::{
    api::{DeleteParams, PostParams},
    runtime::{controller::Action, watcher, Controller, WatchStreamExt},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

pub struct GitStarReconciler {
    client: Client,
    config: Config,
}

impl GitStarReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let gitstars: Api<GitStar> = Api::all(self.client.clone());
        let cronjobs: Api<CronJob> = Api::all(self.client.clone());
        let context = Arc::new(self);

        let controller = Controller::new(gitstars.clone(), WatcherConfig::default())
            .owns(cronjobs, WatcherConfig::default())
            .run(reconcile, error_policy, context.clone())
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled gitstar: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            });

        tokio::join!(controller, watch_deletions(gitstars, context));

        Ok(())
    }
}

/// The controller only sees objects that still exist, so deletions are
/// fed into the same state machine from a separate watch.
async fn watch_deletions(gitstars: Api<GitStar>, ctx: Arc<GitStarReconciler>) {
    let mut events = watcher(gitstars, WatcherConfig::default())
        .default_backoff()
        .boxed();

    while let Some(event) = events.next().await {
        match event {
            Ok(watcher::Event::Delete(gitstar)) => {
                let namespace = gitstar.namespace().unwrap_or_default();
                if let Err(e) = reconcile_gitstar(&ctx, &namespace, &gitstar.name_any()).await {
                    warn!("Cleanup after deletion of {}/{} failed: {}", namespace, gitstar.name_any(), e);
                }
            }
            Ok(_) => {}
            Err(e) => warn!("GitStar watch error: {}", e),
        }
    }
}

async fn reconcile(gitstar: Arc<GitStar>, ctx: Arc<GitStarReconciler>) -> Result<Action> {
    let namespace = gitstar.namespace().unwrap_or_default();
    reconcile_gitstar(&ctx, &namespace, &gitstar.name_any()).await
}

/// Converge the CronJob of the GitStar `namespace/name` with the current store state
#[instrument(skip(ctx))]
pub async fn reconcile_gitstar(
    ctx: &GitStarReconciler,
    namespace: &str,
    name: &str,
) -> Result<Action> {
    let gitstars: Api<GitStar> = Api::namespaced(ctx.client.clone(), namespace);
    let cronjobs: Api<CronJob> = Api::namespaced(ctx.client.clone(), namespace);
    let cronjob_name = cron_job_name(name);

    debug!("Reconciling GitStar {}/{}", namespace, name);

    let gitstar = match gitstars.get(name).await {
        Ok(g) => g,
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("GitStar {}/{} was deleted, removing CronJob {}", namespace, name, cronjob_name);
            delete_cronjob(&cronjobs, &cronjob_name).await;
            return Ok(Action::await_change());
        }
        Err(e) => return Err(e.into()),
    };

    let cronjob = desired_cronjob(&gitstar, &ctx.config);

    match cronjobs.get(&cronjob_name).await {
        Ok(_) => {
            debug!("Skip reconcile: CronJob {}/{} already exists", namespace, cronjob_name);
            Ok(Action::await_change())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Creating CronJob {}/{}", namespace, cronjob_name);
            cronjobs
                .create(&PostParams::default(), &cronjob)
                .await
                .map_err(|e| {
                    error!("Failed to create CronJob {}/{}: {}", namespace, cronjob_name, e);
                    GitStarError::from(e)
                })?;

            if ctx.config.run_on_create {
                spawn_first_run(ctx.client.clone(), namespace, name);
            }
            Ok(Action::await_change())
        }
        Err(e) => {
            error!("Failed to get CronJob {}/{}: {}", namespace, cronjob_name, e);
            Err(e.into())
        }
    }
}

/// Best-effort removal, the owner reference covers anything missed here
async fn delete_cronjob(cronjobs: &Api<CronJob>, cronjob_name: &str) {
    match cronjobs.delete(cronjob_name, &DeleteParams::default()).await {
        Ok(_) => info!("Deleted CronJob {}", cronjob_name),
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("CronJob {} already gone", cronjob_name)
        }
        Err(e) => error!("Failed to delete CronJob {}: {}", cronjob_name, e),
    }
}

/// Refresh the star count right away instead of waiting for the first schedule
fn spawn_first_run(client: Client, namespace: &str, name: &str) {
    let target = Target {
        namespace: namespace.to_string(),
        name: name.to_string(),
    };
    let runner = JobRunner::new(client);

    tokio::spawn(async move {
        if let Err(e) = runner.run_target(&target).await {
            warn!("First refresh of {} failed: {}", target, e);
        }
    });
}

fn error_policy(
    _gitstar: Arc<GitStar>,
    error: &GitStarError,
    _ctx: Arc<GitStarReconciler>,
) -> Action {
    error!("Reconciliation error: {}", error);
    Action::requeue(Duration::from_secs(ERROR_REQUEUE_SECS))
}
