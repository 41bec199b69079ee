// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The CronJob owned by every GitStar

use crate::config::Config;
use crate::constants::cronjob::{CONTAINER_SUFFIX, HISTORY_LIMIT, SERVICE_ACCOUNT};
use crate::constants::env::{GITSTAR_NAME, GITSTAR_NAMESPACE};
use crate::types::GitStar;
use k8s_openapi::api::batch::v1::{CronJob, CronJobSpec, JobSpec, JobTemplateSpec};
use k8s_openapi::api::core::v1::{Container, EnvVar, PodSpec, PodTemplateSpec};
use kube::{api::ObjectMeta, Resource, ResourceExt};
use std::collections::BTreeMap;

/// Build the desired CronJob for `gitstar`, owned by it
pub fn desired_cronjob(gitstar: &GitStar, config: &Config) -> CronJob {
    let name = gitstar.name_any();
    let namespace = gitstar.namespace().unwrap_or_default();

    let labels = BTreeMap::from([("app".to_string(), name.clone())]);

    CronJob {
        metadata: ObjectMeta {
            name: Some(gitstar.cron_job_name()),
            namespace: Some(namespace.clone()),
            labels: Some(labels),
            owner_references: gitstar.controller_owner_ref(&()).map(|oref| vec![oref]),
            ..Default::default()
        },
        spec: Some(CronJobSpec {
            schedule: config.schedule.clone(),
            concurrency_policy: Some("Replace".to_string()),
            successful_jobs_history_limit: Some(HISTORY_LIMIT),
            failed_jobs_history_limit: Some(HISTORY_LIMIT),
            job_template: JobTemplateSpec {
                metadata: None,
                spec: Some(JobSpec {
                    template: PodTemplateSpec {
                        metadata: None,
                        spec: Some(PodSpec {
                            service_account_name: Some(SERVICE_ACCOUNT.to_string()),
                            restart_policy: Some("Never".to_string()),
                            containers: vec![Container {
                                name: format!("{}{}", name, CONTAINER_SUFFIX),
                                image: Some(config.job_image.clone()),
                                env: Some(vec![
                                    EnvVar {
                                        name: GITSTAR_NAME.to_string(),
                                        value: Some(name.clone()),
                                        ..Default::default()
                                    },
                                    EnvVar {
                                        name: GITSTAR_NAMESPACE.to_string(),
                                        value: Some(namespace),
                                        ..Default::default()
                                    },
                                ]),
                                ..Default::default()
                            }],
                            ..Default::default()
                        }),
                    },
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}
