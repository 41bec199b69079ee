// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! GitHub token lookup from the shared token ConfigMap

use crate::constants::token::{CONFIGMAP_KEY, CONFIGMAP_NAME, CONFIGMAP_NAMESPACE, LENGTH};
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{Api, Client};
use tracing::{debug, info, instrument, warn};

/// Resolve the GitHub token, or an empty string for anonymous access.
/// Failing to read the ConfigMap is never an error.
#[instrument(skip(client))]
pub async fn resolve_token(client: &Client) -> String {
    let configmaps: Api<ConfigMap> = Api::namespaced(client.clone(), CONFIGMAP_NAMESPACE);

    match configmaps.get(CONFIGMAP_NAME).await {
        Ok(cm) => match extract_token(&cm) {
            Some(token) => {
                debug!("Using GitHub token from {}/{}", CONFIGMAP_NAMESPACE, CONFIGMAP_NAME);
                token
            }
            None => {
                warn!(
                    "ConfigMap {}/{} has no valid '{}' entry, using anonymous access",
                    CONFIGMAP_NAMESPACE, CONFIGMAP_NAME, CONFIGMAP_KEY
                );
                String::new()
            }
        },
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!(
                "Token ConfigMap {}/{} not found, using anonymous access",
                CONFIGMAP_NAMESPACE, CONFIGMAP_NAME
            );
            String::new()
        }
        Err(e) => {
            warn!(
                "Failed to read token ConfigMap {}/{}: {}, using anonymous access",
                CONFIGMAP_NAMESPACE, CONFIGMAP_NAME, e
            );
            String::new()
        }
    }
}

/// Extract the trimmed token if it has the expected length
pub fn extract_token(cm: &ConfigMap) -> Option<String> {
    cm.data
        .as_ref()
        .and_then(|d| d.get(CONFIGMAP_KEY))
        .map(|t| t.trim())
        .filter(|t| t.len() == LENGTH)
        .map(str::to_string)
}
