// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "gitstar_operator=info,kube=info";

/// Initialize tracing, honouring RUST_LOG when set
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
