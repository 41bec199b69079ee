// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod github;
pub mod job;
pub mod poller;
pub mod reconcilers;
pub mod resources;
pub mod status;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub mod test_utils;
