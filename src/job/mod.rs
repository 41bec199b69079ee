// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The query job executed by every GitStar CronJob.

pub mod runner;

pub use runner::{resolve_target, JobRunner, Target};
