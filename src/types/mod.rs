// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource types.

pub mod gitstar;

pub use gitstar::{cron_job_name, GitStar, GitStarSpec, GitStarStatus, RepoName};
