// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Child resources managed for GitStars.

pub mod cronjob;

pub use cronjob::desired_cronjob;
