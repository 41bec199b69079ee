// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Ticker-driven alternative to per-GitStar CronJobs.

pub mod ticker;

pub use ticker::TickerPoller;
